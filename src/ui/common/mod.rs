//! Common reusable UI components
//!
//! Building blocks shared by the showcase section, the footer and the pages.

pub mod container;
pub mod gradient_text;
pub mod modal;

pub use container::Container;
pub use gradient_text::GradientText;
pub use modal::Modal;
