//! Core domain models and logic for the case-study showcase

mod catalog;
#[cfg(feature = "ssr")]
pub mod config;
mod filter;
mod presentation;
mod state;

pub use catalog::*;
pub use filter::*;
pub use presentation::*;
pub use state::*;
