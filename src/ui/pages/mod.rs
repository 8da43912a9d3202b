//! Application pages module
//!
//! - Home page (case-study showcase and footer)
//! - Not found page

mod home;
mod not_found;

pub use home::HomePage;
pub use not_found::NotFoundPage;
