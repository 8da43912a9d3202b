pub mod catalog_context;
pub mod common;
pub mod footer;
pub mod icon;
pub mod pages;
pub mod project_card;
pub mod project_details;
pub mod projects;

pub use catalog_context::provide_catalog_context;
