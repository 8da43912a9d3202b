//! Catalog context shared by the component tree
//!
//! The embedded catalog is parsed once per process (or wasm instance) and handed
//! to components by reference.

use leptos::prelude::*;

use crate::core::{Catalog, CatalogError};

/// Read-only access to the embedded catalog
#[derive(Clone, Copy)]
pub struct CatalogContext {
    pub catalog: Result<&'static Catalog, &'static CatalogError>,
}

/// Load the embedded catalog and provide it to the application
pub fn provide_catalog_context() -> CatalogContext {
    let ctx = CatalogContext {
        catalog: Catalog::embedded(),
    };

    if let Err(err) = ctx.catalog {
        leptos::logging::error!("Project catalog unavailable: {}", err);
    }

    provide_context(ctx);
    ctx
}

/// Use catalog context from anywhere in the component tree
pub fn use_catalog_context() -> CatalogContext {
    use_context::<CatalogContext>().expect("CatalogContext should be provided")
}
