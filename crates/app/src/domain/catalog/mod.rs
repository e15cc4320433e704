//! Service Catalog

pub mod errors;
pub mod models;
mod repository;
pub mod service;

pub(crate) use repository::{PgCatalogRepository, try_get_price};

pub use errors::CatalogServiceError;
pub use service::*;
