//! Carts

pub mod errors;
pub mod models;
mod repository;
pub mod service;

pub(crate) use repository::PgCartEntriesRepository;

pub use errors::CartsServiceError;
pub use service::*;
