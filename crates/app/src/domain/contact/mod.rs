//! Contact

pub mod errors;
pub mod models;
mod repository;
pub mod service;

pub use errors::ContactServiceError;
pub use service::*;
