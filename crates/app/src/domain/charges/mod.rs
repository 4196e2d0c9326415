//! Charges

pub mod errors;
pub mod models;
mod repository;
pub mod service;

pub use errors::ChargesServiceError;
pub use service::*;
