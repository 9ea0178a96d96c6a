//! Application layer: services and use cases
//!
//! This layer orchestrates domain logic: it drives the row selector and
//! applies block reservations against a theater.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
