//! Domain layer: seats, rows, theaters and the row selection policy
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod row;
pub mod seat;
pub mod selector;
pub mod theater;

pub use error::{DomainError, DomainResult};
pub use row::Row;
pub use seat::{Reservation, Seat};
pub use selector::RowSelector;
pub use theater::Theater;
