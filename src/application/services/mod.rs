//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.

mod reservation;

pub use reservation::{Allocation, ReservationRequest, ReservationService};
