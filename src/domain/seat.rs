//! Seat: the atomic reservation unit

use std::fmt;

use crate::domain::{DomainError, DomainResult};

/// Reservation state of a seat.
///
/// The only legal transition is `Unreserved` → `ReservedFor`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Reservation {
    #[default]
    Unreserved,
    ReservedFor(String),
}

/// A single seat in a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    name: String,
    accessible: bool,
    reservation: Reservation,
}

impl Seat {
    pub fn new(name: impl Into<String>, accessible: bool) -> Self {
        Self {
            name: name.into(),
            accessible,
            reservation: Reservation::Unreserved,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_accessible(&self) -> bool {
        self.accessible
    }

    pub fn reservation(&self) -> &Reservation {
        &self.reservation
    }

    pub fn is_reserved(&self) -> bool {
        matches!(self.reservation, Reservation::ReservedFor(_))
    }

    /// Customer holding this seat, if any.
    pub fn reserved_for(&self) -> Option<&str> {
        match &self.reservation {
            Reservation::ReservedFor(customer) => Some(customer),
            Reservation::Unreserved => None,
        }
    }

    /// Reserve the seat for `customer`.
    ///
    /// # Errors
    /// - `AlreadyReserved` if the seat has a holder (the holder is left unchanged)
    /// - `InvalidInput` if `customer` is empty
    pub fn reserve(&mut self, customer: &str) -> DomainResult<()> {
        if let Reservation::ReservedFor(holder) = &self.reservation {
            return Err(DomainError::AlreadyReserved {
                seat: self.name.clone(),
                customer: holder.clone(),
            });
        }
        if customer.is_empty() {
            return Err(DomainError::invalid_input("customer name cannot be empty"));
        }
        self.reservation = Reservation::ReservedFor(customer.to_string());
        Ok(())
    }

    /// Chart symbol: `X` reserved, `=` accessible, `_` otherwise.
    pub fn symbol(&self) -> &'static str {
        if self.is_reserved() {
            "X"
        } else if self.accessible {
            "="
        } else {
            "_"
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
