//! Row: fixed-size ordered sequence of seats

use std::fmt;

use itertools::Itertools;
use tracing::{debug, trace};

use crate::domain::{DomainError, DomainResult, Seat};

/// A row of seats.
///
/// The seat sequence is fixed at construction; only the seats' reservation
/// state changes afterwards, and only through [`Row::reserve_block`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    number: usize,
    accessible: bool,
    seats: Vec<Seat>,
}

impl Row {
    /// Build a row from pre-built seats.
    ///
    /// # Errors
    /// `InvalidInput` if `seats` is empty, if `seats.len() != capacity`,
    /// or if `number` is 0 (rows are numbered from 1).
    pub fn new(
        capacity: usize,
        number: usize,
        accessible: bool,
        seats: Vec<Seat>,
    ) -> DomainResult<Self> {
        if seats.is_empty() {
            return Err(DomainError::invalid_input("seats in a row cannot be empty"));
        }
        if seats.len() != capacity {
            return Err(DomainError::invalid_input(format!(
                "row {} expects {} seats, got {}",
                number,
                capacity,
                seats.len()
            )));
        }
        if number == 0 {
            return Err(DomainError::invalid_input("row numbers start at 1"));
        }
        Ok(Self {
            number,
            accessible,
            seats,
        })
    }

    /// Build a row of `seats_per_row` unreserved seats named `1..=seats_per_row`.
    ///
    /// Every seat inherits the row's accessibility.
    pub fn generate(number: usize, seats_per_row: usize, accessible: bool) -> DomainResult<Self> {
        let seats = (1..=seats_per_row)
            .map(|n| Seat::new(n.to_string(), accessible))
            .collect();
        Self::new(seats_per_row, number, accessible, seats)
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn is_accessible(&self) -> bool {
        self.accessible
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    /// Always false: a row holds at least one seat.
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Number of unreserved seats.
    pub fn available_count(&self) -> usize {
        self.seats.iter().filter(|s| !s.is_reserved()).count()
    }

    /// Reserve `n` seats for `customer`, lowest free indices first.
    ///
    /// Returns `Ok(false)` without touching any seat when fewer than `n`
    /// seats are free. That outcome is expected; callers move on to the next row.
    ///
    /// # Errors
    /// `InvalidInput` if `n` is 0 or `customer` is empty (checked only after
    /// the capacity check passes).
    pub fn reserve_block(&mut self, n: usize, customer: &str) -> DomainResult<bool> {
        Ok(self.reserve_seats(n, customer)?.is_some())
    }

    /// Like [`Row::reserve_block`], but returns the names of the seats taken
    /// by this call, in seat order. `Ok(None)` on capacity shortfall.
    pub fn reserve_seats(
        &mut self,
        n: usize,
        customer: &str,
    ) -> DomainResult<Option<Vec<String>>> {
        let available = self.available_count();
        if n > available {
            trace!(row = self.number, n, available, "capacity shortfall");
            return Ok(None);
        }
        if customer.is_empty() {
            return Err(DomainError::invalid_input("customer name cannot be empty"));
        }
        if n == 0 {
            return Err(DomainError::invalid_input("party size must be positive"));
        }

        let mut taken = Vec::with_capacity(n);
        for seat in self.seats.iter_mut().filter(|s| !s.is_reserved()).take(n) {
            seat.reserve(customer)?;
            taken.push(seat.name().to_string());
        }
        debug!(row = self.number, n, customer, "block reserved");
        Ok(Some(taken))
    }

    /// Names of the seats held by `customer`, in seat order.
    pub fn seats_reserved_for(&self, customer: &str) -> Vec<String> {
        self.seats
            .iter()
            .filter(|s| s.reserved_for() == Some(customer))
            .map(|s| s.name().to_string())
            .collect()
    }

    /// Chart line: accessibility marker, row number, then seat symbols.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.accessible { "=" } else { "_" };
        write!(f, "{} {} {}", marker, self.number, self.seats.iter().join(" "))
    }
}
