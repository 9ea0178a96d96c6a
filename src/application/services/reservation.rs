//! Reservation service
//!
//! Offers rows to a party in middle-out order and commits the block in the
//! first row with enough free seats.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, info, warn};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::Theater;

/// A party asking for a block of seats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationRequest {
    pub customer: String,
    pub party_size: usize,
}

impl ReservationRequest {
    pub fn new(customer: impl Into<String>, party_size: usize) -> Self {
        Self {
            customer: customer.into(),
            party_size,
        }
    }
}

/// Parses `NAME:SIZE`, e.g. `Alice:3`. The name may itself contain `:`;
/// the size is taken after the last one.
impl FromStr for ReservationRequest {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |message: &str| ApplicationError::InvalidRequest {
            input: s.to_string(),
            message: message.to_string(),
        };

        let (customer, size) = s
            .rsplit_once(':')
            .ok_or_else(|| invalid("expected NAME:SIZE"))?;
        let customer = customer.trim();
        if customer.is_empty() {
            return Err(invalid("customer name cannot be empty"));
        }
        let party_size: usize = size
            .trim()
            .parse()
            .map_err(|_| invalid("party size must be a positive integer"))?;
        if party_size == 0 {
            return Err(invalid("party size must be a positive integer"));
        }
        Ok(Self::new(customer, party_size))
    }
}

/// Seats committed to one customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    pub customer: String,
    pub row_number: usize,
    /// Names of the seats committed by this reservation, in seat order
    pub seats: Vec<String>,
}

impl fmt::Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: row {}, seats {}",
            self.customer,
            self.row_number,
            self.seats.join(", ")
        )
    }
}

/// Service allocating block reservations in a theater it owns.
#[derive(Debug, Clone)]
pub struct ReservationService {
    theater: Theater,
}

impl ReservationService {
    pub fn new(theater: Theater) -> Self {
        Self { theater }
    }

    pub fn theater(&self) -> &Theater {
        &self.theater
    }

    pub fn into_theater(self) -> Theater {
        self.theater
    }

    /// Reserve a block of `party_size` seats for `customer`.
    ///
    /// Rows are tried in middle-out order; the first row with enough free
    /// seats takes the whole party. Returns `Ok(None)` when no row fits,
    /// in which case nothing has been reserved.
    ///
    /// # Errors
    /// Domain errors (empty customer, zero party size) abort the search
    /// immediately.
    pub fn reserve(
        &mut self,
        party_size: usize,
        customer: &str,
    ) -> ApplicationResult<Option<Allocation>> {
        debug!("reserve: party_size={}, customer={}", party_size, customer);

        for row_number in self.theater.row_selector() {
            let row = self.theater.row_mut(row_number)?;
            if let Some(seats) = row.reserve_seats(party_size, customer)? {
                let allocation = Allocation {
                    customer: customer.to_string(),
                    row_number,
                    seats,
                };
                info!("reserved {}", allocation);
                return Ok(Some(allocation));
            }
        }

        warn!("no row has {} free seats for {}", party_size, customer);
        Ok(None)
    }

    /// Apply `requests` in order, one outcome per request.
    pub fn reserve_all(
        &mut self,
        requests: &[ReservationRequest],
    ) -> ApplicationResult<Vec<Option<Allocation>>> {
        requests
            .iter()
            .map(|r| self.reserve(r.party_size, &r.customer))
            .collect()
    }
}
