//! Theater: named, ordered collection of rows

use std::collections::BTreeSet;
use std::fmt;

use tracing::debug;

use crate::domain::{DomainError, DomainResult, Row, RowSelector};

/// A theater owning rows numbered `1..=N`.
///
/// The shape (rows and seats) is fixed once built; only seat reservations change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theater {
    name: String,
    rows: Vec<Row>,
    accessible_rows: BTreeSet<usize>,
}

impl Theater {
    /// Build a theater from pre-built rows.
    ///
    /// # Errors
    /// `InvalidInput` if `name` is empty, `rows` is empty, or the row numbers
    /// are not exactly `1..=rows.len()` in order.
    pub fn new(name: impl Into<String>, rows: Vec<Row>) -> DomainResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::invalid_input("theater name cannot be empty"));
        }
        if rows.is_empty() {
            return Err(DomainError::invalid_input("theater needs at least one row"));
        }
        if let Some((idx, row)) = rows
            .iter()
            .enumerate()
            .find(|(idx, row)| row.number() != idx + 1)
        {
            return Err(DomainError::invalid_input(format!(
                "row at position {} has number {}, expected {}",
                idx + 1,
                row.number(),
                idx + 1
            )));
        }

        let accessible_rows = rows
            .iter()
            .filter(|row| row.is_accessible())
            .map(Row::number)
            .collect();

        Ok(Self {
            name,
            rows,
            accessible_rows,
        })
    }

    /// Build a theater of `number_of_rows` rows with `seats_per_row` seats each.
    ///
    /// A row is accessible iff its 1-based number is in `accessible_rows`.
    ///
    /// # Errors
    /// `InvalidInput` if `name` is empty, either count is zero, or an
    /// accessible row number lies outside `1..=number_of_rows`.
    pub fn generate(
        name: impl Into<String>,
        number_of_rows: usize,
        seats_per_row: usize,
        accessible_rows: &BTreeSet<usize>,
    ) -> DomainResult<Self> {
        if number_of_rows == 0 {
            return Err(DomainError::invalid_input("theater needs at least one row"));
        }
        if seats_per_row == 0 {
            return Err(DomainError::invalid_input("rows need at least one seat"));
        }
        if let Some(bad) = accessible_rows
            .iter()
            .find(|&&n| n == 0 || n > number_of_rows)
        {
            return Err(DomainError::invalid_input(format!(
                "accessible row {} not in 1..={}",
                bad, number_of_rows
            )));
        }

        let rows = (1..=number_of_rows)
            .map(|n| Row::generate(n, seats_per_row, accessible_rows.contains(&n)))
            .collect::<DomainResult<Vec<_>>>()?;
        debug!(
            number_of_rows,
            seats_per_row,
            accessible = ?accessible_rows,
            "generated theater"
        );
        Self::new(name, rows)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number_of_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Row numbers flagged as accessible.
    pub fn accessible_rows(&self) -> &BTreeSet<usize> {
        &self.accessible_rows
    }

    /// 1-based row lookup.
    pub fn row(&self, number: usize) -> DomainResult<&Row> {
        let idx = self.index_of(number)?;
        Ok(&self.rows[idx])
    }

    /// 1-based mutable row lookup.
    pub fn row_mut(&mut self, number: usize) -> DomainResult<&mut Row> {
        let idx = self.index_of(number)?;
        Ok(&mut self.rows[idx])
    }

    fn index_of(&self, number: usize) -> DomainResult<usize> {
        if number == 0 || number > self.rows.len() {
            return Err(DomainError::OutOfRange {
                row: number,
                rows: self.rows.len(),
            });
        }
        Ok(number - 1)
    }

    /// Unreserved seats across all rows.
    pub fn available_count(&self) -> usize {
        self.rows.iter().map(Row::available_count).sum()
    }

    /// Fresh middle-out traversal over this theater's rows.
    pub fn row_selector(&self) -> RowSelector {
        RowSelector::new(self.rows.len())
    }
}

impl fmt::Display for Theater {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
