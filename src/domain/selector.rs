//! Middle-out row selection
//!
//! Central rows are offered first: center, center+1, center-1, center+2, ...
//! Ties between the two sides go to the higher row number.

use std::iter::FusedIterator;

/// Lazy, single-pass sequence of row numbers in middle-out order.
///
/// State is just the next position and the signed step to the one after it.
/// The sequence ends as soon as the next position leaves `1..=rows`, which
/// happens right after every row has been emitted once.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowSelector {
    rows: i64,
    cur: i64,
    step: i64,
}

impl RowSelector {
    pub fn new(rows: usize) -> Self {
        let rows = rows as i64;
        Self {
            rows,
            cur: (1 + rows) / 2,
            step: 1,
        }
    }

    fn in_range(&self) -> bool {
        (1..=self.rows).contains(&self.cur)
    }
}

impl Iterator for RowSelector {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if !self.in_range() {
            return None;
        }
        let res = self.cur as usize;
        self.cur += self.step;
        self.step = if self.step > 0 {
            -self.step - 1
        } else {
            -self.step + 1
        };
        Some(res)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // |step| - 1 rows have been emitted so far
        let remaining = if self.in_range() {
            (self.rows - (self.step.abs() - 1)) as usize
        } else {
            0
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RowSelector {}

impl FusedIterator for RowSelector {}
