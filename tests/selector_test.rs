//! Tests for the middle-out RowSelector

use std::collections::BTreeSet;

use rstest::rstest;

use seatmap::domain::{RowSelector, Theater};

#[rstest]
#[case(1, &[1])]
#[case(5, &[3, 4, 2, 5, 1])]
#[case(6, &[3, 4, 2, 5, 1, 6])]
#[case(7, &[4, 5, 3, 6, 2, 7, 1])]
fn given_rows_when_selecting_then_yields_middle_out(
    #[case] rows: usize,
    #[case] expected: &[usize],
) {
    let order: Vec<usize> = RowSelector::new(rows).collect();
    assert_eq!(order, expected);
}

#[test]
fn given_any_row_count_when_selecting_then_each_row_visited_once() {
    for rows in 1..=300 {
        let order: Vec<usize> = RowSelector::new(rows).collect();
        assert_eq!(order.len(), rows, "length for {} rows", rows);

        let unique: BTreeSet<usize> = order.iter().copied().collect();
        let expected: BTreeSet<usize> = (1..=rows).collect();
        assert_eq!(unique, expected, "coverage for {} rows", rows);
    }
}

#[test]
fn given_any_row_count_when_selecting_then_distance_from_center_never_shrinks() {
    for rows in 1..=50 {
        let center = (1 + rows as i64) / 2;
        let distances: Vec<i64> = RowSelector::new(rows)
            .map(|r| (r as i64 - center).abs())
            .collect();
        assert!(
            distances.windows(2).all(|w| w[0] <= w[1]),
            "{} rows: {:?}",
            rows,
            distances
        );
    }
}

#[test]
fn given_exhausted_selector_when_polled_then_stays_empty() {
    let mut selector = RowSelector::new(3);
    assert_eq!(selector.by_ref().count(), 3);
    assert_eq!(selector.next(), None);
}

#[test]
fn given_theater_when_asking_for_selector_then_covers_its_rows() {
    let theater = Theater::generate("Roxy", 4, 2, &BTreeSet::new()).unwrap();
    let selector = theater.row_selector();
    assert_eq!(selector.len(), 4);
    assert_eq!(selector.collect::<Vec<_>>(), vec![2, 3, 1, 4]);
}
