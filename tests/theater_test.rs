//! Tests for the seating model: Seat, Row and Theater together

use std::collections::BTreeSet;

use rstest::{fixture, rstest};

use seatmap::domain::{DomainError, Row, Seat, Theater};
use seatmap::util::testing;

#[fixture]
fn grand() -> Theater {
    testing::init_test_setup();
    let seats = (1..=3).map(|n| Seat::new(n.to_string(), false)).collect();
    let row = Row::new(3, 1, false, seats).expect("row");
    Theater::new("Grand", vec![row]).expect("theater")
}

#[rstest]
fn given_grand_with_one_row_when_reserving_two_then_one_left(mut grand: Theater) {
    assert_eq!(grand.row(1).unwrap().available_count(), 3);

    let row = grand.row_mut(1).unwrap();
    assert!(row.reserve_block(2, "Alice").unwrap());

    let row = grand.row(1).unwrap();
    assert_eq!(row.available_count(), 1);
    assert_eq!(row.seats()[0].reserved_for(), Some("Alice"));
    assert_eq!(row.seats()[1].reserved_for(), Some("Alice"));
    assert_eq!(row.seats()[2].reserved_for(), None);
}

#[rstest]
fn given_grand_when_party_too_large_then_no_seat_changes(mut grand: Theater) {
    let before = grand.clone();

    let reserved = grand.row_mut(1).unwrap().reserve_block(4, "Alice").unwrap();

    assert!(!reserved);
    assert_eq!(grand, before);
}

#[rstest]
fn given_reserved_seat_when_reserving_again_then_already_reserved() {
    let mut seat = Seat::new("A1", false);
    seat.reserve("Alice").unwrap();

    let err = seat.reserve("Bob").unwrap_err();

    assert!(matches!(err, DomainError::AlreadyReserved { .. }));
    assert_eq!(seat.reserved_for(), Some("Alice"));
}

#[test]
fn given_empty_name_when_constructing_then_invalid_input() {
    let row = Row::generate(1, 2, false).unwrap();
    let err = Theater::new("", vec![row]).unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput { .. }));
}

#[test]
fn given_no_rows_when_constructing_then_invalid_input() {
    let err = Theater::new("Grand", vec![]).unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput { .. }));
}

#[rstest]
#[case("", 3, 4)]
#[case("Grand", 0, 4)]
#[case("Grand", 3, 0)]
fn given_bad_dimensions_when_generating_then_invalid_input(
    #[case] name: &str,
    #[case] rows: usize,
    #[case] seats_per_row: usize,
) {
    let err = Theater::generate(name, rows, seats_per_row, &BTreeSet::new()).unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput { .. }));
}

#[test]
fn given_generated_theater_then_shape_and_accessibility_match_request() {
    let accessible = BTreeSet::from([1, 4]);
    let theater = Theater::generate("Roxy", 5, 6, &accessible).unwrap();

    assert_eq!(theater.name(), "Roxy");
    assert_eq!(theater.number_of_rows(), 5);
    assert_eq!(theater.accessible_rows(), &accessible);
    for row in theater.rows() {
        assert_eq!(row.len(), 6);
        assert_eq!(row.is_accessible(), accessible.contains(&row.number()));
    }
    assert_eq!(theater.available_count(), 30);
}

#[test]
fn given_many_reservations_then_seat_count_never_changes() {
    let mut theater = Theater::generate("Roxy", 2, 5, &BTreeSet::new()).unwrap();
    let row = theater.row_mut(2).unwrap();

    for (n, name) in [(2, "A"), (4, "B"), (3, "C"), (1, "D")] {
        let _ = row.reserve_block(n, name).unwrap();
        assert_eq!(row.len(), 5);
    }
    // A:2 and C:3 fit, B:4 did not, D:1 found nothing left
    assert_eq!(row.available_count(), 0);
    assert_eq!(row.seats_reserved_for("B"), Vec::<String>::new());
}

#[test]
fn given_row_lookup_outside_range_then_out_of_range() {
    let theater = Theater::generate("Roxy", 2, 2, &BTreeSet::new()).unwrap();
    assert!(matches!(
        theater.row(3),
        Err(DomainError::OutOfRange { row: 3, rows: 2 })
    ));
}

#[test]
fn given_mixed_chart_then_rendering_uses_stable_symbols() {
    let mut theater = Theater::generate("Roxy", 3, 4, &BTreeSet::from([3])).unwrap();
    theater.row_mut(2).unwrap().reserve_block(3, "Alice").unwrap();
    theater.row_mut(3).unwrap().reserve_block(1, "Bob").unwrap();

    let lines: Vec<String> = theater.rows().iter().map(Row::render).collect();

    assert_eq!(lines, vec!["_ 1 _ _ _ _", "_ 2 X X X _", "= 3 X = = ="]);
}
