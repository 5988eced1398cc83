mod common;

use common::synthetic_raster::{dense_view, rle_view};
use pixel_matrix::store::{DenseStore, PixelStore, RleStore};
use pixel_matrix::view::{RasterView, View};
use pixel_matrix::{RasterError, BACKGROUND};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn view_construction_rejects_rectangles_outside_the_page() {
    let store = Rc::new(RefCell::new(DenseStore::new(4, 6)));

    assert!(View::new(&store, 0, 0, 4, 6).is_ok());
    assert!(View::new(&store, 1, 2, 3, 4).is_ok());

    let err = View::new(&store, 0, 0, 5, 6).unwrap_err();
    match err {
        RasterError::RectOutOfPage {
            nrows, page_nrows, ..
        } => {
            assert_eq!(nrows, 5);
            assert_eq!(page_nrows, 4);
        }
        other => panic!("expected RectOutOfPage, got {other:?}"),
    }
    assert!(
        err.to_string().contains("5x6") && err.to_string().contains("4x6"),
        "error must cite requested and available geometry: {err}"
    );

    assert!(View::new(&store, 2, 0, 3, 1).is_err());
    assert!(View::new(&store, 0, 5, 1, 2).is_err());
}

#[test]
fn view_addressing_matches_the_store() {
    let store = Rc::new(RefCell::new(DenseStore::new(4, 6)));
    let view = View::new(&store, 1, 2, 2, 3).expect("rectangle fits");

    view.set(0, 0, 7);
    view.set(1, 2, 9);

    let s = store.borrow();
    assert_eq!(s.get(6 + 2), 7, "view (0,0) must map to page (1,2)");
    assert_eq!(s.get(2 * 6 + 4), 9, "view (1,2) must map to page (2,4)");
}

#[test]
fn view_respects_store_page_offset() {
    // A 3x4 store holding the page region whose upper-left is (2, 5).
    let store = Rc::new(RefCell::new(RleStore::with_page_offset(3, 4, 2, 5)));

    assert!(
        View::new(&store, 0, 0, 1, 1).is_err(),
        "coordinates before the page offset are outside the store"
    );
    let view = View::new(&store, 2, 5, 3, 4).expect("full page rectangle fits");
    view.set(0, 0, 3);
    assert_eq!(store.borrow().get(0), 3, "page (2,5) is the store's origin");

    let sub = View::new(&store, 3, 6, 2, 2).expect("interior rectangle fits");
    sub.set(0, 0, 8);
    assert_eq!(view.get(1, 1), 8, "sub-view and parent alias one store");
}

#[test]
fn in_place_rect_mutation_revalidates_and_readdresses() {
    let store = Rc::new(RefCell::new(DenseStore::new(6, 6)));
    let mut view = View::new(&store, 0, 0, 2, 2).expect("rectangle fits");
    view.set(0, 0, 4);

    assert!(view.resize(7, 2).is_err(), "growth past the page must fail");
    assert_eq!(view.nrows(), 2, "failed resize must leave the view intact");

    view.resize(3, 3).expect("in-page resize succeeds");
    view.move_to(2, 2).expect("in-page move succeeds");
    view.set(0, 0, 5);
    assert_eq!(store.borrow().get(2 * 6 + 2), 5, "moved view must readdress");
    assert_eq!(view.get(0, 0), 5);

    assert!(view.move_to(4, 4).is_err(), "move past the page must fail");
    assert_eq!(view.offset_y(), 2, "failed move must leave the view intact");
}

#[test]
fn round_trip_matches_across_backends_through_views() {
    let rle = rle_view(4, 50, &[]);
    let dense = dense_view(4, 50, &[]);
    let writes: &[(usize, usize, u16)] = &[
        (0, 0, 5),
        (0, 1, 5),
        (3, 49, 2),
        (1, 30, 8),
        (1, 30, BACKGROUND),
        (2, 10, 1),
    ];
    for &(row, col, value) in writes {
        rle.set(row, col, value);
        dense.set(row, col, value);
    }
    for row in 0..4 {
        for col in 0..50 {
            assert_eq!(
                rle.get(row, col),
                dense.get(row, col),
                "backends disagree at ({row}, {col})"
            );
        }
    }
}

#[test]
fn linear_iteration_is_row_major_and_distance_aware() {
    let view = dense_view(3, 4, &[]);
    for row in 0..3 {
        for col in 0..4 {
            view.set(row, col, (row * 4 + col + 1) as u16);
        }
    }

    let collected: Vec<u16> = view.pixels().collect();
    let expected: Vec<u16> = (1..=12).collect();
    assert_eq!(collected, expected, "linear traversal must be row-major");

    let mut a = view.pixels();
    let mut b = view.pixels();
    a.next();
    a.next();
    // Offset-by-N across a row boundary.
    b.nth(5);
    assert_eq!(
        b.index() - a.index(),
        4,
        "distance must count pixels across row boundaries"
    );
    assert_eq!(a.position(), (0, 2));
    assert_eq!(b.position(), (1, 2));

    let backwards: Vec<u16> = view.pixels().rev().collect();
    let expected_rev: Vec<u16> = (1..=12).rev().collect();
    assert_eq!(backwards, expected_rev);
    assert_eq!(view.pixels().len(), 12);
}

#[test]
fn row_and_column_handles_traverse_their_bounds() {
    let view = dense_view(3, 4, &[]);
    for row in 0..3 {
        for col in 0..4 {
            view.set(row, col, (10 * row + col) as u16);
        }
    }

    let rows: Vec<Vec<u16>> = view.rows().map(|row| row.iter().collect()).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1], vec![10, 11, 12, 13]);

    let cols: Vec<Vec<u16>> = view.cols().map(|col| col.iter().collect()).collect();
    assert_eq!(cols.len(), 4);
    assert_eq!(cols[2], vec![2, 12, 22]);

    for row in view.rows() {
        assert_eq!(row.len(), 4);
    }
    let second_row = view.rows().nth(1).expect("three rows");
    second_row.set(0, 99);
    assert_eq!(view.get(1, 0), 99, "row handle writes go to the store");
}

#[test]
fn iterators_read_lazily_through_the_store() {
    let view = rle_view(2, 4, &[]);
    let mut pixels = view.pixels();
    assert_eq!(pixels.next(), Some(BACKGROUND));
    // Mutate mid-iteration; the cursor must observe the new value.
    view.set(0, 1, 6);
    assert_eq!(pixels.next(), Some(6), "dereference must be lazy");
}
