use pixel_matrix::store::{DenseStore, RleStore};
use pixel_matrix::view::{RasterView, View};
use pixel_matrix::UNLABELED_FOREGROUND;
use std::cell::RefCell;
use std::rc::Rc;

/// Full view over a fresh RLE page with the given pixels set to
/// unlabeled foreground.
pub fn rle_view(nrows: usize, ncols: usize, foreground: &[(usize, usize)]) -> View<RleStore> {
    let store = Rc::new(RefCell::new(RleStore::new(nrows, ncols)));
    let view = View::full(&store);
    paint(&view, foreground);
    view
}

/// Full view over a fresh dense page with the given pixels set to
/// unlabeled foreground.
pub fn dense_view(nrows: usize, ncols: usize, foreground: &[(usize, usize)]) -> View<DenseStore> {
    let store = Rc::new(RefCell::new(DenseStore::new(nrows, ncols)));
    let view = View::full(&store);
    paint(&view, foreground);
    view
}

/// Mark a filled rectangle of unlabeled foreground.
pub fn paint_block<V: RasterView>(view: &V, y0: usize, x0: usize, nrows: usize, ncols: usize) {
    for row in y0..y0 + nrows {
        for col in x0..x0 + ncols {
            view.set(row, col, UNLABELED_FOREGROUND);
        }
    }
}

fn paint<V: RasterView>(view: &V, foreground: &[(usize, usize)]) {
    for &(row, col) in foreground {
        view.set(row, col, UNLABELED_FOREGROUND);
    }
}
