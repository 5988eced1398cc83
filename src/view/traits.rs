//! Generic pixel access consumed by the iterator family and by algorithm
//! collaborators. Anything that exposes a rectangle plus `get`/`set` can
//! be traversed; the connected-component view implements the same surface
//! with label filtering layered in.

use crate::iter::{Cols, Pixels, Rows};
use crate::types::Label;

pub trait RasterView {
    /// Rows in the view's rectangle.
    fn nrows(&self) -> usize;

    /// Columns in the view's rectangle.
    fn ncols(&self) -> usize;

    /// Row of the rectangle's upper-left corner on the logical page.
    fn offset_y(&self) -> usize;

    /// Column of the rectangle's upper-left corner on the logical page.
    fn offset_x(&self) -> usize;

    /// Value at view-relative (row, col).
    fn get(&self, row: usize, col: usize) -> Label;

    /// Store `value` at view-relative (row, col). Takes `&self`: backends
    /// sit behind a shared handle so that component views can alias one
    /// store; see [`crate::view::View`].
    fn set(&self, row: usize, col: usize, value: Label);

    /// Row-major linear traversal over every pixel in the rectangle.
    fn pixels(&self) -> Pixels<'_, Self>
    where
        Self: Sized,
    {
        Pixels::new(self)
    }

    /// Traversal yielding one [`crate::iter::Row`] handle per row.
    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows::new(self)
    }

    /// Traversal yielding one [`crate::iter::Col`] handle per column.
    fn cols(&self) -> Cols<'_, Self>
    where
        Self: Sized,
    {
        Cols::new(self)
    }
}
