//! Traversal over any [`RasterView`]: row-major linear, per-row, and
//! per-column.
//!
//! Iterators yield `Label` values and dereference lazily through the view
//! on every step, so they observe concurrent mutation through the same
//! store handle and apply a component view's label filter automatically.
//! Mutation goes through the explicit `set` on the view or on the
//! [`Row`]/[`Col`] handles; there are no assignable pixel proxies.
//!
//! [`Pixels`] keeps its cursor as a logical row-major index and exposes
//! it via [`Pixels::index`], so the distance between two linear cursors
//! over the same view is their index difference even when the interval
//! spans row boundaries. `Iterator::nth` gives offset-by-N; the
//! `DoubleEndedIterator` impls cover backward traversal.

use crate::types::Label;
use crate::view::RasterView;

/// Row-major linear traversal over every pixel of a view.
pub struct Pixels<'a, V: RasterView> {
    view: &'a V,
    front: usize,
    back: usize,
}

impl<'a, V: RasterView> Pixels<'a, V> {
    pub fn new(view: &'a V) -> Self {
        Self {
            view,
            front: 0,
            back: view.nrows() * view.ncols(),
        }
    }

    /// Logical row-major index of the front cursor. The difference of two
    /// cursors' indices is the pixel distance between them.
    #[inline]
    pub fn index(&self) -> usize {
        self.front
    }

    /// View-relative (row, col) of the front cursor. Meaningful only
    /// while the iterator is not exhausted.
    #[inline]
    pub fn position(&self) -> (usize, usize) {
        let ncols = self.view.ncols();
        (self.front / ncols, self.front % ncols)
    }
}

impl<V: RasterView> Iterator for Pixels<'_, V> {
    type Item = Label;

    fn next(&mut self) -> Option<Label> {
        if self.front >= self.back {
            return None;
        }
        let ncols = self.view.ncols();
        let value = self.view.get(self.front / ncols, self.front % ncols);
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<V: RasterView> DoubleEndedIterator for Pixels<'_, V> {
    fn next_back(&mut self) -> Option<Label> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        let ncols = self.view.ncols();
        Some(self.view.get(self.back / ncols, self.back % ncols))
    }
}

impl<V: RasterView> ExactSizeIterator for Pixels<'_, V> {}

/// Handle to one row of a view.
pub struct Row<'a, V: RasterView> {
    view: &'a V,
    row: usize,
}

impl<'a, V: RasterView> Row<'a, V> {
    #[inline]
    pub fn index(&self) -> usize {
        self.row
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.view.ncols()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn get(&self, col: usize) -> Label {
        self.view.get(self.row, col)
    }

    #[inline]
    pub fn set(&self, col: usize, value: Label) {
        self.view.set(self.row, col, value);
    }

    /// Traversal over this row's pixels, bounded to the row.
    pub fn iter(&self) -> RowPixels<'a, V> {
        RowPixels {
            view: self.view,
            row: self.row,
            front: 0,
            back: self.view.ncols(),
        }
    }
}

/// Traversal yielding a [`Row`] handle per raster row.
pub struct Rows<'a, V: RasterView> {
    view: &'a V,
    row: usize,
}

impl<'a, V: RasterView> Rows<'a, V> {
    pub fn new(view: &'a V) -> Self {
        Self { view, row: 0 }
    }
}

impl<'a, V: RasterView> Iterator for Rows<'a, V> {
    type Item = Row<'a, V>;

    fn next(&mut self) -> Option<Row<'a, V>> {
        if self.row >= self.view.nrows() {
            return None;
        }
        let row = self.row;
        self.row += 1;
        Some(Row {
            view: self.view,
            row,
        })
    }
}

/// Pixel traversal bounded to one row.
pub struct RowPixels<'a, V: RasterView> {
    view: &'a V,
    row: usize,
    front: usize,
    back: usize,
}

impl<V: RasterView> Iterator for RowPixels<'_, V> {
    type Item = Label;

    fn next(&mut self) -> Option<Label> {
        if self.front >= self.back {
            return None;
        }
        let value = self.view.get(self.row, self.front);
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<V: RasterView> DoubleEndedIterator for RowPixels<'_, V> {
    fn next_back(&mut self) -> Option<Label> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.view.get(self.row, self.back))
    }
}

impl<V: RasterView> ExactSizeIterator for RowPixels<'_, V> {}

/// Handle to one column of a view.
pub struct Col<'a, V: RasterView> {
    view: &'a V,
    col: usize,
}

impl<'a, V: RasterView> Col<'a, V> {
    #[inline]
    pub fn index(&self) -> usize {
        self.col
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.view.nrows()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn get(&self, row: usize) -> Label {
        self.view.get(row, self.col)
    }

    #[inline]
    pub fn set(&self, row: usize, value: Label) {
        self.view.set(row, self.col, value);
    }

    /// Traversal over this column's pixels, bounded to the column.
    pub fn iter(&self) -> ColPixels<'a, V> {
        ColPixels {
            view: self.view,
            col: self.col,
            front: 0,
            back: self.view.nrows(),
        }
    }
}

/// Traversal yielding a [`Col`] handle per raster column.
pub struct Cols<'a, V: RasterView> {
    view: &'a V,
    col: usize,
}

impl<'a, V: RasterView> Cols<'a, V> {
    pub fn new(view: &'a V) -> Self {
        Self { view, col: 0 }
    }
}

impl<'a, V: RasterView> Iterator for Cols<'a, V> {
    type Item = Col<'a, V>;

    fn next(&mut self) -> Option<Col<'a, V>> {
        if self.col >= self.view.ncols() {
            return None;
        }
        let col = self.col;
        self.col += 1;
        Some(Col {
            view: self.view,
            col,
        })
    }
}

/// Pixel traversal bounded to one column.
pub struct ColPixels<'a, V: RasterView> {
    view: &'a V,
    col: usize,
    front: usize,
    back: usize,
}

impl<V: RasterView> Iterator for ColPixels<'_, V> {
    type Item = Label;

    fn next(&mut self) -> Option<Label> {
        if self.front >= self.back {
            return None;
        }
        let value = self.view.get(self.front, self.col);
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<V: RasterView> DoubleEndedIterator for ColPixels<'_, V> {
    fn next_back(&mut self) -> Option<Label> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.view.get(self.back, self.col))
    }
}

impl<V: RasterView> ExactSizeIterator for ColPixels<'_, V> {}
