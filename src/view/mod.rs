//! Rectangular, offset-aware windows over a pixel store.
//!
//! A [`View`] translates view-relative (row, col) coordinates into the
//! store's linear addressing, folding in the view's own offset, the
//! store's page offset, and the stride. Construction validates that the
//! rectangle lies inside the store's page; every rectangle mutator
//! revalidates and recomputes the cached addressing, because stale cached
//! bounds turn into silent out-of-range reads.
//!
//! Views never own pixel data. The store sits behind an `Rc<RefCell<_>>`
//! handle so that many views, including the component views produced by
//! the labeling engine, can alias one store while the labeler writes
//! through it. The crate is single-threaded; the handle is not `Send`.

mod component;
mod traits;

pub use component::ConnectedComponent;
pub use traits::RasterView;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::store::PixelStore;
use crate::types::{Label, RasterError, Rect};

pub struct View<S: PixelStore> {
    store: Rc<RefCell<S>>,
    offset_y: usize,
    offset_x: usize,
    nrows: usize,
    ncols: usize,
    /// Cached linear index of the rectangle's upper-left pixel.
    begin: usize,
    /// Cached copy of the store's stride.
    stride: usize,
}

impl<S: PixelStore> View<S> {
    /// View of `nrows x ncols` whose upper-left corner sits at
    /// (`offset_y`, `offset_x`) on the logical page. Fails with
    /// [`RasterError::RectOutOfPage`] when the rectangle is not fully
    /// contained in the store's page.
    pub fn new(
        store: &Rc<RefCell<S>>,
        offset_y: usize,
        offset_x: usize,
        nrows: usize,
        ncols: usize,
    ) -> Result<Self, RasterError> {
        let mut view = Self {
            store: Rc::clone(store),
            offset_y,
            offset_x,
            nrows,
            ncols,
            begin: 0,
            stride: 0,
        };
        view.revalidate()?;
        Ok(view)
    }

    /// View covering the store's whole page.
    pub fn full(store: &Rc<RefCell<S>>) -> Self {
        let (offset_y, offset_x, nrows, ncols, stride) = {
            let s = store.borrow();
            (
                s.page_offset_y(),
                s.page_offset_x(),
                s.nrows(),
                s.ncols(),
                s.stride(),
            )
        };
        Self {
            store: Rc::clone(store),
            offset_y,
            offset_x,
            nrows,
            ncols,
            begin: 0,
            stride,
        }
    }

    /// Smaller or shifted view over the same store, in absolute page
    /// coordinates. No pixel data is copied.
    pub fn sub_view(
        &self,
        offset_y: usize,
        offset_x: usize,
        nrows: usize,
        ncols: usize,
    ) -> Result<Self, RasterError> {
        View::new(&self.store, offset_y, offset_x, nrows, ncols)
    }

    /// Change the rectangle's size in place.
    pub fn resize(&mut self, nrows: usize, ncols: usize) -> Result<(), RasterError> {
        let (old_nrows, old_ncols) = (self.nrows, self.ncols);
        self.nrows = nrows;
        self.ncols = ncols;
        self.revalidate().inspect_err(|_| {
            self.nrows = old_nrows;
            self.ncols = old_ncols;
        })
    }

    /// Move the rectangle's upper-left corner in place.
    pub fn move_to(&mut self, offset_y: usize, offset_x: usize) -> Result<(), RasterError> {
        let (old_y, old_x) = (self.offset_y, self.offset_x);
        self.offset_y = offset_y;
        self.offset_x = offset_x;
        self.revalidate().inspect_err(|_| {
            self.offset_y = old_y;
            self.offset_x = old_x;
        })
    }

    /// Shared handle to the backing store.
    pub fn store_handle(&self) -> Rc<RefCell<S>> {
        Rc::clone(&self.store)
    }

    /// The view's rectangle in absolute page coordinates. Empty views
    /// have no meaningful rectangle; callers check dimensions first.
    pub fn rect(&self) -> Rect {
        Rect {
            ul_y: self.offset_y,
            ul_x: self.offset_x,
            lr_y: self.offset_y + self.nrows.saturating_sub(1),
            lr_x: self.offset_x + self.ncols.saturating_sub(1),
        }
    }

    /// Containment check against the store's page, plus recomputation of
    /// the cached begin address. Every rectangle mutator ends here.
    fn revalidate(&mut self) -> Result<(), RasterError> {
        let store = self.store.borrow();
        let page_y = store.page_offset_y();
        let page_x = store.page_offset_x();
        let page_nrows = store.nrows();
        let page_ncols = store.ncols();
        let fits = self.offset_y >= page_y
            && self.offset_x >= page_x
            && self.offset_y + self.nrows <= page_y + page_nrows
            && self.offset_x + self.ncols <= page_x + page_ncols;
        if !fits {
            return Err(RasterError::RectOutOfPage {
                offset_y: self.offset_y,
                offset_x: self.offset_x,
                nrows: self.nrows,
                ncols: self.ncols,
                page_offset_y: page_y,
                page_offset_x: page_x,
                page_nrows,
                page_ncols,
            });
        }
        self.stride = store.stride();
        self.begin = (self.offset_y - page_y) * self.stride + (self.offset_x - page_x);
        Ok(())
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(
            row < self.nrows && col < self.ncols,
            "pixel ({row}, {col}) outside view {}x{}",
            self.nrows,
            self.ncols
        );
        self.begin + row * self.stride + col
    }
}

impl<S: PixelStore> RasterView for View<S> {
    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn offset_y(&self) -> usize {
        self.offset_y
    }

    #[inline]
    fn offset_x(&self) -> usize {
        self.offset_x
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> Label {
        self.store.borrow().get(self.index(row, col))
    }

    #[inline]
    fn set(&self, row: usize, col: usize, value: Label) {
        self.store.borrow_mut().set(self.index(row, col), value);
    }
}

impl<S: PixelStore> Clone for View<S> {
    fn clone(&self) -> Self {
        Self {
            store: Rc::clone(&self.store),
            offset_y: self.offset_y,
            offset_x: self.offset_x,
            nrows: self.nrows,
            ncols: self.ncols,
            begin: self.begin,
            stride: self.stride,
        }
    }
}

impl<S: PixelStore> fmt::Debug for View<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("offset_y", &self.offset_y)
            .field("offset_x", &self.offset_x)
            .field("nrows", &self.nrows)
            .field("ncols", &self.ncols)
            .finish()
    }
}
