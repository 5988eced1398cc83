//! Storage backends for label rasters.
//!
//! Two concrete backends implement the same logical contract:
//!
//! - [`DenseStore`] keeps a flat row-major buffer, one `Label` per pixel.
//! - [`RleStore`] keeps sorted per-chunk run lists and materializes only
//!   non-zero spans, which compresses sparse binary/label rasters by orders
//!   of magnitude.
//!
//! Views and algorithms are generic over [`PixelStore`], so backend
//! selection is resolved at compile time with no per-pixel virtual
//! dispatch.
//!
//! Neither backend range-checks positions beyond ordinary slice indexing;
//! rectangle validation is the view layer's job.

mod dense;
mod rle;

pub use dense::DenseStore;
pub use rle::{RleStore, CHUNK_SIZE};

use crate::types::Label;

/// Linear-addressed pixel storage with page geometry.
///
/// Positions are linear indices into the stored page, row-major with
/// `stride()` columns per row. The page may sit at a non-zero offset on a
/// larger logical page; views fold that offset into their address
/// translation.
pub trait PixelStore {
    /// Value at `index`, or [`crate::BACKGROUND`] where nothing is stored.
    fn get(&self, index: usize) -> Label;

    /// Store `value` at `index`.
    fn set(&mut self, index: usize, value: Label);

    /// Logical linear size of the stored page.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Grow or shrink the store to `new_len` positions. The overlapping
    /// prefix is preserved; positions gained by growth read as background.
    fn resize(&mut self, new_len: usize);

    /// Rows held by the stored page.
    fn nrows(&self) -> usize;

    /// Columns held by the stored page.
    fn ncols(&self) -> usize;

    /// Positions between the starts of consecutive rows.
    fn stride(&self) -> usize;

    /// Row of the stored page's upper-left corner on the logical page.
    fn page_offset_y(&self) -> usize;

    /// Column of the stored page's upper-left corner on the logical page.
    fn page_offset_x(&self) -> usize;
}
