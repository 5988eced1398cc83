//! Shared value types: the label model, rectangles, and the error taxonomy.

use serde::Serialize;

/// Pixel value stored in a raster. Wide enough to enumerate every distinct
/// component label in one page.
pub type Label = u16;

/// Background / unlabeled value. Never materialized as an RLE run.
pub const BACKGROUND: Label = 0;

/// Foreground that has not been assigned a component label yet.
pub const UNLABELED_FOREGROUND: Label = 1;

/// Smallest value the labeling engine hands out as a component label.
pub const MIN_COMPONENT_LABEL: Label = 2;

/// Axis-aligned rectangle with inclusive bounds, in absolute page
/// coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Rect {
    pub ul_y: usize,
    pub ul_x: usize,
    pub lr_y: usize,
    pub lr_x: usize,
}

impl Rect {
    /// Single-pixel rectangle at (y, x).
    pub fn from_point(y: usize, x: usize) -> Self {
        Self {
            ul_y: y,
            ul_x: x,
            lr_y: y,
            lr_x: x,
        }
    }

    /// Grow the rectangle to cover (y, x).
    pub fn include(&mut self, y: usize, x: usize) {
        self.ul_y = self.ul_y.min(y);
        self.ul_x = self.ul_x.min(x);
        self.lr_y = self.lr_y.max(y);
        self.lr_x = self.lr_x.max(x);
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.lr_y - self.ul_y + 1
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.lr_x - self.ul_x + 1
    }

    /// Upper-left corner as (y, x).
    #[inline]
    pub fn ul(&self) -> (usize, usize) {
        (self.ul_y, self.ul_x)
    }

    /// Lower-right corner as (y, x).
    #[inline]
    pub fn lr(&self) -> (usize, usize) {
        (self.lr_y, self.lr_x)
    }

    #[inline]
    pub fn contains(&self, y: usize, x: usize) -> bool {
        y >= self.ul_y && y <= self.lr_y && x >= self.ul_x && x <= self.lr_x
    }
}

/// Failures surfaced by view construction, shape-checked helpers, and the
/// labeling engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RasterError {
    /// A requested view rectangle does not fit inside the store's page.
    RectOutOfPage {
        offset_y: usize,
        offset_x: usize,
        nrows: usize,
        ncols: usize,
        page_offset_y: usize,
        page_offset_x: usize,
        page_nrows: usize,
        page_ncols: usize,
    },
    /// Two rasters were combined under an operation requiring equal shape.
    DimensionMismatch {
        expected_rows: usize,
        expected_cols: usize,
        found_rows: usize,
        found_cols: usize,
    },
    /// The label domain ran out during component analysis.
    LabelsExhausted { limit: Label },
}

impl std::fmt::Display for RasterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RasterError::RectOutOfPage {
                offset_y,
                offset_x,
                nrows,
                ncols,
                page_offset_y,
                page_offset_x,
                page_nrows,
                page_ncols,
            } => write!(
                f,
                "view rectangle {nrows}x{ncols} at offset ({offset_y}, {offset_x}) \
                 does not fit in store page {page_nrows}x{page_ncols} at offset \
                 ({page_offset_y}, {page_offset_x})"
            ),
            RasterError::DimensionMismatch {
                expected_rows,
                expected_cols,
                found_rows,
                found_cols,
            } => write!(
                f,
                "shape mismatch: expected {expected_rows}x{expected_cols}, \
                 found {found_rows}x{found_cols}"
            ),
            RasterError::LabelsExhausted { limit } => write!(
                f,
                "component label domain exhausted (limit {limit}); \
                 the raster holds more components than the label width supports"
            ),
        }
    }
}

impl std::error::Error for RasterError {}
