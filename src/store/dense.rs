//! Flat row-major label buffer. The thinnest backend; exists so the view
//! and iterator layer has a second concrete store to be generic over.

use super::PixelStore;
use crate::types::{Label, BACKGROUND};

#[derive(Clone, Debug)]
pub struct DenseStore {
    nrows: usize,
    ncols: usize,
    stride: usize,
    page_offset_y: usize,
    page_offset_x: usize,
    data: Vec<Label>,
}

impl DenseStore {
    /// Zero-initialized page of `nrows x ncols` at page offset (0, 0).
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self::with_page_offset(nrows, ncols, 0, 0)
    }

    /// Zero-initialized page whose upper-left corner sits at
    /// (`page_offset_y`, `page_offset_x`) on the logical page.
    pub fn with_page_offset(
        nrows: usize,
        ncols: usize,
        page_offset_y: usize,
        page_offset_x: usize,
    ) -> Self {
        Self {
            nrows,
            ncols,
            stride: ncols,
            page_offset_y,
            page_offset_x,
            data: vec![BACKGROUND; nrows * ncols],
        }
    }
}

impl PixelStore for DenseStore {
    #[inline]
    fn get(&self, index: usize) -> Label {
        self.data[index]
    }

    #[inline]
    fn set(&mut self, index: usize, value: Label) {
        self.data[index] = value;
    }

    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    fn resize(&mut self, new_len: usize) {
        self.data.resize(new_len, BACKGROUND);
        // Stride is fixed; callers resize in whole rows.
        self.nrows = if self.stride == 0 {
            0
        } else {
            new_len / self.stride
        };
    }

    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }

    #[inline]
    fn page_offset_y(&self) -> usize {
        self.page_offset_y
    }

    #[inline]
    fn page_offset_x(&self) -> usize {
        self.page_offset_x
    }
}
