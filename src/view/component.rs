//! Label-filtered views produced by connected-component analysis.

use std::fmt;

use super::{RasterView, View};
use crate::store::PixelStore;
use crate::types::{Label, Rect, BACKGROUND};

/// A view scoped to a single component label.
///
/// Reads report the stored value only where it equals the component's
/// label and background everywhere else; writes take effect only on
/// pixels that currently hold the label. A component view can therefore
/// be intersected freely with other data without leaking or clobbering
/// neighboring components' pixels. The filtering is intentional behavior,
/// not an error path.
pub struct ConnectedComponent<S: PixelStore> {
    view: View<S>,
    label: Label,
}

impl<S: PixelStore> ConnectedComponent<S> {
    pub fn new(view: View<S>, label: Label) -> Self {
        Self { view, label }
    }

    #[inline]
    pub fn label(&self) -> Label {
        self.label
    }

    /// Bounding rectangle in absolute page coordinates.
    pub fn rect(&self) -> Rect {
        self.view.rect()
    }

    /// The unfiltered view underneath.
    pub fn view(&self) -> &View<S> {
        &self.view
    }

    /// Number of pixels inside the rectangle that hold the component's
    /// label. Counted on demand; nothing is cached.
    pub fn pixel_count(&self) -> usize {
        self.pixels().filter(|&v| v != BACKGROUND).count()
    }
}

impl<S: PixelStore> RasterView for ConnectedComponent<S> {
    #[inline]
    fn nrows(&self) -> usize {
        self.view.nrows()
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.view.ncols()
    }

    #[inline]
    fn offset_y(&self) -> usize {
        self.view.offset_y()
    }

    #[inline]
    fn offset_x(&self) -> usize {
        self.view.offset_x()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> Label {
        let value = self.view.get(row, col);
        if value == self.label {
            value
        } else {
            BACKGROUND
        }
    }

    #[inline]
    fn set(&self, row: usize, col: usize, value: Label) {
        if self.view.get(row, col) == self.label {
            self.view.set(row, col, value);
        }
    }
}

impl<S: PixelStore> Clone for ConnectedComponent<S> {
    fn clone(&self) -> Self {
        Self {
            view: self.view.clone(),
            label: self.label,
        }
    }
}

impl<S: PixelStore> fmt::Debug for ConnectedComponent<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectedComponent")
            .field("label", &self.label)
            .field("rect", &self.rect())
            .finish()
    }
}
