//! I/O helpers at the collaborator boundary.
//!
//! - `load_grayscale_image`: read a PNG/JPEG/etc. into an owned 8-bit
//!   gray buffer.
//! - `threshold_into`: populate a view, backend-agnostic, from a gray
//!   buffer through the ordinary set-pixel contract.
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! The core parses no file formats itself; this module is the thin edge
//! the demo tooling and format loaders talk through.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::store::PixelStore;
use crate::types::{RasterError, UNLABELED_FOREGROUND};
use crate::view::{RasterView, View};

/// Owned 8-bit grayscale buffer, row-major.
#[derive(Clone, Debug)]
pub struct GrayRaster {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayRaster {
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }
}

/// Load an image from disk and convert to 8-bit grayscale.
pub fn load_grayscale_image(path: &Path) -> Result<GrayRaster, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.into_raw();
    Ok(GrayRaster::new(width, height, data))
}

/// Mark every gray pixel darker than `threshold` as unlabeled foreground
/// in `view`, writing through the set-pixel contract (dark is foreground,
/// the usual convention for scanned documents). Background pixels are not
/// written, which keeps an RLE backend free of spurious runs.
///
/// The view must match the buffer's shape exactly.
pub fn threshold_into<S: PixelStore>(
    gray: &GrayRaster,
    view: &View<S>,
    threshold: u8,
) -> Result<(), RasterError> {
    if view.nrows() != gray.height() || view.ncols() != gray.width() {
        return Err(RasterError::DimensionMismatch {
            expected_rows: gray.height(),
            expected_cols: gray.width(),
            found_rows: view.nrows(),
            found_cols: view.ncols(),
        });
    }
    for y in 0..gray.height() {
        for x in 0..gray.width() {
            if gray.get(x, y) < threshold {
                view.set(y, x, UNLABELED_FOREGROUND);
            }
        }
    }
    Ok(())
}

/// Serialize a value as pretty JSON to `path`, creating parent
/// directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
