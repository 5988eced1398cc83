//! Two-pass 8-connected connected-component labeling.
//!
//! The algorithm operates on any [`View`], dense or RLE backed, and
//! writes labels back through the view's set contract:
//!
//! - Pass 1 raster-scans in row-major order. Every nonzero pixel is
//!   foreground; values left over from an earlier labeling are treated
//!   the same as unlabeled foreground, which makes repeated labelings of
//!   one raster idempotent. The already-visited neighbors West,
//!   Northwest, North, and Northeast are consulted: with no labeled
//!   neighbor the pixel receives the next unused label (monotonically
//!   increasing from [`MIN_COMPONENT_LABEL`]); otherwise it receives the
//!   smallest neighbor label, and an equivalence is recorded against
//!   every other distinct neighbor label.
//! - Recorded equivalences are resolved to canonical representatives by
//!   an iterated relabel pass over a label-index array.
//! - Pass 2 rewrites provisional labels to canonical ones and grows one
//!   bounding rectangle per surviving label as it goes.
//!
//! The result is one [`ConnectedComponent`] per component, aliasing the
//! original store; no pixel data is copied. Exhausting the label domain
//! aborts the whole analysis with [`RasterError::LabelsExhausted`]; a
//! truncated component list would not be meaningful.

mod equivalence;

use log::debug;

use crate::store::PixelStore;
use crate::types::{Label, RasterError, Rect, BACKGROUND, MIN_COMPONENT_LABEL};
use crate::view::{ConnectedComponent, RasterView, View};
use equivalence::EquivalenceTable;

/// Label every 8-connected foreground component of `view` and return one
/// component view per discovered component, ordered by label.
pub fn label_components<S: PixelStore>(
    view: &View<S>,
) -> Result<Vec<ConnectedComponent<S>>, RasterError> {
    let nrows = view.nrows();
    let ncols = view.ncols();

    // Pass 1: provisional labels.
    let mut next_label = MIN_COMPONENT_LABEL;
    let mut equivalences = EquivalenceTable::new();
    for row in 0..nrows {
        for col in 0..ncols {
            if view.get(row, col) == BACKGROUND {
                continue;
            }
            let neighbors = prior_neighbor_labels(view, row, col);
            let smallest = neighbors
                .iter()
                .copied()
                .filter(|&label| label != BACKGROUND)
                .min();
            let assigned = match smallest {
                Some(smallest) => {
                    for &label in &neighbors {
                        if label != BACKGROUND && label != smallest {
                            equivalences.record(smallest, label);
                        }
                    }
                    smallest
                }
                None => {
                    if next_label == Label::MAX {
                        return Err(RasterError::LabelsExhausted { limit: Label::MAX });
                    }
                    let fresh = next_label;
                    next_label += 1;
                    fresh
                }
            };
            view.set(row, col, assigned);
        }
    }
    debug!(
        "labeling pass 1: {} provisional labels, {} equivalences",
        next_label - MIN_COMPONENT_LABEL,
        equivalences.len()
    );

    let canonical = equivalences.resolve(next_label as usize);

    // Pass 2: canonical relabel and bounding boxes, one scan.
    let mut boxes: Vec<Option<Rect>> = vec![None; next_label as usize];
    for row in 0..nrows {
        for col in 0..ncols {
            let value = view.get(row, col);
            if value == BACKGROUND {
                continue;
            }
            let label = canonical[value as usize];
            if label != value {
                view.set(row, col, label);
            }
            let y = view.offset_y() + row;
            let x = view.offset_x() + col;
            match &mut boxes[label as usize] {
                Some(rect) => rect.include(y, x),
                slot => *slot = Some(Rect::from_point(y, x)),
            }
        }
    }

    let mut components = Vec::new();
    for (label, rect) in boxes.iter().enumerate() {
        if let Some(rect) = rect {
            let sub = view.sub_view(rect.ul_y, rect.ul_x, rect.nrows(), rect.ncols())?;
            components.push(ConnectedComponent::new(sub, label as Label));
        }
    }
    debug!("labeling pass 2: {} components", components.len());
    Ok(components)
}

/// Labels of the already-visited raster neighbors of (row, col):
/// West, Northwest, North, Northeast. Background where a neighbor falls
/// outside the view.
fn prior_neighbor_labels<S: PixelStore>(view: &View<S>, row: usize, col: usize) -> [Label; 4] {
    let mut labels = [BACKGROUND; 4];
    if col > 0 {
        labels[0] = view.get(row, col - 1);
    }
    if row > 0 {
        if col > 0 {
            labels[1] = view.get(row - 1, col - 1);
        }
        labels[2] = view.get(row - 1, col);
        if col + 1 < view.ncols() {
            labels[3] = view.get(row - 1, col + 1);
        }
    }
    labels
}
