#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod io;
pub mod iter;
pub mod labeling;
pub mod store;
pub mod types;
pub mod view;

// --- High-level re-exports -------------------------------------------------

// Main entry points: backends, views, and the labeling engine.
pub use crate::labeling::label_components;
pub use crate::store::{DenseStore, PixelStore, RleStore};
pub use crate::types::{
    Label, RasterError, Rect, BACKGROUND, MIN_COMPONENT_LABEL, UNLABELED_FOREGROUND,
};
pub use crate::view::{ConnectedComponent, RasterView, View};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use pixel_matrix::prelude::*;
/// use std::{cell::RefCell, rc::Rc};
///
/// let store = Rc::new(RefCell::new(RleStore::new(8, 8)));
/// let view = View::full(&store);
/// view.set(2, 2, UNLABELED_FOREGROUND);
/// view.set(2, 3, UNLABELED_FOREGROUND);
///
/// let components = label_components(&view).unwrap();
/// assert_eq!(components.len(), 1);
/// ```
pub mod prelude {
    pub use crate::labeling::label_components;
    pub use crate::store::{DenseStore, PixelStore, RleStore};
    pub use crate::types::{Label, RasterError, Rect, BACKGROUND, UNLABELED_FOREGROUND};
    pub use crate::view::{ConnectedComponent, RasterView, View};
}
