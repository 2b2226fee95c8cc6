//! Bitmap canvas handling.
//!
//! A small owned RGB bitmap type plus aspect-ratio-preserving resizing,
//! used to shrink captured frames before they are shipped to the backend.

mod bitmap;
mod resize;

pub use bitmap::{Canvas, CanvasError};
pub use resize::{fit_dimensions, resize_canvas, DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH};
