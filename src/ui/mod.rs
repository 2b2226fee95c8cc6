//! UI helpers behind a document capability seam.
//!
//! Page state lives in whatever document implementation the embedder
//! provides; the functions here only mutate it through the [`Document`]
//! and [`Element`] traits, so tests run against plain in-memory doubles.

mod controls;
mod dom;
mod notice;

pub use controls::set_disabled;
pub use dom::{Document, Element, UiError};
pub use notice::{clear, display, MessageKind};
