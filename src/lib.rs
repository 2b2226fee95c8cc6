//! face-console library crate.
//!
//! Client-side building blocks for a facial-recognition backend: an HTTP
//! client with a connectivity pre-check, UI helpers behind a document
//! capability seam, media-stream teardown, and aspect-ratio-preserving
//! bitmap resizing.

pub mod api;
pub mod canvas;
pub mod config;
pub mod media;
pub mod ui;
pub mod validate;
