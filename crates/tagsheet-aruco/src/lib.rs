//! ArUco/AprilTag marker dictionaries and bitmap rasterization.
//!
//! This crate provides:
//! - embedded built-in dictionaries (compiled into the binary),
//! - a typed [`DictionaryKind`] selector over those dictionaries,
//! - rasterization of a marker id into a square monochrome canvas.
//!
//! It does **not** detect or decode markers; it is the drawing side of the
//! printable-sheet pipeline.

pub mod builtins;
mod bitmap;
mod dictionary;
mod kind;

pub use bitmap::{draw_marker, MarkerRenderError};
pub use dictionary::Dictionary;
pub use kind::{DictionaryKind, UnsupportedDictionary};
