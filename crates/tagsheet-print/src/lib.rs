//! Printable marker sheet generation.
//!
//! Ties the layout engine (`tagsheet-core`) to concrete collaborators:
//! dictionary-backed marker rasters (`tagsheet-aruco`), an embedded bitmap
//! font for id labels, and grayscale PNG output. [`SheetSpec`] is the
//! JSON-serializable configuration surface.

mod font;
mod png_io;
mod renderers;
mod sheet;

pub use font::draw_text;
pub use png_io::{save_png, PngWriteError};
pub use renderers::{ArucoMarkerRenderer, BitmapLabelRenderer};
pub use sheet::{SheetError, SheetIoError, SheetSpec};
