//! Layout engine for printable fiducial marker sheets.
//!
//! This crate is intentionally small and purely geometric. Given a physical
//! page, a print resolution, and a grid request, it computes pixel geometry,
//! checks that the grid fits, assigns sequential marker ids in raster order,
//! and decides per cell — via a textile tiling motif — whether that cell's
//! marker is drawn or left blank. Marker bitmaps, label text, and file output
//! are external collaborators reached through the traits in [`compose`].

mod canvas;
mod compose;
mod layout;
mod logger;
mod page;
mod pattern;

pub use canvas::GrayCanvas;
pub use compose::{compose_page, LabelRenderer, MarkerRenderer, RenderFailure};
pub use layout::{Axis, Cell, Cells, LayoutConfig, LayoutError, SheetLayout};
pub use logger::init_with_level;
pub use page::{PageFormat, PageGeometry, Resolution, UnsupportedResolution};
pub use pattern::{PatternKind, UnsupportedPattern};
