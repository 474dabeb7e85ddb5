//! Marker rasterization.

use crate::dictionary::Dictionary;
use tagsheet_core::GrayCanvas;

/// Border width in modules around the inner bit grid (OpenCV uses 1).
const BORDER_MODULES: usize = 1;

/// Marker rasterization errors.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkerRenderError {
    #[error("marker id {id} exceeds the capacity of {dictionary} ({capacity} codes)")]
    UnknownId {
        dictionary: &'static str,
        id: u32,
        capacity: u32,
    },
    #[error("{size_px} px is too small for a {dictionary} marker (needs at least {min} px)")]
    SizeTooSmall {
        dictionary: &'static str,
        size_px: u32,
        min: u32,
    },
}

/// Rasterize marker `id` of `dict` into a `size_px × size_px` canvas.
///
/// Geometry matches OpenCV's `drawMarker`: one black border module around the
/// inner bit grid, nearest-neighbor scaled to the requested pixel size.
pub fn draw_marker(
    dict: &Dictionary,
    id: u32,
    size_px: u32,
) -> Result<GrayCanvas, MarkerRenderError> {
    let code = dict.code(id).ok_or(MarkerRenderError::UnknownId {
        dictionary: dict.name,
        id,
        capacity: dict.capacity(),
    })?;

    let modules = dict.marker_size + 2 * BORDER_MODULES;
    if (size_px as usize) < modules {
        return Err(MarkerRenderError::SizeTooSmall {
            dictionary: dict.name,
            size_px,
            min: modules as u32,
        });
    }

    let mut tile = GrayCanvas::filled(size_px, size_px, 0);
    for py in 0..size_px {
        let my = py as usize * modules / size_px as usize;
        for px in 0..size_px {
            let mx = px as usize * modules / size_px as usize;
            let white = in_inner_grid(mx, modules)
                && in_inner_grid(my, modules)
                && dict.bit(code, my - BORDER_MODULES, mx - BORDER_MODULES);
            if white {
                tile.put(i64::from(px), i64::from(py), 255);
            }
        }
    }
    Ok(tile)
}

#[inline]
fn in_inner_grid(m: usize, modules: usize) -> bool {
    m >= BORDER_MODULES && m < modules - BORDER_MODULES
}
