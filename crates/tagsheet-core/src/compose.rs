//! Page composition: the grid walk wired to external renderer seams.

use crate::canvas::GrayCanvas;
use crate::layout::SheetLayout;

/// External marker rasterizer failure (fail-fast, aborts the walk).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot render marker {id}: {reason}")]
pub struct RenderFailure {
    pub id: u32,
    pub reason: String,
}

/// External collaborator producing square monochrome marker rasters.
pub trait MarkerRenderer {
    /// Render marker `marker_id` as a `size_px × size_px` raster.
    fn render(&self, marker_id: u32, size_px: u32) -> Result<GrayCanvas, RenderFailure>;

    /// Human-readable caption for the id label, e.g. `"ArUco id: 7"`.
    fn caption(&self, marker_id: u32) -> String;
}

/// External collaborator drawing label text onto the page canvas.
pub trait LabelRenderer {
    /// Draw `text` with its bottom edge at `bottom_y`, left-aligned at `x`,
    /// scaled to roughly `height_px` tall. Out-of-canvas pixels are clipped.
    fn draw_text(&self, canvas: &mut GrayCanvas, text: &str, x: i64, bottom_y: i64, height_px: u32);
}

/// Walk the grid in row-major order and compose the full page canvas.
///
/// Every cell gets its id label (when labels are enabled); the marker raster
/// is composited only for cells the pattern leaves visible. Marker ids stay
/// contiguous across blanked cells. The canvas is owned here and handed back
/// complete; a renderer failure aborts immediately with no partial result.
pub fn compose_page<M, L>(
    layout: &SheetLayout,
    markers: &M,
    labels: &L,
) -> Result<GrayCanvas, RenderFailure>
where
    M: MarkerRenderer,
    L: LabelRenderer,
{
    let geom = layout.geometry();
    let mut page = GrayCanvas::filled(geom.width_px(), geom.height_px(), 255);

    for cell in layout.cells() {
        log::debug!(
            "cell ({}, {}): id {} at ({}, {}), visible = {}",
            cell.row,
            cell.col,
            cell.marker_id,
            cell.x,
            cell.y,
            cell.visible
        );
        if layout.config().write_label {
            let text = markers.caption(cell.marker_id);
            // Text bottom sits one margin above the marker rectangle.
            let bottom = i64::from(cell.y) - i64::from(layout.margin_px());
            labels.draw_text(&mut page, &text, i64::from(cell.x), bottom, layout.label_px());
        }
        if cell.visible {
            let tile = markers.render(cell.marker_id, cell.size_px)?;
            page.blit(&tile, cell.x, cell.y);
        }
    }
    Ok(page)
}
