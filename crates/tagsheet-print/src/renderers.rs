//! Concrete marker and label renderer implementations.

use crate::font;
use tagsheet_aruco::{draw_marker, DictionaryKind};
use tagsheet_core::{GrayCanvas, LabelRenderer, MarkerRenderer, RenderFailure};

/// Marker renderer backed by an embedded dictionary.
#[derive(Clone, Copy, Debug)]
pub struct ArucoMarkerRenderer {
    kind: DictionaryKind,
}

impl ArucoMarkerRenderer {
    pub fn new(kind: DictionaryKind) -> Self {
        Self { kind }
    }

    #[inline]
    pub fn kind(&self) -> DictionaryKind {
        self.kind
    }
}

impl MarkerRenderer for ArucoMarkerRenderer {
    fn render(&self, marker_id: u32, size_px: u32) -> Result<GrayCanvas, RenderFailure> {
        draw_marker(self.kind.dictionary(), marker_id, size_px).map_err(|err| RenderFailure {
            id: marker_id,
            reason: err.to_string(),
        })
    }

    fn caption(&self, marker_id: u32) -> String {
        format!("{} id: {marker_id}", self.kind.caption_family())
    }
}

/// Label renderer using the embedded 5×7 bitmap font.
#[derive(Clone, Copy, Debug, Default)]
pub struct BitmapLabelRenderer;

impl LabelRenderer for BitmapLabelRenderer {
    fn draw_text(&self, canvas: &mut GrayCanvas, text: &str, x: i64, bottom_y: i64, height_px: u32) {
        // Integer scale fitting the glyph plus one row of breathing room
        // into the reserved label height.
        let scale = (height_px / (font::GLYPH_HEIGHT + 1)).max(1);
        font::draw_text(canvas, text, x, bottom_y, scale);
    }
}
