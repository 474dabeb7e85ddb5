//! JSON-serializable sheet specification and end-to-end generation.

use crate::renderers::{ArucoMarkerRenderer, BitmapLabelRenderer};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tagsheet_aruco::DictionaryKind;
use tagsheet_core::{
    compose_page, GrayCanvas, LayoutConfig, LayoutError, PageFormat, PageGeometry, RenderFailure,
    Resolution, SheetLayout,
};

#[derive(thiserror::Error, Debug)]
pub enum SheetIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Sheet generation errors.
#[derive(thiserror::Error, Debug)]
pub enum SheetError {
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Render(#[from] RenderFailure),
}

/// Complete description of one printable marker sheet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SheetSpec {
    #[serde(default)]
    pub dictionary: DictionaryKind,
    #[serde(default)]
    pub resolution: Resolution,
    #[serde(default)]
    pub page: PageFormat,
    #[serde(flatten)]
    pub layout: LayoutConfig,
}

impl Default for SheetSpec {
    fn default() -> Self {
        Self {
            dictionary: DictionaryKind::default(),
            resolution: Resolution::default(),
            page: PageFormat::default(),
            layout: LayoutConfig::default(),
        }
    }
}

impl SheetSpec {
    /// Load a JSON spec from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, SheetIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this spec to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), SheetIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Validate the layout without rendering anything.
    pub fn plan(&self) -> Result<SheetLayout, LayoutError> {
        let geometry = PageGeometry::new(self.page, self.resolution);
        SheetLayout::plan(self.layout, geometry)
    }

    /// Generate the full page canvas.
    pub fn generate(&self) -> Result<GrayCanvas, SheetError> {
        let layout = self.plan()?;
        log::info!(
            "creating {} tags from the {} dictionary, starting with id {}",
            layout.cell_count(),
            self.dictionary,
            self.layout.first_id
        );
        let markers = ArucoMarkerRenderer::new(self.dictionary);
        let page = compose_page(&layout, &markers, &BitmapLabelRenderer)?;
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagsheet_core::{Axis, PatternKind};

    fn small_spec() -> SheetSpec {
        SheetSpec {
            dictionary: DictionaryKind::Dict4x4_50,
            resolution: Resolution::Dpi72,
            layout: LayoutConfig {
                grid_x: 2,
                grid_y: 2,
                tag_size_mm: 50.0,
                margin_mm: 5.0,
                write_label: false,
                ..LayoutConfig::default()
            },
            ..SheetSpec::default()
        }
    }

    #[test]
    fn full_two_by_two_sheet_renders_four_markers() {
        let spec = small_spec();
        let page = spec.generate().expect("generate");
        let layout = spec.plan().expect("plan");
        assert_eq!(page.width(), 595);
        assert_eq!(page.height(), 842);
        for cell in layout.cells() {
            // Marker border is black along the rectangle's top edge.
            assert_eq!(page.get(cell.x + 1, cell.y + 1), Some(0));
        }
    }

    #[test]
    fn labels_put_ink_above_the_first_cell() {
        let mut spec = small_spec();
        spec.layout.write_label = true;
        spec.layout.label_height_mm = 8.0;
        let page = spec.generate().expect("generate");
        let layout = spec.plan().expect("plan");
        let cell = layout.cell(0, 0);
        let band_top = cell.y.saturating_sub(layout.margin_px() + layout.label_px());
        let mut ink = 0;
        for y in band_top..cell.y.saturating_sub(layout.margin_px()) {
            for x in cell.x..cell.x + 160 {
                if page.get(x, y) == Some(0) {
                    ink += 1;
                }
            }
        }
        assert!(ink > 0, "expected caption pixels above cell (0, 0)");
    }

    #[test]
    fn dictionary_capacity_overflow_fails_mid_walk() {
        let mut spec = small_spec();
        // Ids 49..=52 against a 50-code dictionary: the second cell must fail.
        spec.layout.first_id = 49;
        let err = spec.generate().unwrap_err();
        match err {
            SheetError::Render(failure) => assert_eq!(failure.id, 50),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn oversized_grid_fails_before_any_rendering() {
        let mut spec = small_spec();
        spec.layout.grid_x = 5;
        let err = spec.generate().unwrap_err();
        assert!(matches!(
            err,
            SheetError::Layout(LayoutError::Overflow { axis: Axis::X, count: 5, .. })
        ));
    }

    #[test]
    fn spec_round_trips_through_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("sheet.json");
        let mut spec = small_spec();
        spec.layout.pattern = PatternKind::PiedDePoule8x8;
        spec.write_json(&path).expect("write");
        let back = SheetSpec::load_json(&path).expect("load");
        assert_eq!(back.dictionary, spec.dictionary);
        assert_eq!(back.resolution, spec.resolution);
        assert_eq!(back.layout.pattern, PatternKind::PiedDePoule8x8);
        assert_eq!(back.layout.grid_x, 2);
        assert!(!back.layout.write_label);
    }

    #[test]
    fn minimal_json_fills_defaults() {
        let spec: SheetSpec = serde_json::from_str(r#"{"grid_x": 2, "grid_y": 3}"#).expect("parse");
        assert_eq!(spec.dictionary, DictionaryKind::Apriltag36h11);
        assert_eq!(spec.resolution, Resolution::Dpi96);
        assert_eq!(spec.layout.tag_size_mm, 50.0);
        assert!(spec.layout.write_label);
    }
}
