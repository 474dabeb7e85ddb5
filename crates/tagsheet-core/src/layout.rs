//! Grid feasibility checking and row-major cell layout.

use crate::page::PageGeometry;
use crate::pattern::PatternKind;
use serde::{Deserialize, Serialize};
use std::fmt;

fn default_tag_size_mm() -> f64 {
    50.0
}

fn default_margin_mm() -> f64 {
    5.0
}

fn default_label_height_mm() -> f64 {
    8.0
}

fn default_true() -> bool {
    true
}

/// Immutable sheet layout request.
///
/// `grid_x`/`grid_y` are tag counts per axis; physical measurements are in
/// millimeters. When `write_label` is false the label height is treated as 0.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub grid_x: u32,
    pub grid_y: u32,
    #[serde(default = "default_tag_size_mm")]
    pub tag_size_mm: f64,
    #[serde(default = "default_margin_mm")]
    pub margin_mm: f64,
    #[serde(default = "default_label_height_mm")]
    pub label_height_mm: f64,
    #[serde(default)]
    pub first_id: u32,
    #[serde(default)]
    pub pattern: PatternKind,
    #[serde(default = "default_true")]
    pub write_label: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            grid_x: 3,
            grid_y: 4,
            tag_size_mm: default_tag_size_mm(),
            margin_mm: default_margin_mm(),
            label_height_mm: default_label_height_mm(),
            first_id: 0,
            pattern: PatternKind::default(),
            write_label: true,
        }
    }
}

impl LayoutConfig {
    /// Label height that actually enters the geometry.
    #[inline]
    pub fn effective_label_mm(&self) -> f64 {
        if self.write_label {
            self.label_height_mm
        } else {
            0.0
        }
    }
}

/// Page axis, for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Layout validation errors.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("the grid must contain at least one tag, i.e. (x > 0) and (y > 0); currently x = {x}, y = {y}")]
    InvalidGrid { x: u32, y: u32 },
    #[error("the grid does not fit on the page; reduce the number of tags in the {axis}-direction (currently {axis} = {count}, overflow {overflow_mm:.1} mm)")]
    Overflow {
        axis: Axis,
        count: u32,
        overflow_mm: f64,
    },
}

/// One grid position produced by the layout walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
    pub marker_id: u32,
    /// Top-left corner of the marker rectangle, page pixels.
    pub x: u32,
    pub y: u32,
    /// Marker rectangle side, pixels.
    pub size_px: u32,
    /// Pattern decision for this cell.
    pub visible: bool,
}

/// Validated pixel layout of a marker sheet on one page.
#[derive(Clone, Copy, Debug)]
pub struct SheetLayout {
    config: LayoutConfig,
    geometry: PageGeometry,
    tag_px: u32,
    margin_px: u32,
    label_px: u32,
    origin_x_px: u32,
    origin_y_px: u32,
}

impl SheetLayout {
    /// Check that the requested grid fits the page and derive pixel geometry.
    ///
    /// The label height is reserved twice per row (above and below the tag)
    /// so row spacing stays consistent whether or not a label is drawn.
    pub fn plan(config: LayoutConfig, geometry: PageGeometry) -> Result<Self, LayoutError> {
        if config.grid_x < 1 || config.grid_y < 1 {
            return Err(LayoutError::InvalidGrid {
                x: config.grid_x,
                y: config.grid_y,
            });
        }

        let (page_w_mm, page_h_mm) = geometry.format().size_mm();
        let x = f64::from(config.grid_x);
        let y = f64::from(config.grid_y);
        let label_mm = config.effective_label_mm();

        let used_w = x * config.tag_size_mm + (x - 1.0) * config.margin_mm;
        let used_h =
            y * (config.tag_size_mm + 2.0 * label_mm) + (y - 1.0) * config.margin_mm;
        let rest_x = page_w_mm - used_w;
        let rest_y = page_h_mm - used_h;

        if rest_x < 0.0 {
            return Err(LayoutError::Overflow {
                axis: Axis::X,
                count: config.grid_x,
                overflow_mm: -rest_x,
            });
        }
        if rest_y < 0.0 {
            return Err(LayoutError::Overflow {
                axis: Axis::Y,
                count: config.grid_y,
                overflow_mm: -rest_y,
            });
        }

        Ok(Self {
            config,
            geometry,
            tag_px: geometry.mm_to_px(config.tag_size_mm),
            margin_px: geometry.mm_to_px(config.margin_mm),
            label_px: geometry.mm_to_px(label_mm),
            origin_x_px: geometry.mm_to_px((rest_x / 2.0).floor()),
            origin_y_px: geometry.mm_to_px((rest_y / 2.0).floor()),
        })
    }

    #[inline]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    #[inline]
    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    #[inline]
    pub fn tag_px(&self) -> u32 {
        self.tag_px
    }

    #[inline]
    pub fn margin_px(&self) -> u32 {
        self.margin_px
    }

    #[inline]
    pub fn label_px(&self) -> u32 {
        self.label_px
    }

    /// Number of cells in the grid.
    #[inline]
    pub fn cell_count(&self) -> u32 {
        self.config.grid_x * self.config.grid_y
    }

    /// Cell at grid position `(row, col)`.
    pub fn cell(&self, row: u32, col: u32) -> Cell {
        let x = self.origin_x_px + col * (self.tag_px + self.margin_px);
        let y = self.origin_y_px + row * (self.tag_px + self.margin_px + 2 * self.label_px);
        Cell {
            row,
            col,
            marker_id: self.config.first_id + row * self.config.grid_x + col,
            x,
            y,
            size_px: self.tag_px,
            visible: self.config.pattern.visible(row, col),
        }
    }

    /// Walk all cells in row-major order.
    pub fn cells(&self) -> Cells<'_> {
        Cells {
            layout: self,
            next: 0,
        }
    }
}

/// Row-major iterator over a sheet's cells.
pub struct Cells<'a> {
    layout: &'a SheetLayout,
    next: u32,
}

impl Iterator for Cells<'_> {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.next >= self.layout.cell_count() {
            return None;
        }
        let row = self.next / self.layout.config.grid_x;
        let col = self.next % self.layout.config.grid_x;
        self.next += 1;
        Some(self.layout.cell(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{PageFormat, Resolution};

    fn geom() -> PageGeometry {
        PageGeometry::new(PageFormat::A4, Resolution::Dpi72)
    }

    fn config(grid_x: u32, grid_y: u32) -> LayoutConfig {
        LayoutConfig {
            grid_x,
            grid_y,
            tag_size_mm: 50.0,
            margin_mm: 5.0,
            label_height_mm: 0.0,
            write_label: false,
            ..LayoutConfig::default()
        }
    }

    #[test]
    fn empty_grid_is_rejected_before_feasibility() {
        for (x, y) in [(0, 4), (3, 0), (0, 0)] {
            // An absurd tag size must not matter: the grid check comes first.
            let mut cfg = config(x, y);
            cfg.tag_size_mm = 1e9;
            let err = SheetLayout::plan(cfg, geom()).unwrap_err();
            assert_eq!(err, LayoutError::InvalidGrid { x, y });
        }
    }

    #[test]
    fn three_columns_of_50mm_tags_fit_a4_exactly() {
        // 3*50 + 2*5 = 160 <= 210.
        let layout = SheetLayout::plan(config(3, 4), geom()).unwrap();
        assert_eq!(layout.tag_px(), 141); // floor(50 * 595/210)
        // rest_x = 50 mm -> 25 mm origin -> floor(25 * 595/210) = 70 px.
        assert_eq!(layout.cell(0, 0).x, 70);
    }

    #[test]
    fn fourth_column_overflows_the_x_axis() {
        // 4*50 + 3*5 = 215 > 210.
        let err = SheetLayout::plan(config(4, 4), geom()).unwrap_err();
        match err {
            LayoutError::Overflow {
                axis,
                count,
                overflow_mm,
            } => {
                assert_eq!(axis, Axis::X);
                assert_eq!(count, 4);
                assert!((overflow_mm - 5.0).abs() < 1e-9);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        let msg = SheetLayout::plan(config(4, 4), geom()).unwrap_err().to_string();
        assert!(msg.contains("x-direction"), "{msg}");
    }

    #[test]
    fn label_rows_count_against_the_y_axis() {
        // 5 rows of 50 mm tags fit without labels (5*50 + 4*5 = 270),
        // but not with an 8 mm label reserved twice per row (350 > 297).
        let mut cfg = config(3, 5);
        assert!(SheetLayout::plan(cfg, geom()).is_ok());
        cfg.write_label = true;
        cfg.label_height_mm = 8.0;
        let err = SheetLayout::plan(cfg, geom()).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::Overflow { axis: Axis::Y, count: 5, .. }
        ));
    }

    #[test]
    fn disabling_labels_zeroes_the_label_height() {
        let mut with_label = config(3, 4);
        with_label.label_height_mm = 8.0;
        with_label.write_label = false;
        let layout = SheetLayout::plan(with_label, geom()).unwrap();
        assert_eq!(layout.label_px(), 0);
    }

    #[test]
    fn marker_ids_are_contiguous_in_row_major_order() {
        let mut cfg = config(3, 4);
        cfg.first_id = 17;
        cfg.pattern = PatternKind::Checkers2x2;
        let layout = SheetLayout::plan(cfg, geom()).unwrap();
        let ids: Vec<u32> = layout.cells().map(|c| c.marker_id).collect();
        let expected: Vec<u32> = (17..17 + 12).collect();
        // Ids advance even through pattern-blanked cells.
        assert_eq!(ids, expected);
        let last = layout.cells().last().unwrap();
        assert_eq!((last.row, last.col), (3, 2));
    }

    #[test]
    fn cell_rectangles_are_disjoint_and_inside_the_page() {
        let mut cfg = config(3, 4);
        cfg.write_label = true;
        cfg.label_height_mm = 8.0;
        let g = geom();
        let layout = SheetLayout::plan(cfg, g).unwrap();
        let cells: Vec<Cell> = layout.cells().collect();
        for c in &cells {
            assert!(c.x + c.size_px <= g.width_px());
            assert!(c.y + c.size_px <= g.height_px());
        }
        for a in &cells {
            for b in &cells {
                if (a.row, a.col) == (b.row, b.col) {
                    continue;
                }
                let overlap_x = a.x < b.x + b.size_px && b.x < a.x + a.size_px;
                let overlap_y = a.y < b.y + b.size_px && b.y < a.y + a.size_px;
                assert!(
                    !(overlap_x && overlap_y),
                    "cells ({},{}) and ({},{}) overlap",
                    a.row,
                    a.col,
                    b.row,
                    b.col
                );
            }
        }
    }
}
