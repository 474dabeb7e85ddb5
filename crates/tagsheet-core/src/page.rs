//! Physical page formats, print resolutions, and mm→px conversion.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported physical page formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PageFormat {
    #[default]
    A4,
}

impl PageFormat {
    /// Physical page size in millimeters `(width, height)`.
    pub fn size_mm(self) -> (f64, f64) {
        match self {
            PageFormat::A4 => (210.0, 297.0),
        }
    }
}

/// Supported print resolutions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    #[serde(rename = "72", alias = "dpi72")]
    Dpi72,
    #[default]
    #[serde(rename = "96", alias = "dpi96")]
    Dpi96,
    #[serde(rename = "150", alias = "dpi150")]
    Dpi150,
    #[serde(rename = "300", alias = "dpi300")]
    Dpi300,
}

impl Resolution {
    pub const ALL: [Resolution; 4] = [
        Resolution::Dpi72,
        Resolution::Dpi96,
        Resolution::Dpi150,
        Resolution::Dpi300,
    ];

    /// Nominal dots per inch.
    pub fn dpi(self) -> u32 {
        match self {
            Resolution::Dpi72 => 72,
            Resolution::Dpi96 => 96,
            Resolution::Dpi150 => 150,
            Resolution::Dpi300 => 300,
        }
    }

    /// Page raster size in pixels `(width, height)` at this resolution.
    ///
    /// Standard print sizes; the values for 72 and 96 dpi match the common
    /// A4-at-dpi tables (595×842, 794×1123).
    pub fn page_px(self, format: PageFormat) -> (u32, u32) {
        match format {
            PageFormat::A4 => match self {
                Resolution::Dpi72 => (595, 842),
                Resolution::Dpi96 => (794, 1123),
                Resolution::Dpi150 => (1240, 1754),
                Resolution::Dpi300 => (2480, 3508),
            },
        }
    }
}

/// Requested resolution is not in the supported set.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{value} dpi output is not supported; try one of: 72, 96, 150, 300")]
pub struct UnsupportedResolution {
    pub value: String,
}

impl FromStr for Resolution {
    type Err = UnsupportedResolution;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "72" => Ok(Resolution::Dpi72),
            "96" => Ok(Resolution::Dpi96),
            "150" => Ok(Resolution::Dpi150),
            "300" => Ok(Resolution::Dpi300),
            other => Err(UnsupportedResolution {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dpi())
    }
}

/// Pixel geometry of a page at a chosen resolution.
///
/// The scale multiplier is the minimum of the horizontal and vertical
/// pixel-per-mm ratios, so both axes use one uniform scale and content keeps
/// its aspect ratio even when the raster does not match the page exactly.
#[derive(Clone, Copy, Debug)]
pub struct PageGeometry {
    format: PageFormat,
    width_px: u32,
    height_px: u32,
    px_per_mm: f64,
}

impl PageGeometry {
    pub fn new(format: PageFormat, resolution: Resolution) -> Self {
        let (mm_w, mm_h) = format.size_mm();
        let (px_w, px_h) = resolution.page_px(format);
        let px_per_mm = (f64::from(px_w) / mm_w).min(f64::from(px_h) / mm_h);
        Self {
            format,
            width_px: px_w,
            height_px: px_h,
            px_per_mm,
        }
    }

    #[inline]
    pub fn format(&self) -> PageFormat {
        self.format
    }

    #[inline]
    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    #[inline]
    pub fn height_px(&self) -> u32 {
        self.height_px
    }

    #[inline]
    pub fn px_per_mm(&self) -> f64 {
        self.px_per_mm
    }

    /// Convert a physical length in millimeters to whole pixels (floored).
    ///
    /// Deterministic and monotone non-decreasing in `mm`.
    #[inline]
    pub fn mm_to_px(&self, mm: f64) -> u32 {
        (mm * self.px_per_mm).floor().max(0.0) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_mm_is_zero_px_at_every_resolution() {
        for res in Resolution::ALL {
            let geom = PageGeometry::new(PageFormat::A4, res);
            assert_eq!(geom.mm_to_px(0.0), 0, "{res}");
        }
    }

    #[test]
    fn conversion_is_monotone() {
        for res in Resolution::ALL {
            let geom = PageGeometry::new(PageFormat::A4, res);
            let mut prev = 0;
            for tenths in 0..2970 {
                let px = geom.mm_to_px(f64::from(tenths) * 0.1);
                assert!(px >= prev, "{res}: not monotone at {tenths}");
                prev = px;
            }
        }
    }

    #[test]
    fn multiplier_is_min_of_axis_ratios() {
        let geom = PageGeometry::new(PageFormat::A4, Resolution::Dpi72);
        // 595/210 ≈ 2.8333, 842/297 ≈ 2.8350 => width ratio wins.
        assert!((geom.px_per_mm() - 595.0 / 210.0).abs() < 1e-12);
        // 50 mm tag at 72 dpi: floor(50 * 595/210) = 141 px.
        assert_eq!(geom.mm_to_px(50.0), 141);
    }

    #[test]
    fn unsupported_resolution_is_rejected_at_parse_time() {
        let err = "600".parse::<Resolution>().unwrap_err();
        assert_eq!(err.value, "600");
        assert!(err.to_string().contains("not supported"));
        assert_eq!("96".parse::<Resolution>().unwrap(), Resolution::Dpi96);
    }
}
