//! Textile tiling motifs deciding which grid cells show a marker.
//!
//! Each motif is a deterministic 2-coloring of the grid: a pure function of
//! the cell's row/column. The pattern phase advances one unit per row and
//! column regardless of marker id numbering, so the motif tiles continuously
//! even when the first marker id is nonzero.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tiling motif selector.
///
/// Motif formulas follow Loe Feijs' houndstooth family of weave patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    /// Every cell visible.
    #[default]
    #[serde(alias = "ful")]
    Full,
    /// 2×2 checkerboard.
    #[serde(alias = "chk")]
    Checkers2x2,
    /// 4×4 puppytooth (small houndstooth).
    #[serde(alias = "pt4")]
    PuppyTooth4x4,
    /// 8×8 pied-de-poule (houndstooth).
    #[serde(alias = "pdp8")]
    PiedDePoule8x8,
    /// 4×4 herringbone twill.
    #[serde(alias = "hb4")]
    Herringbone4x4,
    /// 4×4 broken twill.
    #[serde(alias = "bt4")]
    BrokenTwill4x4,
    /// 6×8 goose eye (bird's eye diamond twill).
    #[serde(alias = "ge")]
    GooseEye6x8,
}

impl PatternKind {
    pub const ALL: [PatternKind; 7] = [
        PatternKind::Full,
        PatternKind::Checkers2x2,
        PatternKind::PuppyTooth4x4,
        PatternKind::PiedDePoule8x8,
        PatternKind::Herringbone4x4,
        PatternKind::BrokenTwill4x4,
        PatternKind::GooseEye6x8,
    ];

    /// Short command-line token for this motif.
    pub fn token(self) -> &'static str {
        match self {
            PatternKind::Full => "ful",
            PatternKind::Checkers2x2 => "chk",
            PatternKind::PuppyTooth4x4 => "pt4",
            PatternKind::PiedDePoule8x8 => "pdp8",
            PatternKind::Herringbone4x4 => "hb4",
            PatternKind::BrokenTwill4x4 => "bt4",
            PatternKind::GooseEye6x8 => "ge",
        }
    }

    /// Whether the marker at grid row `row`, column `col` is drawn.
    pub fn visible(self, row: u32, col: u32) -> bool {
        let i = i64::from(row);
        let j = i64::from(col);
        match self {
            PatternKind::Full => true,
            PatternKind::Checkers2x2 => (i - j).rem_euclid(2) == 0,
            PatternKind::PuppyTooth4x4 => {
                if (i - j).rem_euclid(2) == 0 {
                    i.rem_euclid(4) < 2
                } else {
                    j.rem_euclid(4) < 2
                }
            }
            PatternKind::PiedDePoule8x8 => {
                if (i - j).rem_euclid(4) < 2 {
                    i.rem_euclid(8) < 4
                } else {
                    j.rem_euclid(8) < 4
                }
            }
            PatternKind::Herringbone4x4 => {
                if i.rem_euclid(4) < 2 {
                    (i + j).rem_euclid(4) < 2
                } else {
                    (j - i).rem_euclid(4) < 2
                }
            }
            PatternKind::BrokenTwill4x4 => {
                if i.rem_euclid(4) < 2 {
                    (i + j).rem_euclid(4) < 2
                } else {
                    (i - j).rem_euclid(4) < 2
                }
            }
            PatternKind::GooseEye6x8 => {
                let gi = fold_row(i);
                let gj = fold_col(j);
                // The reference formula is (gi + 1001 - gj) % 4 < 2; only the
                // +1 phase of the 1001 constant is arithmetically relevant.
                (gi + 1 - gj).rem_euclid(4) < 2
            }
        }
    }
}

/// Fold a row index into the `[0, 3]` half of the 6-row goose-eye repeat.
#[inline]
fn fold_row(i: i64) -> i64 {
    let r = i.rem_euclid(6);
    if r < 3 {
        r
    } else {
        6 - r
    }
}

/// Fold a column index (shifted by one) into the `[0, 4]` half of the 8-column repeat.
#[inline]
fn fold_col(j: i64) -> i64 {
    let r = (j - 1).rem_euclid(8);
    if r < 4 {
        r
    } else {
        8 - r
    }
}

/// Requested pattern token is not in the supported set.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("pattern '{value}' is not supported; try one of: ful, chk, pt4, pdp8, hb4, bt4, ge")]
pub struct UnsupportedPattern {
    pub value: String,
}

impl FromStr for PatternKind {
    type Err = UnsupportedPattern;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PatternKind::ALL
            .into_iter()
            .find(|p| p.token() == s)
            .ok_or_else(|| UnsupportedPattern {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_is_always_visible() {
        for i in 0..100 {
            for j in 0..100 {
                assert!(PatternKind::Full.visible(i, j));
            }
        }
    }

    #[test]
    fn checkers_is_symmetric_and_alternates() {
        let p = PatternKind::Checkers2x2;
        for i in 0..32 {
            for j in 0..32 {
                assert_eq!(p.visible(i, j), p.visible(j, i));
                assert_ne!(p.visible(i, j), p.visible(i, j + 1));
                assert_ne!(p.visible(i, j), p.visible(i + 1, j));
            }
        }
        assert!(p.visible(0, 0));
    }

    #[test]
    fn puppytooth_first_rows_match_reference() {
        // Hand-evaluated from the motif formula for rows 0..4, cols 0..4.
        let expected = [
            [true, true, true, false],
            [true, true, false, true],
            [false, true, false, false],
            [true, false, false, false],
        ];
        for (i, row) in expected.iter().enumerate() {
            for (j, &vis) in row.iter().enumerate() {
                assert_eq!(
                    PatternKind::PuppyTooth4x4.visible(i as u32, j as u32),
                    vis,
                    "({i}, {j})"
                );
            }
        }
    }

    #[test]
    fn patterns_tile_with_their_nominal_period() {
        let periods = [
            (PatternKind::Checkers2x2, 2, 2),
            (PatternKind::PuppyTooth4x4, 4, 4),
            (PatternKind::PiedDePoule8x8, 8, 8),
            (PatternKind::Herringbone4x4, 4, 4),
            (PatternKind::BrokenTwill4x4, 4, 4),
            (PatternKind::GooseEye6x8, 6, 8),
        ];
        for (p, pi, pj) in periods {
            for i in 0..24 {
                for j in 0..24 {
                    assert_eq!(p.visible(i, j), p.visible(i + pi, j), "{p} row period");
                    assert_eq!(p.visible(i, j), p.visible(i, j + pj), "{p} col period");
                }
            }
        }
    }

    #[test]
    fn herringbone_matches_large_constant_formula() {
        // The reference keeps operands non-negative with a +10000 term;
        // 10000 % 4 == 0, so rem_euclid without the constant is identical.
        for i in 0i64..64 {
            for j in 0i64..64 {
                let reference = if i % 4 < 2 {
                    (i + j) % 4 < 2
                } else {
                    (10000 + j - i) % 4 < 2
                };
                assert_eq!(
                    PatternKind::Herringbone4x4.visible(i as u32, j as u32),
                    reference,
                    "({i}, {j})"
                );
            }
        }
    }

    #[test]
    fn goose_eye_matches_large_constant_formula() {
        // 1001 % 4 == 1, so the constant is *not* a no-op: the reduced form
        // must keep the +1 phase term.
        for i in 0i64..64 {
            for j in 0i64..64 {
                let gi = fold_row(i);
                let gj = fold_col(j);
                let reference = (gi + 1001 - gj) % 4 < 2;
                assert_eq!(
                    PatternKind::GooseEye6x8.visible(i as u32, j as u32),
                    reference,
                    "({i}, {j})"
                );
            }
        }
    }

    #[test]
    fn goose_eye_folds_stay_in_range() {
        for v in 0i64..1000 {
            let gi = fold_row(v);
            assert!((0..=3).contains(&gi), "fold_row({v}) = {gi}");
            let gj = fold_col(v);
            assert!((0..=4).contains(&gj), "fold_col({v}) = {gj}");
        }
    }

    #[test]
    fn tokens_round_trip() {
        for p in PatternKind::ALL {
            assert_eq!(p.token().parse::<PatternKind>().unwrap(), p);
        }
        let err = "zigzag".parse::<PatternKind>().unwrap_err();
        assert_eq!(err.value, "zigzag");
    }
}
