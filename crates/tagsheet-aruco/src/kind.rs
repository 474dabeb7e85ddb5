//! Typed selector over the built-in dictionaries.

use crate::builtins;
use crate::dictionary::Dictionary;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the built-in marker dictionary families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DictionaryKind {
    #[serde(rename = "DICT_4X4_50", alias = "dict_4x4_50")]
    Dict4x4_50,
    #[serde(rename = "DICT_4X4_100", alias = "dict_4x4_100")]
    Dict4x4_100,
    #[serde(rename = "DICT_APRILTAG_16h5", alias = "dict_apriltag_16h5")]
    Apriltag16h5,
    #[default]
    #[serde(rename = "DICT_APRILTAG_36h11", alias = "dict_apriltag_36h11")]
    Apriltag36h11,
}

impl DictionaryKind {
    pub const ALL: [DictionaryKind; 4] = [
        DictionaryKind::Dict4x4_50,
        DictionaryKind::Dict4x4_100,
        DictionaryKind::Apriltag16h5,
        DictionaryKind::Apriltag36h11,
    ];

    /// The embedded dictionary for this kind.
    pub fn dictionary(self) -> &'static Dictionary {
        match self {
            DictionaryKind::Dict4x4_50 => &builtins::DICT_4X4_50,
            DictionaryKind::Dict4x4_100 => &builtins::DICT_4X4_100,
            DictionaryKind::Apriltag16h5 => &builtins::DICT_APRILTAG_16H5,
            DictionaryKind::Apriltag36h11 => &builtins::DICT_APRILTAG_36H11,
        }
    }

    /// True for AprilTag families (affects the label caption).
    pub fn is_apriltag(self) -> bool {
        matches!(
            self,
            DictionaryKind::Apriltag16h5 | DictionaryKind::Apriltag36h11
        )
    }

    /// Family name used as the label caption prefix.
    pub fn caption_family(self) -> &'static str {
        if self.is_apriltag() {
            "April"
        } else {
            "ArUco"
        }
    }
}

/// Requested dictionary name is not in the supported set.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("marker dictionary '{value}' is not supported; try one of: DICT_4X4_50, DICT_4X4_100, DICT_APRILTAG_16h5, DICT_APRILTAG_36h11")]
pub struct UnsupportedDictionary {
    pub value: String,
}

impl FromStr for DictionaryKind {
    type Err = UnsupportedDictionary;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DictionaryKind::ALL
            .into_iter()
            .find(|k| k.dictionary().name == s)
            .ok_or_else(|| UnsupportedDictionary {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for DictionaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dictionary().name)
    }
}
