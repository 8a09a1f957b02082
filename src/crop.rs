//! Supported crop types
//!
//! The crop set is closed: every variant has recommendation logic defined in
//! `recommend::crops`, and the exhaustive matches there keep it that way at
//! compile time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// A crop the analyzer knows how to advise on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropType {
    Corn,
    Rice,
    Wheat,
    Tomato,
    Potato,
    Soybean,
}

impl CropType {
    /// All supported crops, in declaration order.
    pub const ALL: [CropType; 6] = [
        CropType::Corn,
        CropType::Rice,
        CropType::Wheat,
        CropType::Tomato,
        CropType::Potato,
        CropType::Soybean,
    ];

    /// Lowercase name as used in requests and advisory text.
    pub fn as_str(&self) -> &'static str {
        match self {
            CropType::Corn => "corn",
            CropType::Rice => "rice",
            CropType::Wheat => "wheat",
            CropType::Tomato => "tomato",
            CropType::Potato => "potato",
            CropType::Soybean => "soybean",
        }
    }

    /// Crop names sorted alphabetically, for display in selection lists.
    pub fn sorted_names() -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Self::ALL.iter().map(CropType::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Display for CropType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CropType {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "corn" => Ok(CropType::Corn),
            "rice" => Ok(CropType::Rice),
            "wheat" => Ok(CropType::Wheat),
            "tomato" => Ok(CropType::Tomato),
            "potato" => Ok(CropType::Potato),
            "soybean" => Ok(CropType::Soybean),
            other => Err(AnalysisError::UnsupportedCrop {
                name: other.to_string(),
            }),
        }
    }
}
