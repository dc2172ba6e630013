//! Analysis parameter sets.
//!
//! Wire field names are the upper-case keys the backend expects in the
//! request `params` object.

use serde::{Deserialize, Serialize};

/// How the stitched tile image is handled before classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    /// Crop the stitched image to the exact bbox before classifying.
    #[default]
    Cropped,
    /// Classify the full stitched tile extent.
    Full,
}

impl AnalysisMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisMode::Cropped => "cropped",
            AnalysisMode::Full => "full",
        }
    }
}

/// Parameters for a bbox analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisParams {
    #[serde(rename = "ANALYSIS_MODE")]
    pub mode: AnalysisMode,
    #[serde(rename = "APPLY_SMOOTHING")]
    pub apply_smoothing: bool,
    #[serde(rename = "APPLY_INTERPOLATION")]
    pub apply_interpolation: bool,
    #[serde(rename = "USE_SIMPLIFIED_CLASSES")]
    pub use_simplified_classes: bool,
    #[serde(rename = "FIX_SEALAKE")]
    pub fix_sealake: bool,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        AnalysisParams {
            mode: AnalysisMode::Cropped,
            apply_smoothing: true,
            apply_interpolation: false,
            use_simplified_classes: false,
            fix_sealake: true,
        }
    }
}

/// Parameters for a region (wojewodztwo) analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionParams {
    #[serde(rename = "TILE_SIZE")]
    pub tile_size: u32,
    #[serde(rename = "APPLY_SMOOTHING")]
    pub apply_smoothing: bool,
}

impl Default for RegionParams {
    fn default() -> Self {
        RegionParams {
            tile_size: 64,
            apply_smoothing: true,
        }
    }
}
