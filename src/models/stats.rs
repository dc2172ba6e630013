//! Land-cover statistics as returned by the analysis backend.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-class map of a single statistic, keyed by class name.
///
/// `BTreeMap` keeps ordering deterministic; the class set is dynamic because
/// the simplified-classes toggle changes which classes the backend reports.
pub type ClassValues = BTreeMap<String, f64>;

/// Class-by-class matrix, keyed by class-name pairs.
pub type ClassMatrix = BTreeMap<String, ClassValues>;

/// The statistics object held for a completed analysis.
///
/// Every field defaults so partially-populated responses from older backend
/// revisions still parse.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LandCoverStats {
    /// Physical area per class in square kilometres.
    #[serde(default)]
    pub areas_sq_km: ClassValues,
    /// Share of the analysed surface per class, in percent.
    #[serde(default)]
    pub areas_pct: ClassValues,
    /// Fragmentation index per class: disjoint patch count / total area.
    #[serde(default)]
    pub fragmentation: ClassValues,
    /// Boundary-sharing proportions between class pairs.
    #[serde(default)]
    pub adjacency: ClassMatrix,
    /// Built-up density: residential + industrial pixels / all pixels.
    #[serde(default)]
    pub density: f64,
}

impl LandCoverStats {
    pub fn is_empty(&self) -> bool {
        self.areas_sq_km.is_empty()
            && self.areas_pct.is_empty()
            && self.fragmentation.is_empty()
            && self.adjacency.is_empty()
            && self.density == 0.0
    }
}

/// Display colors for the classifier's class set, mirroring the mask palette.
const CLASS_COLORS: &[(&str, &str)] = &[
    ("AnnualCrop", "#ffff00"),
    ("Forest", "#00ff00"),
    ("HerbaceousVegetation", "#64c864"),
    ("Highway", "#0000ff"),
    ("Industrial", "#808080"),
    ("Pasture", "#00c800"),
    ("PermanentCrop", "#c8ff64"),
    ("Residential", "#ffffff"),
    ("River", "#00ffff"),
    ("SeaLake", "#ff64ff"),
];

/// Rotating fallback palette for classes outside the known set.
const FALLBACK_PALETTE: &[&str] = &[
    "#4caf50", "#2196f3", "#ff9800", "#9c27b0", "#f44336", "#00bcd4", "#8bc34a", "#ffeb3b",
    "#795548", "#607d8b",
];

/// Display color for a class; `index` picks the fallback for unknown names.
pub fn class_color(class_name: &str, index: usize) -> &'static str {
    CLASS_COLORS
        .iter()
        .find(|(name, _)| *name == class_name)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_PALETTE[index % FALLBACK_PALETTE.len()])
}
