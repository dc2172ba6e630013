//! Typed statistic tabs for the results dashboard.
//!
//! The backend ships tabs as `{key, label, data}` objects with string keys
//! and loosely-shaped data. This module replaces that ad hoc dispatch with a
//! tagged kind plus a payload shaped per kind, and hosts the per-tab view
//! computation (one module per tab).

pub mod adjacency;
pub mod area;
pub mod density;
pub mod fragmentation;
pub mod percentage;

pub use adjacency::{adjacency_view, AdjacencyCell, AdjacencyView};
pub use area::{area_view, AreaEntry, AreaView};
pub use density::{density_view, DensityBucket, DensityView};
pub use fragmentation::{fragmentation_view, FragmentationEntry};
pub use percentage::{percentage_bars, PercentageBar};

use serde::{Deserialize, Serialize};

use crate::models::stats::{ClassMatrix, ClassValues, LandCoverStats};

/// The fixed set of statistic categories the dashboard can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabKind {
    Percentage,
    Area,
    Density,
    Adjacency,
    Fragmentation,
}

impl TabKind {
    pub fn key(&self) -> &'static str {
        match self {
            TabKind::Percentage => "percentage",
            TabKind::Area => "area",
            TabKind::Density => "density",
            TabKind::Adjacency => "adjacency",
            TabKind::Fragmentation => "fragmentation",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "percentage" => Some(TabKind::Percentage),
            "area" => Some(TabKind::Area),
            "density" => Some(TabKind::Density),
            "adjacency" => Some(TabKind::Adjacency),
            "fragmentation" => Some(TabKind::Fragmentation),
            _ => None,
        }
    }

    /// Label the backend uses when it builds the tab itself.
    pub fn default_label(&self) -> &'static str {
        match self {
            TabKind::Percentage => "Area (%)",
            TabKind::Area => "Area (km²)",
            TabKind::Density => "Density",
            TabKind::Adjacency => "Adjacency Matrix",
            TabKind::Fragmentation => "Fragmentation",
        }
    }
}

/// Tab payload, shaped per tab kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TabData {
    /// Per-class values (percentage, area, fragmentation).
    Classes(ClassValues),
    /// Single scalar (density).
    Scalar(f64),
    /// Class-by-class matrix (adjacency).
    Matrix(ClassMatrix),
}

impl TabData {
    pub fn is_empty(&self) -> bool {
        match self {
            TabData::Classes(values) => values.is_empty(),
            TabData::Scalar(_) => false,
            TabData::Matrix(matrix) => matrix.is_empty(),
        }
    }
}

/// A tab as carried on the wire: string key, display label, loose data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTab {
    pub key: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Error converting a wire tab into a typed one.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TabError {
    #[error("unknown tab key: {0}")]
    UnknownKey(String),
    #[error("tab '{key}' carries data of the wrong shape: {reason}")]
    BadData { key: String, reason: String },
}

/// One typed dashboard tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTab", into = "RawTab")]
pub struct Tab {
    pub kind: TabKind,
    pub label: String,
    pub data: TabData,
}

impl Tab {
    pub fn new(kind: TabKind, data: TabData) -> Self {
        Tab {
            kind,
            label: kind.default_label().to_string(),
            data,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl TryFrom<RawTab> for Tab {
    type Error = TabError;

    fn try_from(raw: RawTab) -> Result<Self, Self::Error> {
        let kind =
            TabKind::from_key(&raw.key).ok_or_else(|| TabError::UnknownKey(raw.key.clone()))?;
        let bad = |reason: &str| TabError::BadData {
            key: raw.key.clone(),
            reason: reason.to_string(),
        };

        let data = match kind {
            TabKind::Percentage | TabKind::Area | TabKind::Fragmentation => {
                let values: ClassValues = serde_json::from_value(raw.data)
                    .map_err(|_| bad("expected per-class number map"))?;
                TabData::Classes(values)
            }
            TabKind::Density => {
                // Older server drafts shipped the scalar as a bare number or
                // nested under "density".
                let value = match &raw.data {
                    serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
                    serde_json::Value::Object(map) => map
                        .get("density")
                        .and_then(|v| v.as_f64())
                        .ok_or_else(|| bad("expected density scalar"))?,
                    serde_json::Value::Null => 0.0,
                    _ => return Err(bad("expected density scalar")),
                };
                TabData::Scalar(value)
            }
            TabKind::Adjacency => {
                let matrix: ClassMatrix = serde_json::from_value(raw.data)
                    .map_err(|_| bad("expected class-by-class matrix"))?;
                TabData::Matrix(matrix)
            }
        };

        let label = if raw.label.is_empty() {
            kind.default_label().to_string()
        } else {
            raw.label
        };
        Ok(Tab { kind, label, data })
    }
}

impl From<Tab> for RawTab {
    fn from(tab: Tab) -> Self {
        let data = match &tab.data {
            TabData::Classes(values) => serde_json::to_value(values),
            TabData::Scalar(value) => serde_json::to_value(value),
            TabData::Matrix(matrix) => serde_json::to_value(matrix),
        }
        .unwrap_or(serde_json::Value::Null);
        RawTab {
            key: tab.kind.key().to_string(),
            label: tab.label,
            data,
        }
    }
}

/// Convert a wire tab list, skipping unknown keys from superseded drafts.
pub fn tabs_from_wire(raw: Vec<RawTab>) -> Result<Vec<Tab>, TabError> {
    let mut tabs = Vec::with_capacity(raw.len());
    for raw_tab in raw {
        match Tab::try_from(raw_tab) {
            Ok(tab) => tabs.push(tab),
            Err(TabError::UnknownKey(key)) => {
                log::warn!("skipping tab with unknown key '{}'", key);
            }
            Err(e) => return Err(e),
        }
    }
    Ok(tabs)
}

/// Build the canonical tab set from a bare statistics object.
///
/// Fallback for responses that carry `stats` but no `tabs`.
pub fn tabs_from_stats(stats: &LandCoverStats) -> Vec<Tab> {
    let mut tabs = Vec::new();
    if !stats.areas_sq_km.is_empty() {
        tabs.push(Tab::new(
            TabKind::Area,
            TabData::Classes(stats.areas_sq_km.clone()),
        ));
    }
    if !stats.areas_pct.is_empty() {
        tabs.push(Tab::new(
            TabKind::Percentage,
            TabData::Classes(stats.areas_pct.clone()),
        ));
    }
    if !stats.is_empty() {
        tabs.push(Tab::new(TabKind::Density, TabData::Scalar(stats.density)));
    }
    if !stats.fragmentation.is_empty() {
        tabs.push(Tab::new(
            TabKind::Fragmentation,
            TabData::Classes(stats.fragmentation.clone()),
        ));
    }
    if !stats.adjacency.is_empty() {
        tabs.push(Tab::new(
            TabKind::Adjacency,
            TabData::Matrix(stats.adjacency.clone()),
        ));
    }
    tabs
}
