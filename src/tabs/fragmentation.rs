//! Fragmentation tab: ranked bars normalized to the set maximum.

use crate::models::stats::{class_color, ClassValues};

/// One ranked fragmentation bar.
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentationEntry {
    pub class_name: String,
    /// Fragmentation index: disjoint patch count / total class area.
    pub value: f64,
    /// Bar width relative to the set maximum, 0.0..=1.0.
    pub bar_fraction: f64,
    pub color: &'static str,
}

impl FragmentationEntry {
    /// Small indices render exponentially, the rest with fixed precision.
    pub fn display_value(&self) -> String {
        if self.value < 0.001 {
            format!("{:.3e}", self.value)
        } else {
            format!("{:.6}", self.value)
        }
    }
}

/// Rank classes by fragmentation index descending.
pub fn fragmentation_view(values: &ClassValues) -> Vec<FragmentationEntry> {
    let mut sorted: Vec<(&String, &f64)> = values.iter().collect();
    sorted.sort_by(|a, b| b.1.partial_cmp(a.1).unwrap_or(std::cmp::Ordering::Equal));

    let max = sorted.first().map(|(_, v)| **v).unwrap_or(0.0);
    sorted
        .into_iter()
        .enumerate()
        .map(|(i, (class_name, value))| FragmentationEntry {
            class_name: class_name.clone(),
            value: *value,
            bar_fraction: if max > 0.0 { *value / max } else { 0.0 },
            color: class_color(class_name, i),
        })
        .collect()
}
