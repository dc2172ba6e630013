//! Percentage tab: proportional bars per land-cover class.

use crate::models::stats::{class_color, ClassValues};

/// Entries below this share of the surface are not drawn.
pub const DISPLAY_FLOOR_PCT: f64 = 0.1;

/// One proportional bar in the percentage view.
#[derive(Debug, Clone, PartialEq)]
pub struct PercentageBar {
    pub class_name: String,
    pub pct: f64,
    pub color: &'static str,
}

impl PercentageBar {
    /// Bar label, e.g. `Forest: 60.0%`.
    pub fn label(&self) -> String {
        format!("{}: {:.1}%", self.class_name, self.pct)
    }
}

/// Bars sorted by share descending, near-zero entries suppressed.
pub fn percentage_bars(values: &ClassValues) -> Vec<PercentageBar> {
    let mut sorted: Vec<(&String, &f64)> = values.iter().collect();
    sorted.sort_by(|a, b| b.1.partial_cmp(a.1).unwrap_or(std::cmp::Ordering::Equal));

    sorted
        .into_iter()
        .enumerate()
        .filter(|(_, (_, pct))| **pct >= DISPLAY_FLOOR_PCT)
        .map(|(i, (class_name, pct))| PercentageBar {
            class_name: class_name.clone(),
            pct: *pct,
            color: class_color(class_name, i),
        })
        .collect()
}
