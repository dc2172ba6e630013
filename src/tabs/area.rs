//! Area tab: ranked physical areas with a collapsed top-N view.

use crate::models::stats::{class_color, ClassValues};

/// Entries shown before the reveal-all toggle.
pub const DEFAULT_VISIBLE: usize = 3;

/// One ranked entry in the area view.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaEntry {
    /// 1-based rank in the full sorted list.
    pub rank: usize,
    pub class_name: String,
    pub area_km2: f64,
    /// Bar width relative to the largest entry, 0.0..=1.0.
    pub bar_fraction: f64,
    pub color: &'static str,
}

impl AreaEntry {
    pub fn label(&self) -> String {
        format!("{}. {}: {:.2} km²", self.rank, self.class_name, self.area_km2)
    }
}

/// Ranked area list; `visible()` honours the collapsed/expanded toggle.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaView {
    entries: Vec<AreaEntry>,
    pub expanded: bool,
}

impl AreaView {
    pub fn visible(&self) -> &[AreaEntry] {
        if self.expanded {
            &self.entries
        } else {
            &self.entries[..self.entries.len().min(DEFAULT_VISIBLE)]
        }
    }

    pub fn all(&self) -> &[AreaEntry] {
        &self.entries
    }

    /// Whether the reveal-all toggle has anything to reveal.
    pub fn has_more(&self) -> bool {
        self.entries.len() > DEFAULT_VISIBLE
    }
}

/// Rank classes by area descending.
pub fn area_view(values: &ClassValues, expanded: bool) -> AreaView {
    let mut sorted: Vec<(&String, &f64)> = values.iter().collect();
    sorted.sort_by(|a, b| b.1.partial_cmp(a.1).unwrap_or(std::cmp::Ordering::Equal));

    let max = sorted.first().map(|(_, v)| **v).unwrap_or(0.0);
    let entries = sorted
        .into_iter()
        .enumerate()
        .map(|(i, (class_name, area))| AreaEntry {
            rank: i + 1,
            class_name: class_name.clone(),
            area_km2: *area,
            bar_fraction: if max > 0.0 { *area / max } else { 0.0 },
            color: class_color(class_name, i),
        })
        .collect();

    AreaView { entries, expanded }
}
