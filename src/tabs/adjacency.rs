//! Adjacency tab: class-by-class boundary-sharing matrix.

use crate::models::stats::ClassMatrix;

/// Proportion at which a cell reaches full shading intensity.
pub const INTENSITY_FULL_SCALE: f64 = 0.2;

/// One off-diagonal matrix cell. Diagonal cells are suppressed entirely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjacencyCell {
    /// Boundary-sharing proportion, 0..1.
    pub value: f64,
    /// Shading intensity, 0..=1.
    pub intensity: f64,
}

impl AdjacencyCell {
    /// Display string, e.g. `12.00` for a 0.12 proportion.
    pub fn pct_text(&self) -> String {
        format!("{:.2}", self.value * 100.0)
    }
}

/// Square matrix view over the class set found in the payload.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyView {
    pub classes: Vec<String>,
    /// Row-major; `None` on the diagonal.
    cells: Vec<Option<AdjacencyCell>>,
}

impl AdjacencyView {
    pub fn size(&self) -> usize {
        self.classes.len()
    }

    /// Cell at (row, col); `None` on the diagonal or out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<AdjacencyCell> {
        let n = self.classes.len();
        if row >= n || col >= n {
            return None;
        }
        self.cells[row * n + col]
    }
}

pub fn adjacency_view(matrix: &ClassMatrix) -> AdjacencyView {
    let classes: Vec<String> = matrix.keys().cloned().collect();
    let n = classes.len();
    let mut cells = Vec::with_capacity(n * n);

    for (row, row_class) in classes.iter().enumerate() {
        for (col, col_class) in classes.iter().enumerate() {
            if row == col {
                cells.push(None);
                continue;
            }
            let value = matrix
                .get(row_class)
                .and_then(|r| r.get(col_class))
                .copied()
                .unwrap_or(0.0);
            cells.push(Some(AdjacencyCell {
                value,
                intensity: (value / INTENSITY_FULL_SCALE).min(1.0),
            }));
        }
    }

    AdjacencyView { classes, cells }
}
