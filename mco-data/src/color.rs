//! Color-scale bounds for the globe surface.

use crate::axis::min_max;
use serde::Serialize;

/// Inclusive range of the color scale, from the measured cells only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorRange {
    pub vmin: f64,
    pub vmax: f64,
}

impl ColorRange {
    /// Bounds over every non-null cell. `None` when no cell has data.
    pub fn from_grid(grid: &[Vec<Option<f64>>]) -> Option<Self> {
        let valid = grid.iter().flat_map(|row| row.iter().flatten().copied());
        min_max(valid).map(|(vmin, vmax)| ColorRange { vmin, vmax })
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.vmin && value <= self.vmax
    }
}
