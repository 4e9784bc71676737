//! Y-axis scaling for the time-series chart.
//!
//! CO totals sit around 1e18 molecules/cm^2 with month-to-month swings of a
//! few percent, so the axis is fitted to the data with a fixed 1% margin
//! below the minimum and above the maximum rather than starting at zero.

use crate::TransformError;
use serde::Serialize;

/// Factor applied to the smallest value for the lower bound.
pub const LOWER_PAD: f64 = 0.99;
/// Factor applied to the largest value for the upper bound.
pub const UPPER_PAD: f64 = 1.01;

/// Inclusive y-axis range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

impl AxisBounds {
    /// `[min(values) * 0.99, max(values) * 1.01]`.
    pub fn padded(values: &[f64]) -> Result<Self, TransformError> {
        let (lo, hi) = min_max(values.iter().copied()).ok_or(TransformError::EmptySeries)?;
        Ok(AxisBounds {
            min: lo * LOWER_PAD,
            max: hi * UPPER_PAD,
        })
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// `count` evenly spaced tick positions from `min` to `max` inclusive.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        match count {
            0 => Vec::new(),
            1 => vec![self.min],
            _ => {
                let step = (self.max - self.min) / (count - 1) as f64;
                (0..count).map(|i| self.min + step * i as f64).collect()
            }
        }
    }
}

/// Smallest and largest of a sequence, `None` when empty.
pub(crate) fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Scientific notation with two fraction digits, e.g. `1.23e+18`.
///
/// Matches JavaScript's `Number.prototype.toExponential(2)` so labels agree
/// with the ones the browser chart draws.
pub fn scientific_label(value: f64) -> String {
    let formatted = format!("{:.2e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}
