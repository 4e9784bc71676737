//! Response bodies returned by the data API.
//!
//! Both are produced once per request and never mutated after receipt.

use serde::{Deserialize, Serialize};

/// Monthly global averages of CO total column for one year.
///
/// `months` and `averages` are parallel sequences; the backend emits month
/// labels as `YYYY-MM`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesResponse {
    pub months: Vec<String>,
    pub averages: Vec<f64>,
}

/// Annual mean CO on a latitude/longitude grid.
///
/// `grid` is indexed `[lat_index][lon_index]`. A `None` cell was never
/// measured during the year (JSON `null`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualMapResponse {
    pub lat: Vec<f64>,
    pub lon: Vec<f64>,
    pub grid: Vec<Vec<Option<f64>>>,
}

impl AnnualMapResponse {
    /// Number of cells without data.
    pub fn missing_cells(&self) -> usize {
        self.grid
            .iter()
            .map(|row| row.iter().filter(|cell| cell.is_none()).count())
            .sum()
    }
}
