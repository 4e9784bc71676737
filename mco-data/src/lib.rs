//! Numeric transforms for the CO viewer.
//!
//! This crate turns API responses into figures a plotting library can draw:
//! - [`axis`]: padded y-axis bounds and scientific-notation labels
//! - [`sphere`]: latitude/longitude grid to unit-sphere mesh
//! - [`color`]: color-scale bounds that ignore missing cells
//! - [`chart`] / [`globe`]: the renderer-ready figures

pub mod axis;
pub mod chart;
pub mod color;
pub mod globe;
pub mod sphere;

pub use axis::AxisBounds;
pub use chart::ChartFigure;
pub use color::ColorRange;
pub use globe::GlobeFigure;
pub use sphere::SphereMesh;

use thiserror::Error;

/// A response that cannot be turned into a figure.
#[derive(Error, Debug, PartialEq)]
pub enum TransformError {
    #[error("time series has no values")]
    EmptySeries,

    #[error("time series has {months} months but {averages} averages")]
    LengthMismatch { months: usize, averages: usize },

    #[error("grid has {rows} rows but there are {lat} latitudes")]
    GridRows { rows: usize, lat: usize },

    #[error("grid row {row} has {len} cells but there are {lon} longitudes")]
    GridColumns { row: usize, len: usize, lon: usize },
}

/// Month label handling.
pub mod months {
    use chrono::NaiveDate;

    /// Display label for a month key.
    ///
    /// `YYYY-MM` keys become abbreviated month names ("2019-03" -> "Mar");
    /// anything else is passed through unchanged.
    pub fn display_label(key: &str) -> String {
        let trimmed = key.trim();
        match NaiveDate::parse_from_str(&format!("{}-01", trimmed), "%Y-%m-%d") {
            Ok(date) => date.format("%b").to_string(),
            Err(_) => key.to_string(),
        }
    }

}
