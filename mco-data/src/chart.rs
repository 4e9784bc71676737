//! The monthly time-series line chart.

use crate::axis::{scientific_label, AxisBounds};
use crate::{months, TransformError};
use mco_api::{TimeSeriesResponse, Year};
use serde::Serialize;
use serde_json::json;

/// Y-axis title shown on the chart.
pub const Y_AXIS_TITLE: &str = "CO Concentration (molecules/cm^2)";

const LINE_COLOR: &str = "rgb(75, 192, 192)";

/// Everything needed to draw the line chart for one year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartFigure {
    pub year: Year,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub bounds: AxisBounds,
}

impl ChartFigure {
    pub fn build(year: Year, series: &TimeSeriesResponse) -> Result<Self, TransformError> {
        if series.months.len() != series.averages.len() {
            return Err(TransformError::LengthMismatch {
                months: series.months.len(),
                averages: series.averages.len(),
            });
        }
        let bounds = AxisBounds::padded(&series.averages)?;
        Ok(ChartFigure {
            year,
            labels: series.months.iter().map(|m| months::display_label(m)).collect(),
            values: series.averages.clone(),
            bounds,
        })
    }

    pub fn dataset_label(&self) -> String {
        format!("Global Average CO for {}", self.year)
    }

    /// Labels for `count` evenly spaced y-axis ticks.
    pub fn tick_labels(&self, count: usize) -> Vec<String> {
        self.bounds.ticks(count).into_iter().map(scientific_label).collect()
    }

    /// Chart.js configuration object.
    ///
    /// Tick formatting is a JS callback and is attached by the bridge.
    pub fn to_chartjs_config(&self) -> serde_json::Value {
        json!({
            "type": "line",
            "data": {
                "labels": self.labels,
                "datasets": [{
                    "label": self.dataset_label(),
                    "data": self.values,
                    "borderColor": LINE_COLOR,
                    "tension": 0.1,
                }],
            },
            "options": {
                "responsive": true,
                "scales": {
                    "y": {
                        "beginAtZero": false,
                        "min": self.bounds.min,
                        "max": self.bounds.max,
                        "title": { "display": true, "text": Y_AXIS_TITLE },
                    },
                },
            },
        })
    }
}
