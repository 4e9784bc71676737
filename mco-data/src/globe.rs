//! The annual-mean globe: a unit sphere colored by CO concentration.

use crate::color::ColorRange;
use crate::sphere::SphereMesh;
use crate::TransformError;
use log::debug;
use mco_api::{AnnualMapResponse, Year};
use serde::Serialize;
use serde_json::json;

const COLOR_SCALE: &str = "Viridis";

/// Everything needed to draw the globe for one year.
///
/// `surface_color` is the response grid passed through untouched: `None`
/// cells serialize as `null`, which the plotting library leaves as gaps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobeFigure {
    pub year: Year,
    pub mesh: SphereMesh,
    pub surface_color: Vec<Vec<Option<f64>>>,
    pub color_range: Option<ColorRange>,
}

impl GlobeFigure {
    /// Check the grid shape, project the mesh and fit the color scale.
    pub fn build(year: Year, map: &AnnualMapResponse) -> Result<Self, TransformError> {
        if map.grid.len() != map.lat.len() {
            return Err(TransformError::GridRows {
                rows: map.grid.len(),
                lat: map.lat.len(),
            });
        }
        if let Some((row, cells)) = map
            .grid
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != map.lon.len())
        {
            return Err(TransformError::GridColumns {
                row,
                len: cells.len(),
                lon: map.lon.len(),
            });
        }

        let mesh = SphereMesh::project(&map.lat, &map.lon);
        let color_range = ColorRange::from_grid(&map.grid);
        debug!(
            "Globe for {}: {}x{} nodes, {} missing cells, range {:?}",
            year,
            map.lat.len(),
            map.lon.len(),
            map.missing_cells(),
            color_range
        );

        Ok(GlobeFigure {
            year,
            mesh,
            surface_color: map.grid.clone(),
            color_range,
        })
    }

    pub fn title(&self) -> String {
        format!("Annual Average CO for {}", self.year)
    }

    /// Plotly figure (`data` + `layout`) with a single surface trace.
    ///
    /// Without any measured cell the color bounds are left to Plotly.
    pub fn to_plotly_figure(&self) -> serde_json::Value {
        let mut trace = json!({
            "type": "surface",
            "x": self.mesh.x,
            "y": self.mesh.y,
            "z": self.mesh.z,
            "surfacecolor": self.surface_color,
            "colorscale": COLOR_SCALE,
            "showscale": true,
            "colorbar": { "title": { "text": "CO (molecules/cm^2)" } },
        });
        if let Some(range) = self.color_range {
            trace["cmin"] = json!(range.vmin);
            trace["cmax"] = json!(range.vmax);
        }

        let hidden_axis = json!({ "visible": false });
        json!({
            "data": [trace],
            "layout": {
                "title": { "text": self.title() },
                "scene": {
                    "xaxis": hidden_axis,
                    "yaxis": hidden_axis,
                    "zaxis": hidden_axis,
                    "aspectmode": "data",
                },
                "margin": { "l": 0, "r": 0, "t": 40, "b": 0 },
            },
        })
    }
}
