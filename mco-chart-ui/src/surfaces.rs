//! `Surface` implementations that draw through the JS bridge.

use crate::js_bridge;
use mco_data::{ChartFigure, GlobeFigure};
use mco_render::{RenderError, Surface};

/// Chart.js line chart on a `<canvas>`.
#[derive(Debug, Clone)]
pub struct ChartJsSurface {
    canvas_id: String,
}

impl ChartJsSurface {
    pub fn new(canvas_id: impl Into<String>) -> Self {
        Self {
            canvas_id: canvas_id.into(),
        }
    }
}

impl Surface for ChartJsSurface {
    type Figure = ChartFigure;
    /// Id of the canvas holding the live chart.
    type Handle = String;

    fn draw(&self, figure: &ChartFigure) -> Result<String, RenderError> {
        js_bridge::draw_chart(&self.canvas_id, &figure.to_chartjs_config()).map_err(RenderError)?;
        Ok(self.canvas_id.clone())
    }

    fn dispose(&self, canvas_id: String) {
        js_bridge::destroy_chart(&canvas_id);
    }
}

/// Plotly 3-D surface in a `<div>`.
#[derive(Debug, Clone)]
pub struct PlotlySurface {
    div_id: String,
}

impl PlotlySurface {
    pub fn new(div_id: impl Into<String>) -> Self {
        Self {
            div_id: div_id.into(),
        }
    }
}

impl Surface for PlotlySurface {
    type Figure = GlobeFigure;
    type Handle = String;

    fn draw(&self, figure: &GlobeFigure) -> Result<String, RenderError> {
        js_bridge::draw_globe(&self.div_id, &figure.to_plotly_figure()).map_err(RenderError)?;
        Ok(self.div_id.clone())
    }

    fn dispose(&self, div_id: String) {
        js_bridge::purge_globe(&div_id);
    }
}
