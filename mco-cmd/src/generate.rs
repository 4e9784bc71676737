//! Headless generate: the same orchestration as the viewer, drawing into
//! JSON files instead of a browser.

use log::{info, warn};
use mco_api::{DataSource, Year};
use mco_data::{ChartFigure, GlobeFigure};
use mco_render::{Generator, RenderError, RenderResult, Surface};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// File name of the Chart.js configuration.
pub const CHART_FILE: &str = "chart.json";
/// File name of the Plotly figure.
pub const GLOBE_FILE: &str = "globe.json";

/// Writes a figure's JSON to a fixed path; disposing deletes the file.
pub struct JsonFileSurface<F> {
    path: PathBuf,
    to_json: fn(&F) -> serde_json::Value,
    _figure: PhantomData<F>,
}

impl<F> JsonFileSurface<F> {
    pub fn new(path: impl Into<PathBuf>, to_json: fn(&F) -> serde_json::Value) -> Self {
        Self {
            path: path.into(),
            to_json,
            _figure: PhantomData,
        }
    }
}

impl<F> Surface for JsonFileSurface<F> {
    type Figure = F;
    type Handle = PathBuf;

    fn draw(&self, figure: &F) -> Result<PathBuf, RenderError> {
        let json = serde_json::to_string_pretty(&(self.to_json)(figure))
            .map_err(|e| RenderError(e.to_string()))?;
        std::fs::write(&self.path, json)
            .map_err(|e| RenderError(format!("{}: {}", self.path.display(), e)))?;
        info!("Wrote {}", self.path.display());
        Ok(self.path.clone())
    }

    fn dispose(&self, path: PathBuf) {
        if let Err(e) = std::fs::remove_file(&path) {
            warn!("Failed to remove {}: {}", path.display(), e);
        }
    }
}

/// Build a generator writing `chart.json` and `globe.json` into `out_dir`.
pub fn file_generator<D: DataSource>(
    source: D,
    out_dir: &Path,
) -> Generator<D, JsonFileSurface<ChartFigure>, JsonFileSurface<GlobeFigure>, ()> {
    Generator::new(
        source,
        JsonFileSurface::new(out_dir.join(CHART_FILE), ChartFigure::to_chartjs_config),
        JsonFileSurface::new(out_dir.join(GLOBE_FILE), GlobeFigure::to_plotly_figure),
        (),
    )
}

/// One-line summary of a generation for the terminal.
pub fn describe(result: &RenderResult) -> String {
    match result {
        Ok(rendered) => {
            let range = match rendered.color_range {
                Some(range) => format!(
                    "color {} .. {}",
                    mco_data::axis::scientific_label(range.vmin),
                    mco_data::axis::scientific_label(range.vmax)
                ),
                None => "no measured cells".to_string(),
            };
            format!(
                "{}: y-axis {} .. {}, {}, {} missing cells",
                rendered.status_message(),
                mco_data::axis::scientific_label(rendered.axis.min),
                mco_data::axis::scientific_label(rendered.axis.max),
                range,
                rendered.missing_cells
            )
        }
        Err(e) => e.to_string(),
    }
}

pub async fn run_generate<D: DataSource>(source: D, year: Year, out_dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(out_dir)?;
    let generator = file_generator(source, out_dir);
    let result = generator.on_generate(year).await;
    let summary = describe(&result);
    match result {
        Ok(_) => {
            println!("{}", summary);
            Ok(())
        }
        Err(_) => anyhow::bail!(summary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mco_api::bundle::ProcessedBundle;

    const BUNDLE: &str = r#"{
        "2019": {
            "timeseries": {"months": ["2019-01", "2019-02", "2019-03"], "averages": [1.0e18, 1.1e18, 1.2e18]},
            "annual_map": {"lon": [-90.0, 90.0], "lat": [-30.0, 30.0], "grid": [[1.5e18, null], [null, 2.5e18]]}
        }
    }"#;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("mco-cmd-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn test_generate_writes_both_figures() {
        let dir = scratch_dir("generate");
        let bundle = ProcessedBundle::from_json(BUNDLE).unwrap();

        run_generate(bundle, Year::new(2019), &dir).await.unwrap();

        let chart: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(dir.join(CHART_FILE)).unwrap()).unwrap();
        assert_eq!(chart["data"]["labels"][0], "Jan");
        assert_eq!(chart["data"]["datasets"][0]["label"], "Global Average CO for 2019");

        let globe: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(dir.join(GLOBE_FILE)).unwrap()).unwrap();
        assert!(globe["data"][0]["surfacecolor"][0][1].is_null());
        assert_eq!(globe["data"][0]["cmin"].as_f64(), Some(1.5e18));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_missing_year_reports_status() {
        let dir = scratch_dir("missing");
        let bundle = ProcessedBundle::from_json(BUNDLE).unwrap();

        let err = run_generate(bundle, Year::new(2020), &dir).await.unwrap_err();
        assert_eq!(err.to_string(), "No time-series data found for 2020");
        assert!(!dir.join(CHART_FILE).exists());
        assert!(!dir.join(GLOBE_FILE).exists());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_regenerate_replaces_files() {
        let dir = scratch_dir("regenerate");
        let generator = file_generator(ProcessedBundle::from_json(BUNDLE).unwrap(), &dir);

        generator.on_generate(Year::new(2019)).await.unwrap();
        generator.on_generate(Year::new(2019)).await.unwrap();
        assert!(dir.join(CHART_FILE).exists());
        assert!(dir.join(GLOBE_FILE).exists());

        generator.on_generate(Year::new(2021)).await.unwrap_err();
        assert!(!dir.join(CHART_FILE).exists());
        assert!(!dir.join(GLOBE_FILE).exists());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
