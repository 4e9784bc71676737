//! MOPITT CO viewer
//!
//! Pick a year, fetch that year's CO statistics from the data API, and draw
//! a Chart.js line chart of monthly global averages next to a Plotly globe of
//! the annual mean.
//!
//! Data flow:
//! 1. `build.rs` bakes `MCO_API_BASE_URL` into the binary; `?api=<url>` on
//!    the page URL overrides it.
//! 2. On mount: evaluate the Chart.js/Plotly helper script.
//! 3. On "Generate": the `Generator` fetches the time series, redraws the
//!    chart, fetches the annual map, redraws the globe. The button stays
//!    disabled until it returns; the outcome lands in the status line.

use dioxus::prelude::*;
use mco_api::client::{ClientConfig, HttpSource};
use mco_chart_ui::components::{
    GenerateButton, LoadingOverlay, StatusDisplay, ViewPanel, YearSlider,
};
use mco_chart_ui::js_bridge;
use mco_chart_ui::state::{AppState, SignalBusy, StatusMessage};
use mco_chart_ui::surfaces::{ChartJsSurface, PlotlySurface};
use mco_data::chart::Y_AXIS_TITLE;
use mco_render::Generator;
use std::rc::Rc;

/// API base URL chosen at build time.
const BUILD_API_BASE_URL: &str = include_str!(concat!(env!("OUT_DIR"), "/api_base_url.txt"));

const CHART_JS_SRC: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";
const PLOTLY_SRC: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// DOM id of the Chart.js canvas.
const CHART_CANVAS_ID: &str = "co-timeseries-chart";
/// DOM id of the Plotly globe container.
const GLOBE_CONTAINER_ID: &str = "co-globe";

type ViewerGenerator = Generator<HttpSource, ChartJsSurface, PlotlySurface, SignalBusy>;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("co-viewer-root"))
        .launch(App);
}

/// Base URL from `?api=` on the page URL, else the build-time value.
fn api_base_url() -> String {
    let from_query = web_sys::window()
        .and_then(|window| window.location().search().ok())
        .and_then(|search| web_sys::UrlSearchParams::new_with_str(&search).ok())
        .and_then(|params| params.get("api"))
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty());
    from_query.unwrap_or_else(|| BUILD_API_BASE_URL.trim().to_string())
}

fn build_generator(busy: SignalBusy) -> Result<Rc<ViewerGenerator>, String> {
    let config = ClientConfig::new(api_base_url());
    log::info!("Using CO data API at {}", config.base());
    let source = HttpSource::new(config).map_err(|e| e.to_string())?;
    Ok(Rc::new(Generator::new(
        source,
        ChartJsSurface::new(CHART_CANVAS_ID),
        PlotlySurface::new(GLOBE_CONTAINER_ID),
        busy,
    )))
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let generator = use_hook(|| build_generator(SignalBusy(state.busy)));

    // ─── Effect: load the plotting helpers once on mount ───
    let setup_error = generator.as_ref().err().cloned();
    use_effect(move || {
        js_bridge::init_views();
        if let Some(err) = setup_error.clone() {
            log::error!("Failed to create HTTP client: {}", err);
            state
                .status
                .set(Some(StatusMessage::Error(format!("Failed to create HTTP client: {}", err))));
        }
    });

    let on_generate = move |_: ()| {
        let Ok(generator) = generator.clone() else {
            return;
        };
        // A second click can land before the spawned task first runs.
        if *state.busy.peek() || generator.is_loading() {
            return;
        }
        state.busy.set(true);
        let year = state.selected_year();
        state
            .status
            .set(Some(StatusMessage::Info(format!("Loading CO data for {}...", year))));
        spawn(async move {
            let status = match generator.on_generate(year).await {
                Ok(rendered) => StatusMessage::Info(rendered.status_message()),
                Err(e) => StatusMessage::Error(e.to_string()),
            };
            state.status.set(Some(status));
        });
    };

    // ─── Render ───
    rsx! {
        document::Script { src: CHART_JS_SRC }
        document::Script { src: PLOTLY_SRC }

        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h2 {
                style: "margin: 8px 0;",
                "Atmospheric CO from MOPITT"
            }

            div {
                style: "display: flex; gap: 16px; align-items: center; flex-wrap: wrap;",
                YearSlider {}
                GenerateButton { on_generate: on_generate }
            }

            StatusDisplay {}

            ViewPanel {
                id: CHART_CANVAS_ID.to_string(),
                title: "Monthly Global Average".to_string(),
                caption: Y_AXIS_TITLE.to_string(),
                canvas: true,
                min_height: 320,
            }

            ViewPanel {
                id: GLOBE_CONTAINER_ID.to_string(),
                title: "Annual Average on the Globe".to_string(),
                caption: "molecules/cm^2; gaps are cells without measurements".to_string(),
                min_height: 520,
            }

            LoadingOverlay {}
        }
    }
}
