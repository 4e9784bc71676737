//! The request orchestrator: year in, chart and globe out.
//!
//! One call to [`Generator::on_generate`] walks
//! `Idle -> Loading -> (Rendered | Failed) -> Idle`:
//!
//! 1. fetch the time series, build the chart figure, replace the chart
//! 2. fetch the annual map, build the globe figure, replace the globe
//!
//! The first failure ends the run. A failing stage clears its own surface
//! and every later one; earlier stages stay drawn. The busy indicator and the
//! `Loading` phase are held for the whole call, and a call made while another
//! is in flight is turned away without touching either.

use crate::busy::{BusyGuard, BusyIndicator};
use crate::error::GenerateError;
use crate::surface::{Slot, Surface};
use log::{error, info, warn};
use mco_api::{DataSource, Resource, Year};
use mco_data::{AxisBounds, ChartFigure, ColorRange, GlobeFigure};
use std::cell::Cell;

/// Where the orchestrator is in a generate cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Rendered,
    Failed,
}

/// What a successful generation drew.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub year: Year,
    pub axis: AxisBounds,
    pub color_range: Option<ColorRange>,
    pub missing_cells: usize,
}

impl Rendered {
    pub fn status_message(&self) -> String {
        format!("Showing CO data for {}", self.year)
    }
}

pub type RenderResult = Result<Rendered, GenerateError>;

/// Holds the busy indicator and the `Loading` phase for one generation.
///
/// Both are reset in `Drop`, so a panicking surface cannot leave the
/// generator stuck in `Loading`.
struct InFlight<'a, B: BusyIndicator> {
    phase: &'a Cell<Phase>,
    _busy: BusyGuard<'a, B>,
}

impl<'a, B: BusyIndicator> InFlight<'a, B> {
    fn begin(phase: &'a Cell<Phase>, busy: &'a B) -> Self {
        let busy = BusyGuard::acquire(busy);
        phase.set(Phase::Loading);
        InFlight { phase, _busy: busy }
    }
}

impl<B: BusyIndicator> Drop for InFlight<'_, B> {
    fn drop(&mut self) {
        self.phase.set(Phase::Idle);
    }
}

/// Owns the data source, both drawing slots and the busy indicator.
pub struct Generator<D, C, G, B>
where
    D: DataSource,
    C: Surface<Figure = ChartFigure>,
    G: Surface<Figure = GlobeFigure>,
    B: BusyIndicator,
{
    source: D,
    chart: Slot<C>,
    globe: Slot<G>,
    busy: B,
    phase: Cell<Phase>,
    last_phase: Cell<Option<Phase>>,
}

impl<D, C, G, B> Generator<D, C, G, B>
where
    D: DataSource,
    C: Surface<Figure = ChartFigure>,
    G: Surface<Figure = GlobeFigure>,
    B: BusyIndicator,
{
    pub fn new(source: D, chart: C, globe: G, busy: B) -> Self {
        Generator {
            source,
            chart: Slot::new(chart),
            globe: Slot::new(globe),
            busy,
            phase: Cell::new(Phase::Idle),
            last_phase: Cell::new(None),
        }
    }

    /// `Loading` while a generation is in flight, otherwise `Idle`.
    pub fn phase(&self) -> Phase {
        self.phase.get()
    }

    pub fn is_loading(&self) -> bool {
        self.phase() == Phase::Loading
    }

    /// `Rendered` or `Failed` for the most recent completed generation.
    pub fn last_phase(&self) -> Option<Phase> {
        self.last_phase.get()
    }

    pub fn source(&self) -> &D {
        &self.source
    }

    pub fn chart(&self) -> &Slot<C> {
        &self.chart
    }

    pub fn globe(&self) -> &Slot<G> {
        &self.globe
    }

    /// Fetch and render both views for `year`.
    ///
    /// Every failure is logged here and returned as a [`GenerateError`] whose
    /// message is meant for the user. The indicator is idle again once this
    /// returns, whatever the outcome. While another call is in flight this
    /// returns [`GenerateError::InProgress`] at once.
    pub async fn on_generate(&self, year: Year) -> RenderResult {
        if self.is_loading() {
            warn!("Ignoring generate for {}: a generation is in flight", year);
            return Err(GenerateError::InProgress { year });
        }
        let _in_flight = InFlight::begin(&self.phase, &self.busy);
        info!("Generating CO views for {}", year);

        let result = self.run(year).await;
        let outcome = match &result {
            Ok(rendered) => {
                info!(
                    "Rendered {}: axis [{:e}, {:e}], {} missing cells",
                    year, rendered.axis.min, rendered.axis.max, rendered.missing_cells
                );
                Phase::Rendered
            }
            Err(e) => {
                error!("Generation for {} failed: {:?}", year, e);
                Phase::Failed
            }
        };
        self.last_phase.set(Some(outcome));
        result
    }

    async fn run(&self, year: Year) -> RenderResult {
        let axis = match self.render_chart(year).await {
            Ok(axis) => axis,
            Err(e) => {
                self.chart.clear();
                self.globe.clear();
                return Err(e);
            }
        };

        match self.render_globe(year).await {
            Ok((color_range, missing_cells)) => Ok(Rendered {
                year,
                axis,
                color_range,
                missing_cells,
            }),
            Err(e) => {
                self.globe.clear();
                Err(e)
            }
        }
    }

    async fn render_chart(&self, year: Year) -> Result<AxisBounds, GenerateError> {
        let resource = Resource::TimeSeries;
        let series = self
            .source
            .fetch_time_series(year)
            .await
            .map_err(|e| GenerateError::from_fetch(resource, year, e))?;
        let figure =
            ChartFigure::build(year, &series).map_err(|e| GenerateError::unexpected(resource, year, e))?;
        self.chart
            .replace(&figure)
            .map_err(|e| GenerateError::unexpected(resource, year, e))?;
        Ok(figure.bounds)
    }

    async fn render_globe(&self, year: Year) -> Result<(Option<ColorRange>, usize), GenerateError> {
        let resource = Resource::AnnualMap;
        let map = self
            .source
            .fetch_annual_map(year)
            .await
            .map_err(|e| GenerateError::from_fetch(resource, year, e))?;
        let figure =
            GlobeFigure::build(year, &map).map_err(|e| GenerateError::unexpected(resource, year, e))?;
        self.globe
            .replace(&figure)
            .map_err(|e| GenerateError::unexpected(resource, year, e))?;
        Ok((figure.color_range, map.missing_cells()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RenderError;
    use mco_api::{AnnualMapResponse, FetchError, TimeSeriesResponse};
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::marker::PhantomData;

    /// In-memory backend: a year answers 200 when present, otherwise 404.
    #[derive(Default)]
    struct MockBackend {
        series: HashMap<Year, TimeSeriesResponse>,
        maps: HashMap<Year, AnnualMapResponse>,
        malformed_series: bool,
        /// Suspend once before answering, like a request on the wire.
        slow: bool,
        map_requests: Cell<usize>,
    }

    impl MockBackend {
        fn with_year(mut self, year: i32) -> Self {
            let year = Year::new(year);
            self.series.insert(year, series());
            self.maps.insert(year, map());
            self
        }

        fn without_map(mut self, year: i32) -> Self {
            self.maps.remove(&Year::new(year));
            self
        }
    }

    fn not_found(resource: Resource, year: Year) -> FetchError {
        FetchError::ResourceUnavailable {
            resource,
            year,
            status: Some(404),
        }
    }

    impl DataSource for MockBackend {
        async fn fetch_time_series(&self, year: Year) -> mco_api::error::Result<TimeSeriesResponse> {
            if self.slow {
                tokio::task::yield_now().await;
            }
            if self.malformed_series {
                return Err(serde_json::from_str::<TimeSeriesResponse>("{\"months\": 3}")
                    .unwrap_err()
                    .into());
            }
            self.series
                .get(&year)
                .cloned()
                .ok_or_else(|| not_found(Resource::TimeSeries, year))
        }

        async fn fetch_annual_map(&self, year: Year) -> mco_api::error::Result<AnnualMapResponse> {
            self.map_requests.set(self.map_requests.get() + 1);
            self.maps
                .get(&year)
                .cloned()
                .ok_or_else(|| not_found(Resource::AnnualMap, year))
        }
    }

    fn series() -> TimeSeriesResponse {
        TimeSeriesResponse {
            months: (1..=12).map(|m| format!("2019-{:02}", m)).collect(),
            averages: (0..12).map(|i| 1.0e18 + i as f64 * 1.0e16).collect(),
        }
    }

    fn map() -> AnnualMapResponse {
        AnnualMapResponse {
            lat: vec![-60.0, 0.0, 60.0],
            lon: vec![0.0, 120.0, 240.0],
            grid: vec![
                vec![Some(1.5e18), None, Some(1.7e18)],
                vec![None, Some(2.2e18), Some(1.9e18)],
                vec![Some(1.4e18), Some(1.6e18), None],
            ],
        }
    }

    /// Surface that counts draws and disposals and tracks live instances.
    struct CountingSurface<F> {
        draws: Cell<usize>,
        disposals: Cell<usize>,
        live: Cell<usize>,
        refuse: Cell<bool>,
        explode: Cell<bool>,
        _figure: PhantomData<F>,
    }

    impl<F> Default for CountingSurface<F> {
        fn default() -> Self {
            CountingSurface {
                draws: Cell::new(0),
                disposals: Cell::new(0),
                live: Cell::new(0),
                refuse: Cell::new(false),
                explode: Cell::new(false),
                _figure: PhantomData,
            }
        }
    }

    impl<F> Surface for CountingSurface<F> {
        type Figure = F;
        type Handle = usize;

        fn draw(&self, _figure: &F) -> Result<usize, RenderError> {
            if self.explode.get() {
                panic!("plotting library threw");
            }
            if self.refuse.get() {
                return Err(RenderError("canvas unavailable".to_string()));
            }
            self.draws.set(self.draws.get() + 1);
            self.live.set(self.live.get() + 1);
            Ok(self.draws.get())
        }

        fn dispose(&self, _handle: usize) {
            self.disposals.set(self.disposals.get() + 1);
            self.live.set(self.live.get() - 1);
        }
    }

    /// Records every busy transition.
    #[derive(Default)]
    struct BusyLog(RefCell<Vec<bool>>);

    impl BusyIndicator for BusyLog {
        fn set_busy(&self, busy: bool) {
            self.0.borrow_mut().push(busy);
        }
    }

    type TestGenerator =
        Generator<MockBackend, CountingSurface<ChartFigure>, CountingSurface<GlobeFigure>, BusyLog>;

    fn generator(backend: MockBackend) -> TestGenerator {
        Generator::new(
            backend,
            CountingSurface::default(),
            CountingSurface::default(),
            BusyLog::default(),
        )
    }

    #[tokio::test]
    async fn test_renders_2019() {
        let generator = generator(MockBackend::default().with_year(2019));
        assert_eq!(generator.phase(), Phase::Idle);

        let rendered = generator.on_generate(Year::new(2019)).await.unwrap();
        assert_eq!(rendered.year, Year::new(2019));
        assert!((rendered.axis.min - 0.99e18).abs() / 0.99e18 < 1e-12);
        assert!((rendered.axis.max - 1.11e18 * 1.01).abs() / 1.1211e18 < 1e-12);
        assert_eq!(
            rendered.color_range,
            Some(ColorRange { vmin: 1.4e18, vmax: 2.2e18 })
        );
        assert_eq!(rendered.missing_cells, 3);
        assert_eq!(rendered.status_message(), "Showing CO data for 2019");

        assert_eq!(generator.phase(), Phase::Idle);
        assert_eq!(generator.last_phase(), Some(Phase::Rendered));
        assert_eq!(*generator.busy.0.borrow(), vec![true, false]);
        assert!(generator.chart().is_active());
        assert!(generator.globe().is_active());
    }

    #[tokio::test]
    async fn test_repeated_generation_keeps_one_instance() {
        let generator = generator(MockBackend::default().with_year(2019).with_year(2020));
        let years = [2019, 2020, 2019, 2020, 2020];
        for (n, year) in years.iter().enumerate() {
            generator.on_generate(Year::new(*year)).await.unwrap();
            let chart = generator.chart().surface();
            let globe = generator.globe().surface();
            assert_eq!(chart.live.get(), 1);
            assert_eq!(globe.live.get(), 1);
            assert_eq!(chart.disposals.get(), n);
            assert_eq!(globe.disposals.get(), n);
        }
    }

    #[tokio::test]
    async fn test_map_not_found_keeps_chart() {
        let generator = generator(MockBackend::default().with_year(2019).without_map(2019));

        let err = generator.on_generate(Year::new(2019)).await.unwrap_err();
        assert!(err.is_unavailable());
        assert_eq!(err.resource(), Some(Resource::AnnualMap));
        assert!(err.to_string().contains("map data"));
        assert_eq!(err.to_string(), "No map data found for 2019 (HTTP 404)");

        assert!(generator.chart().is_active());
        assert!(!generator.globe().is_active());
        assert_eq!(generator.globe().surface().draws.get(), 0);
        assert_eq!(generator.last_phase(), Some(Phase::Failed));
        assert_eq!(generator.phase(), Phase::Idle);
        assert_eq!(*generator.busy.0.borrow(), vec![true, false]);
    }

    #[tokio::test]
    async fn test_map_failure_purges_previous_globe() {
        let generator = generator(MockBackend::default().with_year(2019).with_year(2020).without_map(2020));
        generator.on_generate(Year::new(2019)).await.unwrap();
        assert!(generator.globe().is_active());

        generator.on_generate(Year::new(2020)).await.unwrap_err();
        assert!(!generator.globe().is_active());
        assert_eq!(generator.globe().surface().live.get(), 0);
        assert_eq!(generator.chart().surface().live.get(), 1);
    }

    #[tokio::test]
    async fn test_series_not_found_skips_map() {
        let generator = generator(MockBackend::default().with_year(2019));
        generator.on_generate(Year::new(2019)).await.unwrap();

        let err = generator.on_generate(Year::new(1987)).await.unwrap_err();
        assert_eq!(err.resource(), Some(Resource::TimeSeries));
        assert_eq!(err.year(), Year::new(1987));
        assert_eq!(generator.source().map_requests.get(), 1);
        assert!(!generator.chart().is_active());
        assert!(!generator.globe().is_active());
        assert_eq!(*generator.busy.0.borrow(), vec![true, false, true, false]);
    }

    #[tokio::test]
    async fn test_malformed_body_is_unexpected() {
        let backend = MockBackend {
            malformed_series: true,
            ..MockBackend::default()
        }
        .with_year(2019);
        let generator = generator(backend);

        let err = generator.on_generate(Year::new(2019)).await.unwrap_err();
        assert!(!err.is_unavailable());
        assert!(err.to_string().starts_with("Failed to load time-series data for 2019"));
        assert_eq!(generator.last_phase(), Some(Phase::Failed));
    }

    #[tokio::test]
    async fn test_render_failure_is_unexpected() {
        let generator = generator(MockBackend::default().with_year(2019));
        generator.globe().surface().refuse.set(true);

        let err = generator.on_generate(Year::new(2019)).await.unwrap_err();
        assert_eq!(
            err,
            GenerateError::UnexpectedFailure {
                resource: Resource::AnnualMap,
                year: Year::new(2019),
                message: "render failed: canvas unavailable".to_string(),
            }
        );
        assert_eq!(*generator.busy.0.borrow(), vec![true, false]);
    }

    #[tokio::test]
    async fn test_empty_series_is_unexpected() {
        let mut backend = MockBackend::default().with_year(2019);
        backend.series.insert(
            Year::new(2019),
            TimeSeriesResponse {
                months: vec![],
                averages: vec![],
            },
        );
        let generator = generator(backend);
        let err = generator.on_generate(Year::new(2019)).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to load time-series data for 2019: time series has no values"
        );
    }

    #[test]
    fn test_panicking_surface_returns_to_idle() {
        let generator = generator(MockBackend::default().with_year(2019));
        generator.chart().surface().explode.set(true);

        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            runtime.block_on(generator.on_generate(Year::new(2019)))
        }));
        assert!(outcome.is_err());
        assert_eq!(generator.phase(), Phase::Idle);
        assert!(!generator.is_loading());
        assert_eq!(*generator.busy.0.borrow(), vec![true, false]);

        generator.chart().surface().explode.set(false);
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        runtime.block_on(generator.on_generate(Year::new(2019))).unwrap();
        assert_eq!(generator.last_phase(), Some(Phase::Rendered));
    }

    #[tokio::test]
    async fn test_overlapping_generate_is_turned_away() {
        let backend = MockBackend {
            slow: true,
            ..MockBackend::default()
        }
        .with_year(2019)
        .with_year(2020);
        let generator = generator(backend);

        let (first, second) = tokio::join!(
            generator.on_generate(Year::new(2019)),
            generator.on_generate(Year::new(2020))
        );
        assert_eq!(first.unwrap().year, Year::new(2019));
        assert_eq!(second.unwrap_err(), GenerateError::InProgress { year: Year::new(2020) });

        // Only the first call touched the indicator and the surfaces.
        assert_eq!(*generator.busy.0.borrow(), vec![true, false]);
        assert_eq!(generator.source().map_requests.get(), 1);
        assert_eq!(generator.chart().surface().draws.get(), 1);
        assert_eq!(generator.phase(), Phase::Idle);

        generator.on_generate(Year::new(2020)).await.unwrap();
        assert_eq!(generator.chart().surface().live.get(), 1);
    }
}
