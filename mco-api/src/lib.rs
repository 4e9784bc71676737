//! Data model and data sources for the MOPITT CO viewer.
//!
//! Two JSON resources are served per year by the data API:
//! - `GET {base}/api/timeseries?year=Y` -> [`TimeSeriesResponse`]
//! - `GET {base}/api/annual_map?year=Y` -> [`AnnualMapResponse`]
//!
//! Anything that can produce them implements [`DataSource`]. The HTTP client
//! lives behind the `api` feature; the offline [`bundle::ProcessedBundle`]
//! is always available.

pub mod bundle;
#[cfg(feature = "api")]
pub mod client;
pub mod error;
pub mod models;
pub mod source;
pub mod year;

pub use error::FetchError;
pub use models::{AnnualMapResponse, TimeSeriesResponse};
pub use source::{DataSource, Resource};
pub use year::{Year, YearRange};
