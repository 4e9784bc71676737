//! The seam between the viewer and wherever the CO data comes from.

use crate::error::Result;
use crate::models::{AnnualMapResponse, TimeSeriesResponse};
use crate::year::Year;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two resources served per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    TimeSeries,
    AnnualMap,
}

impl Resource {
    /// Path of the endpoint relative to the base URL.
    pub fn path(self) -> &'static str {
        match self {
            Resource::TimeSeries => "/api/timeseries",
            Resource::AnnualMap => "/api/annual_map",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::TimeSeries => write!(f, "time-series data"),
            Resource::AnnualMap => write!(f, "map data"),
        }
    }
}

/// Anything that can produce the per-year CO resources.
///
/// Implementations are read-only and idempotent; calling either method twice
/// for the same year yields the same data.
#[allow(async_fn_in_trait)]
pub trait DataSource {
    async fn fetch_time_series(&self, year: Year) -> Result<TimeSeriesResponse>;

    async fn fetch_annual_map(&self, year: Year) -> Result<AnnualMapResponse>;
}

impl<T: DataSource> DataSource for &T {
    async fn fetch_time_series(&self, year: Year) -> Result<TimeSeriesResponse> {
        (**self).fetch_time_series(year).await
    }

    async fn fetch_annual_map(&self, year: Year) -> Result<AnnualMapResponse> {
        (**self).fetch_annual_map(year).await
    }
}
