//! Data source selection for the CLI.

use crate::SourceOptions;
use log::info;
use mco_api::bundle::ProcessedBundle;
use mco_api::client::HttpSource;
use mco_api::error::Result;
use mco_api::{AnnualMapResponse, DataSource, TimeSeriesResponse, Year};

/// The API, or an offline bundle.
pub enum Source {
    Http(HttpSource),
    Bundle(ProcessedBundle),
}

impl Source {
    pub fn from_options(options: &SourceOptions) -> anyhow::Result<Self> {
        match &options.bundle {
            Some(path) => Ok(Source::Bundle(ProcessedBundle::load(path)?)),
            None => {
                let config = options.client_config();
                info!("Using CO data API at {}", config.base());
                Ok(Source::Http(HttpSource::new(config)?))
            }
        }
    }
}

impl DataSource for Source {
    async fn fetch_time_series(&self, year: Year) -> Result<TimeSeriesResponse> {
        match self {
            Source::Http(http) => http.fetch_time_series(year).await,
            Source::Bundle(bundle) => bundle.fetch_time_series(year).await,
        }
    }

    async fn fetch_annual_map(&self, year: Year) -> Result<AnnualMapResponse> {
        match self {
            Source::Http(http) => http.fetch_annual_map(year).await,
            Source::Bundle(bundle) => bundle.fetch_annual_map(year).await,
        }
    }
}
