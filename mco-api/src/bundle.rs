//! Offline source backed by a preprocessed data bundle.
//!
//! The preprocessing step of the data backend writes every year into a single
//! JSON document:
//!
//! ```text
//! { "2019": { "timeseries": {..}, "annual_map": {..} }, "2020": {..} }
//! ```
//!
//! The writer is Python's `json` module, so unmeasured grid cells arrive as
//! the bare token `NaN` and months without a retrieval as a `null` average.
//! Non-finite tokens are read as `null` before parsing, and months without
//! an average are dropped from the series. [`ProcessedBundle`] serves the
//! result through the same [`DataSource`] seam as the HTTP client.

use crate::error::{FetchError, Result};
use crate::models::{AnnualMapResponse, TimeSeriesResponse};
use crate::source::{DataSource, Resource};
use crate::year::Year;
use log::{info, warn};
use serde::{Deserialize, Deserializer};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::Path;

/// Both resources for one year.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct YearEntry {
    #[serde(deserialize_with = "measured_months")]
    pub timeseries: TimeSeriesResponse,
    pub annual_map: AnnualMapResponse,
}

#[derive(Deserialize)]
struct RawSeries {
    months: Vec<String>,
    averages: Vec<Option<f64>>,
}

/// Keep only the months that have an average.
fn measured_months<'de, D>(deserializer: D) -> std::result::Result<TimeSeriesResponse, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = RawSeries::deserialize(deserializer)?;
    if raw.months.len() != raw.averages.len() {
        return Err(serde::de::Error::custom(format!(
            "{} months but {} averages",
            raw.months.len(),
            raw.averages.len()
        )));
    }
    let mut series = TimeSeriesResponse {
        months: Vec::with_capacity(raw.months.len()),
        averages: Vec::with_capacity(raw.averages.len()),
    };
    for (month, average) in raw.months.into_iter().zip(raw.averages) {
        match average {
            Some(value) => {
                series.months.push(month);
                series.averages.push(value);
            }
            None => warn!("Dropping {} from the bundle: no monthly average", month),
        }
    }
    Ok(series)
}

/// Rewrite the bare `NaN`, `Infinity` and `-Infinity` tokens Python emits
/// into `null`. Text inside strings is left alone.
fn non_finite_as_null(json: &str) -> Cow<'_, str> {
    const TOKENS: [&str; 3] = ["-Infinity", "Infinity", "NaN"];
    if !TOKENS.iter().any(|token| json.contains(token)) {
        return Cow::Borrowed(json);
    }

    let mut out = String::with_capacity(json.len());
    let mut in_string = false;
    let mut escaped = false;
    let mut rest = json;
    while let Some(c) = rest.chars().next() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
        } else if c == '"' {
            in_string = true;
        } else if let Some(token) = TOKENS.iter().find(|token| rest.starts_with(**token)) {
            out.push_str("null");
            rest = &rest[token.len()..];
            continue;
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }
    Cow::Owned(out)
}

/// All years of a preprocessed bundle, keyed by year.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessedBundle {
    years: BTreeMap<Year, YearEntry>,
}

impl ProcessedBundle {
    /// Parse a bundle from its JSON text.
    ///
    /// Keys that are not years are rejected as a decode error.
    pub fn from_json(json: &str) -> Result<Self> {
        let json = non_finite_as_null(json);
        let raw: BTreeMap<String, YearEntry> = serde_json::from_str(&json)?;
        let mut years = BTreeMap::new();
        for (key, entry) in raw {
            let year = key.parse::<Year>().map_err(|_| {
                FetchError::Decode(serde::de::Error::custom(format!(
                    "bundle key {:?} is not a year",
                    key
                )))
            })?;
            years.insert(year, entry);
        }
        Ok(Self { years })
    }

    /// Read and parse a bundle file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let bundle = Self::from_json(&json)?;
        info!("Loaded {} years from {}", bundle.years.len(), path.display());
        Ok(bundle)
    }

    /// Years present in the bundle, ascending.
    pub fn years(&self) -> Vec<Year> {
        self.years.keys().copied().collect()
    }

    pub fn get(&self, year: Year) -> Option<&YearEntry> {
        self.years.get(&year)
    }

    fn entry(&self, resource: Resource, year: Year) -> Result<&YearEntry> {
        self.years.get(&year).ok_or(FetchError::ResourceUnavailable {
            resource,
            year,
            status: None,
        })
    }
}

impl DataSource for ProcessedBundle {
    async fn fetch_time_series(&self, year: Year) -> Result<TimeSeriesResponse> {
        Ok(self.entry(Resource::TimeSeries, year)?.timeseries.clone())
    }

    async fn fetch_annual_map(&self, year: Year) -> Result<AnnualMapResponse> {
        Ok(self.entry(Resource::AnnualMap, year)?.annual_map.clone())
    }
}
