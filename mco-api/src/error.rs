/// Error types for fetching CO data.
use crate::source::Resource;
use crate::year::Year;
use thiserror::Error;

/// Failure to obtain a resource from a [`DataSource`](crate::DataSource).
#[derive(Error, Debug)]
pub enum FetchError {
    /// The source answered but has nothing for this year (non-2xx status,
    /// or the year is absent from an offline bundle).
    #[error("no {resource} for {year}{}", status_suffix(.status))]
    ResourceUnavailable {
        resource: Resource,
        year: Year,
        status: Option<u16>,
    },

    /// Transport failure: connection refused, DNS, timeout, body read.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The body was not the expected JSON shape.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The offline bundle could not be read.
    #[error("Failed to read data bundle: {0}")]
    Bundle(#[from] std::io::Error),
}

impl FetchError {
    /// Whether the source reported "no data" rather than failing outright.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, FetchError::ResourceUnavailable { .. })
    }

    /// HTTP status code, when the failure carried one.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::ResourceUnavailable { status, .. } => *status,
            _ => None,
        }
    }
}

#[cfg(feature = "api")]
impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Request(err.to_string())
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" (HTTP {})", code),
        None => String::new(),
    }
}

/// Type alias for Results using FetchError
pub type Result<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_message_names_status() {
        let err = FetchError::ResourceUnavailable {
            resource: Resource::AnnualMap,
            year: Year::new(2019),
            status: Some(404),
        };
        assert!(err.is_unavailable());
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "no map data for 2019 (HTTP 404)");
    }

    #[test]
    fn test_unavailable_without_status() {
        let err = FetchError::ResourceUnavailable {
            resource: Resource::TimeSeries,
            year: Year::new(2001),
            status: None,
        };
        assert_eq!(err.to_string(), "no time-series data for 2001");
    }

    #[test]
    fn test_decode_is_not_unavailable() {
        let err: FetchError = serde_json::from_str::<Vec<f64>>("{").unwrap_err().into();
        assert!(!err.is_unavailable());
        assert_eq!(err.status(), None);
    }
}
