//! The ways a generate request can end without a full render, as shown to
//! the user.

use mco_api::{FetchError, Resource, Year};
use std::fmt::Display;
use thiserror::Error;

/// Why a generate request did not fully render.
///
/// `Display` is the status message shown to the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerateError {
    /// The data service has nothing for this year.
    #[error("No {resource} found for {year}{}", status_suffix(.status))]
    ResourceUnavailable {
        resource: Resource,
        year: Year,
        status: Option<u16>,
    },

    /// Network failure, malformed body, or a transform/render failure.
    #[error("Failed to load {resource} for {year}: {message}")]
    UnexpectedFailure {
        resource: Resource,
        year: Year,
        message: String,
    },

    /// Another generation is still in flight; nothing was requested.
    #[error("Still loading, CO data for {year} was not requested")]
    InProgress { year: Year },
}

impl GenerateError {
    /// Classify a fetch failure for `resource`.
    pub fn from_fetch(resource: Resource, year: Year, err: FetchError) -> Self {
        match err {
            FetchError::ResourceUnavailable { status, .. } => GenerateError::ResourceUnavailable {
                resource,
                year,
                status,
            },
            other => GenerateError::unexpected(resource, year, other),
        }
    }

    pub fn unexpected(resource: Resource, year: Year, err: impl Display) -> Self {
        GenerateError::UnexpectedFailure {
            resource,
            year,
            message: err.to_string(),
        }
    }

    /// The resource that failed; `None` when nothing was fetched.
    pub fn resource(&self) -> Option<Resource> {
        match self {
            GenerateError::ResourceUnavailable { resource, .. }
            | GenerateError::UnexpectedFailure { resource, .. } => Some(*resource),
            GenerateError::InProgress { .. } => None,
        }
    }

    pub fn year(&self) -> Year {
        match self {
            GenerateError::ResourceUnavailable { year, .. }
            | GenerateError::UnexpectedFailure { year, .. }
            | GenerateError::InProgress { year } => *year,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, GenerateError::ResourceUnavailable { .. })
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" (HTTP {})", code),
        None => String::new(),
    }
}
