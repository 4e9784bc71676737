//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use mco_api::{Year, YearRange};
use mco_render::BusyIndicator;

/// A line of feedback under the controls.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

/// Shared application state for the CO viewer.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Year currently selected on the slider
    pub year: Signal<i32>,
    /// Bounds of the year slider
    pub year_range: Signal<YearRange>,
    /// Whether a generation is in flight (button disabled, overlay shown)
    pub busy: Signal<bool>,
    /// Outcome of the last generation, if any
    pub status: Signal<Option<StatusMessage>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self::with_range(YearRange::default())
    }

    /// Create a new AppState whose slider starts at the last year of `range`.
    pub fn with_range(range: YearRange) -> Self {
        Self {
            year: Signal::new(range.last.get()),
            year_range: Signal::new(range),
            busy: Signal::new(false),
            status: Signal::new(None),
        }
    }

    pub fn selected_year(&self) -> Year {
        Year::new((self.year)())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives `AppState::busy` from the generator's busy guard.
#[derive(Clone, Copy)]
pub struct SignalBusy(pub Signal<bool>);

impl BusyIndicator for SignalBusy {
    fn set_busy(&self, busy: bool) {
        let mut signal = self.0;
        signal.set(busy);
    }
}
