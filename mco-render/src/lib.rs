//! Generate-and-render orchestration, independent of any UI toolkit.
//!
//! A front end builds a [`Generator`] from a data source, one [`Surface`]
//! for the line chart, one for the globe, and a [`BusyIndicator`] for its
//! trigger control, then calls [`Generator::on_generate`] for each click.

pub mod busy;
pub mod error;
pub mod generator;
pub mod surface;

pub use busy::{BusyGuard, BusyIndicator};
pub use error::GenerateError;
pub use generator::{Generator, Phase, RenderResult, Rendered};
pub use surface::{RenderError, Slot, Surface};
