//! Shared Dioxus components and plotting bridge for the CO viewer.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Chart.js and Plotly helpers via `js_sys::eval()`
//! - `surfaces`: `Surface` implementations drawing through the bridge
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (year slider, containers, status, etc.)

pub mod components;
pub mod js_bridge;
pub mod state;
pub mod surfaces;
