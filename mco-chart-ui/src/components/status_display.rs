//! Status line component.

use crate::state::{AppState, StatusMessage};
use dioxus::prelude::*;

/// Shows the outcome of the last generation: errors in a red box,
/// everything else as a muted line.
#[component]
pub fn StatusDisplay() -> Element {
    let state = use_context::<AppState>();
    let status = state.status.read().clone();

    match status {
        Some(StatusMessage::Error(message)) => rsx! {
            div {
                style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
                strong { "Error: " }
                "{message}"
            }
        },
        Some(StatusMessage::Info(message)) => rsx! {
            p {
                style: "margin: 8px 0; font-size: 13px; color: #555;",
                "{message}"
            }
        },
        None => rsx! {},
    }
}
