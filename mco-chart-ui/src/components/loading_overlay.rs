//! Loading overlay shown while a generation is in flight.

use crate::state::AppState;
use dioxus::prelude::*;

/// Translucent overlay covering the views while `AppState::busy` is set.
#[component]
pub fn LoadingOverlay() -> Element {
    let state = use_context::<AppState>();

    if !(state.busy)() {
        return rsx! {};
    }

    rsx! {
        div {
            style: "position: fixed; inset: 0; display: flex; justify-content: center; align-items: center; background: rgba(255, 255, 255, 0.7); color: #444; font-size: 18px; z-index: 10;",
            "Loading data..."
        }
    }
}
