//! The generate trigger.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct GenerateButtonProps {
    /// Invoked on click; never while a generation is in flight
    pub on_generate: EventHandler<()>,
}

/// Button that starts a generation, disabled while `AppState::busy` is set.
#[component]
pub fn GenerateButton(props: GenerateButtonProps) -> Element {
    let state = use_context::<AppState>();
    let busy = (state.busy)();
    let label = if busy { "Loading..." } else { "Generate" };

    rsx! {
        button {
            id: "generate-button",
            disabled: busy,
            style: "padding: 6px 16px; font-weight: bold; cursor: pointer;",
            onclick: move |_| {
                if !*state.busy.peek() {
                    props.on_generate.call(());
                }
            },
            "{label}"
        }
    }
}
