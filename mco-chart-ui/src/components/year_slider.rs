//! Range slider for choosing the year.

use crate::state::AppState;
use dioxus::prelude::*;
use mco_api::Year;

/// Year slider bounded by `AppState::year_range`, with the selected year as
/// its label.
#[component]
pub fn YearSlider() -> Element {
    let mut state = use_context::<AppState>();
    let range = (state.year_range)();
    let year = (state.year)();
    let first = range.first.get();
    let last = range.last.get();

    let on_input = move |evt: Event<FormData>| {
        if let Ok(value) = evt.value().parse::<Year>() {
            state.year.set(range.clamp(value).get());
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                r#for: "year-slider",
                style: "font-weight: bold;",
                "Year: "
            }
            input {
                id: "year-slider",
                r#type: "range",
                min: "{first}",
                max: "{last}",
                step: "1",
                value: "{year}",
                oninput: on_input,
            }
            span {
                id: "year-label",
                style: "font-variant-numeric: tabular-nums; min-width: 3em;",
                "{year}"
            }
        }
    }
}
