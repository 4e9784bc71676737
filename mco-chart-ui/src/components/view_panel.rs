//! Titled panel holding a plotting-library view.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ViewPanelProps {
    /// DOM id the plotting library draws into
    pub id: String,
    pub title: String,
    /// Small print under the title (units, notes on gaps)
    #[props(default = String::new())]
    pub caption: String,
    /// `<canvas>` for Chart.js, otherwise a `<div>` for Plotly
    #[props(default = false)]
    pub canvas: bool,
    #[props(default = 400)]
    pub min_height: u32,
}

#[component]
pub fn ViewPanel(props: ViewPanelProps) -> Element {
    let height = format!("min-height: {}px; width: 100%;", props.min_height);

    rsx! {
        section {
            style: "margin: 16px 0;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
            }
            if !props.caption.is_empty() {
                p {
                    style: "margin: 0 0 8px 0; font-size: 12px; color: #666;",
                    "{props.caption}"
                }
            }
            if props.canvas {
                canvas { id: "{props.id}", style: "{height}" }
            } else {
                div { id: "{props.id}", style: "{height}" }
            }
        }
    }
}
