//! Reusable Dioxus RSX components for the CO viewer.

mod generate_button;
mod loading_overlay;
mod status_display;
mod view_panel;
mod year_slider;

pub use generate_button::GenerateButton;
pub use loading_overlay::LoadingOverlay;
pub use status_display::StatusDisplay;
pub use view_panel::ViewPanel;
pub use year_slider::YearSlider;
