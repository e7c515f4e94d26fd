//! Interactive results dashboard using ratatui.
//!
//! Shows a finished audit: score and maturity, the nine category gauges
//! against their goals, the scrollable narrative and the numbered
//! initiatives.

mod app;
mod events;
pub mod theme;
mod ui;
mod widgets;

pub use app::{Pane, ResultsApp};
pub use events::Event;
pub use theme::{colors, toggle_theme, ColorScheme, Styles, Theme};
pub use ui::{render, run_results};
