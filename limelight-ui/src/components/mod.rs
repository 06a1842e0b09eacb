//! UI Components
//!
//! Leptos components for the dashboard.

pub mod chart;
pub mod picker;

pub use chart::Chart;
pub use picker::HandlePicker;
