//! Global Application State
//!
//! Reactive state management using Leptos signals. The selected-handles
//! signal is the single reactive input; everything else is derived from
//! API responses.

use leptos::*;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Selectable handles, sorted, fetched once at startup
    pub handles: RwSignal<Vec<String>>,
    /// Currently selected handles (the dropdown value)
    pub selected: RwSignal<Vec<String>>,
    /// The figure currently drawn in the chart region
    pub figure: RwSignal<Figure>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
}

/// Chart figure from the API
///
/// Mirrors the backend figure type; an empty `series` with no axis labels
/// means "clear the chart region".
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Figure {
    #[serde(default)]
    pub series: Vec<Series>,
    #[serde(default)]
    pub x_label: Option<String>,
    #[serde(default)]
    pub y_label: Option<String>,
    #[serde(default)]
    pub legend_title: Option<String>,
    #[serde(default)]
    pub log_y: bool,
}

/// One chart line
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Series {
    pub label: String,
    pub color: String,
    pub points: Vec<ChartPoint>,
}

/// One (date, value) point; the date arrives as "YYYY-MM-DD"
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ChartPoint {
    pub date: chrono::NaiveDate,
    pub value: i64,
}

impl Figure {
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        handles: create_rw_signal(Vec::new()),
        selected: create_rw_signal(Vec::new()),
        figure: create_rw_signal(Figure::default()),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Toggle a handle in or out of the selection
    pub fn toggle_handle(&self, handle: &str) {
        self.selected.update(|selected| {
            if let Some(pos) = selected.iter().position(|h| h == handle) {
                selected.remove(pos);
            } else {
                selected.push(handle.to_string());
            }
        });
    }

    /// Whether a handle is currently selected
    pub fn is_selected(&self, handle: &str) -> bool {
        self.selected.get().iter().any(|h| h == handle)
    }

    /// Show an error message
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}
