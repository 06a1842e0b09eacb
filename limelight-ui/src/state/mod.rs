//! State Management
//!
//! Global reactive state for the dashboard.

pub mod global;

pub use global::{provide_global_state, ChartPoint, Figure, GlobalState, Series};
