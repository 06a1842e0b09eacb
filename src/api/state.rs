//! Application State
//!
//! Shared state accessible by all API handlers.
//!
//! The engagement table is built once at startup and never mutated, so it
//! is shared behind a plain `Arc` with no locking: every handler only ever
//! filters a read-only view of it.

use crate::aggregate::EngagementTable;
use crate::config::ApiConfig;
use std::sync::Arc;
use std::time::Instant;

/// Handles pre-selected in the dropdown when the page first loads
pub const DEFAULT_SELECTION: [&str; 3] = ["taylorswift13", "cristiano", "jtimberlake"];

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Immutable aggregated engagement table
    pub table: Arc<EngagementTable>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state from an already-built table
    ///
    /// The table is passed in explicitly rather than loaded here, so tests
    /// can hand in fixture tables.
    pub fn new(table: Arc<EngagementTable>, config: ApiConfig) -> Self {
        Self {
            table,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// The default dropdown selection, restricted to handles that exist
    /// in the table
    pub fn default_selection(&self) -> Vec<String> {
        DEFAULT_SELECTION
            .iter()
            .filter(|h| self.table.contains_handle(h))
            .map(|h| h.to_string())
            .collect()
    }
}
