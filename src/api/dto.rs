//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

// ============================================
// CHART DTOs
// ============================================

/// Chart render request: the current dropdown selection
#[derive(Debug, Deserialize)]
pub struct ChartRequest {
    /// Selected handles; empty clears the chart
    #[serde(default)]
    pub selected: Vec<String>,
}

// The chart response body is `chart::Figure` itself, serialized directly.

// ============================================
// HANDLE DTOs
// ============================================

/// Dropdown option list response
#[derive(Debug, Serialize, Deserialize)]
pub struct HandlesResponse {
    /// Sorted distinct handles present in the table
    pub handles: Vec<String>,
    /// Handles pre-selected when the page loads
    pub default_selection: Vec<String>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: "healthy"
    pub status: String,
    /// Number of aggregated rows held in memory
    pub rows: usize,
    /// Number of distinct handles
    pub handles: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Crate version
    pub version: String,
}
