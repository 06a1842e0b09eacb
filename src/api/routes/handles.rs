//! Handle Routes
//!
//! Dropdown option list for the account picker.
//!
//! - GET /api/v1/handles

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::HandlesResponse;
use crate::api::state::AppState;

/// GET /api/v1/handles
///
/// Returns the sorted distinct handles in the table (the selection
/// domain, computed once at startup) and the default selection.
pub async fn list_handles(State(state): State<Arc<AppState>>) -> Json<HandlesResponse> {
    Json(HandlesResponse {
        handles: state.table.handles().to_vec(),
        default_selection: state.default_selection(),
    })
}
