//! Chart Route
//!
//! The single reactive edge of the dashboard, exposed over HTTP:
//! the UI posts its current selection whenever the dropdown changes and
//! gets back the figure to draw.
//!
//! - POST /api/v1/chart

use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::api::dto::ChartRequest;
use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::chart::render;

/// POST /api/v1/chart
///
/// Render the selected handles into a chart figure. An empty selection
/// returns the empty figure (chart region cleared); handles that do not
/// exist in the table filter to nothing rather than erroring.
///
/// A malformed body fails the request gracefully; message detail follows
/// the configured debug/production mode.
pub async fn render_chart(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChartRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            return ApiError::Validation(rejection.body_text())
                .into_response_with_mode(state.config.debug);
        }
    };

    let figure = render(&state.table, &req.selected);

    tracing::debug!(
        selected = req.selected.len(),
        series = figure.series.len(),
        points = figure.point_count(),
        "Chart rendered"
    );

    Json(figure).into_response()
}
