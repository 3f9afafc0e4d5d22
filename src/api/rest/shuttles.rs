use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Json;
use axum::Router;
use serde::Deserialize;
use tracing::info;

use crate::error::AppError;
use crate::models::shuttle_activity::ShuttleActivity;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/shuttles/:id/activity",
            get(get_shuttle_activity).delete(end_service),
        )
        .route("/shuttles/:id/route", post(begin_route))
}

#[derive(Deserialize)]
pub struct BeginRouteRequest {
    pub assignment_id: i32,
}

async fn get_shuttle_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ShuttleActivity>, AppError> {
    let activity = state
        .track(
            "find_shuttle_activity",
            state.repository.find_shuttle_activity(id),
        )
        .await?;
    Ok(Json(activity))
}

async fn begin_route(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<BeginRouteRequest>,
) -> Result<StatusCode, AppError> {
    state
        .track(
            "begin_route",
            state.repository.begin_route(id, payload.assignment_id),
        )
        .await?;

    info!(shuttle_id = id, assignment_id = payload.assignment_id, "route begun");
    Ok(StatusCode::NO_CONTENT)
}

async fn end_service(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state
        .track("end_service", state.repository.end_service(id))
        .await?;

    info!(shuttle_id = id, "service ended");
    Ok(StatusCode::NO_CONTENT)
}
