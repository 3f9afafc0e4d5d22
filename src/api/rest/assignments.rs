use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::Json;
use axum::Router;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::AppError;
use crate::models::assignment::Assignment;
use crate::models::assignment_stop::AssignmentStop;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/assignments/:id", get(get_assignment))
        .route("/assignments/:id/stops", get(get_assignment_stops))
        .route(
            "/drivers/:driver_id/shuttles/:shuttle_id/assignments",
            get(list_scheduled_assignments),
        )
}

#[derive(Deserialize)]
pub struct ScheduleQuery {
    pub date: NaiveDate,
}

async fn get_assignment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Assignment>, AppError> {
    let assignment = state
        .track("find_assignment", state.repository.find_assignment(id))
        .await?;
    Ok(Json(assignment))
}

async fn get_assignment_stops(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<AssignmentStop>>, AppError> {
    let stops = state
        .track(
            "find_assignment_stops",
            state.repository.find_assignment_stops(id),
        )
        .await?;
    Ok(Json(stops))
}

async fn list_scheduled_assignments(
    State(state): State<Arc<AppState>>,
    Path((driver_id, shuttle_id)): Path<(i32, i32)>,
    Query(query): Query<ScheduleQuery>,
) -> Result<Json<Vec<Assignment>>, AppError> {
    let assignments = state
        .track(
            "find_assignments",
            state
                .repository
                .find_assignments(driver_id, shuttle_id, query.date),
        )
        .await?;
    Ok(Json(assignments))
}
