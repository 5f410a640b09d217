//! Axum route handlers for the job tracker.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::{ApplicationStatus, JobApplication};
use crate::state::AppState;
use crate::tracker::board::{ApplicationUpdate, BoardColumn, NewApplication, TrackerStats};

#[derive(Debug, Serialize)]
pub struct BoardResponse {
    pub columns: Vec<BoardColumn>,
    pub stats: TrackerStats,
}

#[derive(Debug, Deserialize)]
pub struct MoveApplicationRequest {
    pub status: ApplicationStatus,
}

/// GET /api/v1/jobs
pub async fn handle_board(State(state): State<AppState>) -> Json<BoardResponse> {
    Json(BoardResponse {
        columns: state.tracker.board().await,
        stats: state.tracker.stats().await,
    })
}

/// POST /api/v1/jobs
pub async fn handle_add(
    State(state): State<AppState>,
    Json(request): Json<NewApplication>,
) -> Result<(StatusCode, Json<JobApplication>), AppError> {
    let application = state.tracker.add(request).await?;
    Ok((StatusCode::CREATED, Json(application)))
}

/// GET /api/v1/jobs/stats
pub async fn handle_stats(State(state): State<AppState>) -> Json<TrackerStats> {
    Json(state.tracker.stats().await)
}

/// PATCH /api/v1/jobs/:id
pub async fn handle_update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ApplicationUpdate>,
) -> Result<Json<JobApplication>, AppError> {
    Ok(Json(state.tracker.update(id, request).await?))
}

/// POST /api/v1/jobs/:id/move
pub async fn handle_move(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<MoveApplicationRequest>,
) -> Result<Json<JobApplication>, AppError> {
    Ok(Json(state.tracker.move_to(id, request.status).await?))
}

/// DELETE /api/v1/jobs/:id
pub async fn handle_remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.tracker.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
