//! Axum route handlers for the resume document API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::document::completeness::{compute_completeness_report, CompletenessReport};
use crate::document::sections::{self, SectionKind};
use crate::errors::AppError;
use crate::models::resume::{Category, PersonalInfo, ResumeDocument};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct BulkDeleteRequest {
    pub ids: Vec<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct BulkDeleteResponse {
    pub removed: usize,
}

#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    pub category: Category,
}

#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    pub summary: String,
}

#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub index: usize,
}

#[derive(Debug, Deserialize)]
pub struct NestedItemRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct AddItemResponse {
    pub id: Uuid,
    pub resume: ResumeDocument,
}

// ────────────────────────────────────────────────────────────────────────────
// Document lifecycle
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/new
pub async fn handle_create_new(State(state): State<AppState>) -> Json<ResumeDocument> {
    let doc = state.store.create_new().await;
    state.wizard.write().await.reset();
    Json(doc)
}

/// GET /api/v1/resumes/current
pub async fn handle_get_current(
    State(state): State<AppState>,
) -> Result<Json<ResumeDocument>, AppError> {
    Ok(Json(state.store.require_current().await?))
}

/// DELETE /api/v1/resumes/current
///
/// Closes the current document without touching the saved collection.
pub async fn handle_close_current(State(state): State<AppState>) -> StatusCode {
    state.store.clear_current().await;
    state.wizard.write().await.reset();
    StatusCode::NO_CONTENT
}

/// POST /api/v1/resumes/current/save
pub async fn handle_save_current(
    State(state): State<AppState>,
) -> Result<Json<ResumeDocument>, AppError> {
    Ok(Json(state.store.save_current().await?))
}

/// GET /api/v1/resumes?q=
pub async fn handle_list_saved(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<ResumeDocument>> {
    Json(state.store.search(&params.q).await)
}

/// POST /api/v1/resumes/bulk-delete
pub async fn handle_bulk_delete(
    State(state): State<AppState>,
    Json(req): Json<BulkDeleteRequest>,
) -> Json<BulkDeleteResponse> {
    let removed = state.store.bulk_delete(&req.ids).await;
    reset_wizard_if_closed(&state).await;
    Json(BulkDeleteResponse { removed })
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_saved(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeDocument>, AppError> {
    Ok(Json(state.store.get_saved(id).await?))
}

/// POST /api/v1/resumes/:id/open
pub async fn handle_open(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeDocument>, AppError> {
    let doc = state.store.open(id).await?;
    state.wizard.write().await.reset();
    Ok(Json(doc))
}

/// POST /api/v1/resumes/:id/duplicate
pub async fn handle_duplicate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeDocument>, AppError> {
    let doc = state.store.duplicate(id).await?;
    state.wizard.write().await.reset();
    Ok(Json(doc))
}

/// DELETE /api/v1/resumes/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.store.delete(id).await?;
    reset_wizard_if_closed(&state).await;
    Ok(StatusCode::NO_CONTENT)
}

async fn reset_wizard_if_closed(state: &AppState) {
    if state.store.current().await.is_none() {
        state.wizard.write().await.reset();
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Field editing on the current document
// ────────────────────────────────────────────────────────────────────────────

/// PUT /api/v1/resumes/current/category
pub async fn handle_set_category(
    State(state): State<AppState>,
    Json(req): Json<CategoryRequest>,
) -> Result<Json<ResumeDocument>, AppError> {
    let (_, doc) = state
        .store
        .update_current(|doc| {
            doc.category = Some(req.category);
            Ok(())
        })
        .await?;
    Ok(Json(doc))
}

/// PUT /api/v1/resumes/current/personal-info
pub async fn handle_set_personal_info(
    State(state): State<AppState>,
    Json(info): Json<PersonalInfo>,
) -> Result<Json<ResumeDocument>, AppError> {
    let (_, doc) = state
        .store
        .update_current(|doc| {
            doc.personal_info = info;
            Ok(())
        })
        .await?;
    Ok(Json(doc))
}

/// PUT /api/v1/resumes/current/summary
pub async fn handle_set_summary(
    State(state): State<AppState>,
    Json(req): Json<SummaryRequest>,
) -> Result<Json<ResumeDocument>, AppError> {
    let (_, doc) = state
        .store
        .update_current(|doc| {
            doc.summary = req.summary;
            Ok(())
        })
        .await?;
    Ok(Json(doc))
}

/// POST /api/v1/resumes/current/sections/:section
pub async fn handle_add_item(
    State(state): State<AppState>,
    Path(kind): Path<SectionKind>,
    Json(draft): Json<Value>,
) -> Result<Json<AddItemResponse>, AppError> {
    let (id, resume) = state
        .store
        .update_current(|doc| sections::add_item(doc, kind, draft))
        .await?;
    Ok(Json(AddItemResponse { id, resume }))
}

/// PUT /api/v1/resumes/current/sections/:section/:id
pub async fn handle_update_item(
    State(state): State<AppState>,
    Path((kind, id)): Path<(SectionKind, Uuid)>,
    Json(draft): Json<Value>,
) -> Result<Json<ResumeDocument>, AppError> {
    let (_, doc) = state
        .store
        .update_current(|doc| sections::update_item(doc, kind, id, draft))
        .await?;
    Ok(Json(doc))
}

/// DELETE /api/v1/resumes/current/sections/:section/:id
pub async fn handle_remove_item(
    State(state): State<AppState>,
    Path((kind, id)): Path<(SectionKind, Uuid)>,
) -> Result<Json<ResumeDocument>, AppError> {
    let (_, doc) = state
        .store
        .update_current(|doc| sections::remove_item(doc, kind, id))
        .await?;
    Ok(Json(doc))
}

/// POST /api/v1/resumes/current/sections/:section/:id/move
pub async fn handle_move_item(
    State(state): State<AppState>,
    Path((kind, id)): Path<(SectionKind, Uuid)>,
    Json(req): Json<MoveRequest>,
) -> Result<Json<ResumeDocument>, AppError> {
    let (_, doc) = state
        .store
        .update_current(|doc| sections::move_item(doc, kind, id, req.index))
        .await?;
    Ok(Json(doc))
}

/// POST /api/v1/resumes/current/sections/:section/:id/items
///
/// Adds a bullet, skill or technology depending on the section.
pub async fn handle_add_nested(
    State(state): State<AppState>,
    Path((kind, id)): Path<(SectionKind, Uuid)>,
    Json(req): Json<NestedItemRequest>,
) -> Result<Json<ResumeDocument>, AppError> {
    let (_, doc) = state
        .store
        .update_current(|doc| sections::add_nested(doc, kind, id, &req.text))
        .await?;
    Ok(Json(doc))
}

/// DELETE /api/v1/resumes/current/sections/:section/:id/items/:index
pub async fn handle_remove_nested(
    State(state): State<AppState>,
    Path((kind, id, index)): Path<(SectionKind, Uuid, usize)>,
) -> Result<Json<ResumeDocument>, AppError> {
    let (_, doc) = state
        .store
        .update_current(|doc| sections::remove_nested(doc, kind, id, index))
        .await?;
    Ok(Json(doc))
}

/// GET /api/v1/resumes/current/completeness
pub async fn handle_completeness(
    State(state): State<AppState>,
) -> Result<Json<CompletenessReport>, AppError> {
    let doc = state.store.require_current().await?;
    Ok(Json(compute_completeness_report(&doc)))
}
