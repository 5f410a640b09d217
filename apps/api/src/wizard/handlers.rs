//! Axum route handlers for the wizard.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::resume::Category;
use crate::state::AppState;
use crate::wizard::{Step, WizardView};

#[derive(Debug, Deserialize)]
pub struct GoToRequest {
    pub step: Step,
}

#[derive(Debug, Serialize)]
pub struct CategoryOption {
    pub id: &'static str,
    pub title: &'static str,
}

/// GET /api/v1/wizard/categories
///
/// Options for the category picker. Does not require an open document.
pub async fn handle_categories() -> Json<Vec<CategoryOption>> {
    Json(
        Category::ALL
            .iter()
            .map(|c| CategoryOption {
                id: c.as_str(),
                title: c.title(),
            })
            .collect(),
    )
}

/// GET /api/v1/wizard
pub async fn handle_get_wizard(State(state): State<AppState>) -> Result<Json<WizardView>, AppError> {
    let doc = state.store.require_current().await?;
    let session = state.wizard.read().await;
    Ok(Json(session.view(&doc)))
}

/// POST /api/v1/wizard/next
///
/// Validates the current step against the current document before advancing.
/// Field problems come back as a 400 with `details`.
pub async fn handle_next(State(state): State<AppState>) -> Result<Json<WizardView>, AppError> {
    let doc = state.store.require_current().await?;
    let mut session = state.wizard.write().await;
    session.next(&doc)?;
    Ok(Json(session.view(&doc)))
}

/// POST /api/v1/wizard/back
pub async fn handle_back(State(state): State<AppState>) -> Result<Json<WizardView>, AppError> {
    let doc = state.store.require_current().await?;
    let mut session = state.wizard.write().await;
    session.back(&doc);
    Ok(Json(session.view(&doc)))
}

/// POST /api/v1/wizard/goto
pub async fn handle_go_to(
    State(state): State<AppState>,
    Json(req): Json<GoToRequest>,
) -> Result<Json<WizardView>, AppError> {
    let doc = state.store.require_current().await?;
    let mut session = state.wizard.write().await;
    session.go_to(&doc, req.step)?;
    Ok(Json(session.view(&doc)))
}
