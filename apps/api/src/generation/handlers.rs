//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::cover_letter::{generate_cover_letter, CoverLetter, CoverLetterRequest};
use crate::generation::summary::generate_summary;
use crate::models::resume::ResumeDocument;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct SummaryGenerateRequest {
    /// Write the generated text into the current document's summary.
    #[serde(default)]
    pub apply: bool,
}

#[derive(Debug, Serialize)]
pub struct SummaryGenerateResponse {
    pub summary: String,
    pub applied: bool,
}

#[derive(Debug, Deserialize)]
pub struct CoverLetterGenerateRequest {
    #[serde(flatten)]
    pub letter: CoverLetterRequest,
    /// Personalize from a saved resume. Defaults to the current document, if any.
    #[serde(default)]
    pub resume_id: Option<Uuid>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/generate/summary
///
/// Builds a summary for the current document from its category template.
/// With `apply: true` the summary is also stored on that document; if another
/// document was opened during generation the request fails with 404.
pub async fn handle_generate_summary(
    State(state): State<AppState>,
    Json(request): Json<SummaryGenerateRequest>,
) -> Result<Json<SummaryGenerateResponse>, AppError> {
    let doc = state.store.require_current().await?;

    tokio::time::sleep(state.config.generation_delay).await;
    let summary = generate_summary(&doc);

    if request.apply {
        let text = summary.clone();
        state
            .store
            .update_open(doc.id, move |d| {
                d.summary = text;
                Ok(())
            })
            .await?;
    }

    info!(
        "Generated summary for resume {} ({} chars, applied={})",
        doc.id,
        summary.len(),
        request.apply
    );

    Ok(Json(SummaryGenerateResponse {
        summary,
        applied: request.apply,
    }))
}

/// POST /api/v1/generate/cover-letter
///
/// `job_title` and `company_name` are required.
pub async fn handle_generate_cover_letter(
    State(state): State<AppState>,
    Json(request): Json<CoverLetterGenerateRequest>,
) -> Result<Json<CoverLetter>, AppError> {
    let resume: Option<ResumeDocument> = match request.resume_id {
        Some(id) => Some(state.store.get_saved(id).await?),
        None => state.store.current().await,
    };

    // Validate before waiting so bad input fails fast.
    let letter = generate_cover_letter(&request.letter, resume.as_ref())?;
    tokio::time::sleep(state.config.generation_delay).await;

    info!(
        "Generated {:?} cover letter for {} at {}",
        letter.tone, request.letter.job_title, request.letter.company_name
    );

    Ok(Json(letter))
}
