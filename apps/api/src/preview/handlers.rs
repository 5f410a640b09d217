use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use crate::errors::AppError;
use crate::preview::{render, render_text, Preview};
use crate::state::AppState;

/// GET /api/v1/resumes/current/preview
pub async fn handle_preview(State(state): State<AppState>) -> Result<Json<Preview>, AppError> {
    let doc = state.store.require_current().await?;
    Ok(Json(render(&doc)))
}

/// GET /api/v1/resumes/current/preview.txt
///
/// Plain-text rendition served as a download.
pub async fn handle_preview_text(State(state): State<AppState>) -> Result<Response, AppError> {
    let doc = state.store.require_current().await?;
    let text = render_text(&render(&doc));
    let disposition = format!("attachment; filename=\"resume-{}.txt\"", doc.id);

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        text,
    )
        .into_response())
}
