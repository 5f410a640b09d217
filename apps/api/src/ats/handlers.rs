//! Axum route handlers for the ATS analysis API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::ats::keywords::{extract_keywords, KeywordEntry};
use crate::ats::scoring::AtsReport;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub job_description: String,
    /// Analyze a saved resume instead of the current one.
    #[serde(default)]
    pub resume_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub resume_id: Uuid,
    pub report: AtsReport,
}

#[derive(Debug, Deserialize)]
pub struct KeywordsRequest {
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct KeywordsResponse {
    pub keywords: Vec<KeywordEntry>,
}

fn require_description(text: &str) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ats/analyze
///
/// Scores the current resume (or a saved one, by id) against a job description.
/// Waits `ANALYSIS_DELAY_MS` before answering.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    require_description(&request.job_description)?;

    let doc = match request.resume_id {
        Some(id) => state.store.get_saved(id).await?,
        None => state.store.require_current().await?,
    };

    let keywords = extract_keywords(&request.job_description);
    tokio::time::sleep(state.config.analysis_delay).await;

    let report = state.ats_scorer.analyze(&doc, &keywords).await?;
    info!(
        "ATS analysis for resume {}: overall {} ({} of {} keywords matched)",
        doc.id,
        report.overall_score,
        report.matched_keywords.len(),
        keywords.len()
    );

    Ok(Json(AnalyzeResponse {
        resume_id: doc.id,
        report,
    }))
}

/// POST /api/v1/ats/keywords
///
/// Returns the weighted keyword inventory without scoring anything.
pub async fn handle_keywords(
    Json(request): Json<KeywordsRequest>,
) -> Result<Json<KeywordsResponse>, AppError> {
    require_description(&request.job_description)?;
    Ok(Json(KeywordsResponse {
        keywords: extract_keywords(&request.job_description),
    }))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::Instant;

    use super::*;
    use crate::config::Config;

    fn state() -> AppState {
        AppState::new(Config {
            seed_sample_jobs: false,
            ..Config::default()
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_analyze_waits_for_analysis_delay() {
        let state = state();
        let doc = state.store.create_new().await;

        let started = Instant::now();
        let Json(response) = handle_analyze(
            State(state),
            Json(AnalyzeRequest {
                job_description: "Data Engineer\nRequirements: Spark".to_string(),
                resume_id: None,
            }),
        )
        .await
        .unwrap();

        assert!(started.elapsed() >= Duration::from_millis(3000));
        assert_eq!(response.resume_id, doc.id);
        assert_eq!(response.report.missing_keywords, vec!["Data", "Engineer", "Spark"]);
    }

    #[tokio::test]
    async fn test_analyze_unknown_saved_resume_is_not_found() {
        let err = handle_analyze(
            State(state()),
            Json(AnalyzeRequest {
                job_description: "Rust".to_string(),
                resume_id: Some(Uuid::new_v4()),
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_keywords_rejects_blank_description() {
        let err = handle_keywords(Json(KeywordsRequest {
            job_description: "\n ".to_string(),
        }))
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
