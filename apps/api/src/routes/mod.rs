pub mod health;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::ats::handlers as ats;
use crate::document::handlers as document;
use crate::generation::handlers as generation;
use crate::preview::handlers as preview;
use crate::state::AppState;
use crate::tracker::handlers as tracker;
use crate::wizard::handlers as wizard;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume lifecycle
        .route("/api/v1/resumes", get(document::handle_list_saved))
        .route("/api/v1/resumes/new", post(document::handle_create_new))
        .route(
            "/api/v1/resumes/bulk-delete",
            post(document::handle_bulk_delete),
        )
        .route(
            "/api/v1/resumes/current",
            get(document::handle_get_current).delete(document::handle_close_current),
        )
        .route(
            "/api/v1/resumes/current/save",
            post(document::handle_save_current),
        )
        .route(
            "/api/v1/resumes/:id",
            get(document::handle_get_saved).delete(document::handle_delete),
        )
        .route("/api/v1/resumes/:id/open", post(document::handle_open))
        .route(
            "/api/v1/resumes/:id/duplicate",
            post(document::handle_duplicate),
        )
        // Current-document editing
        .route(
            "/api/v1/resumes/current/category",
            put(document::handle_set_category),
        )
        .route(
            "/api/v1/resumes/current/personal-info",
            put(document::handle_set_personal_info),
        )
        .route(
            "/api/v1/resumes/current/summary",
            put(document::handle_set_summary),
        )
        .route(
            "/api/v1/resumes/current/sections/:section",
            post(document::handle_add_item),
        )
        .route(
            "/api/v1/resumes/current/sections/:section/:id",
            put(document::handle_update_item).delete(document::handle_remove_item),
        )
        .route(
            "/api/v1/resumes/current/sections/:section/:id/move",
            post(document::handle_move_item),
        )
        .route(
            "/api/v1/resumes/current/sections/:section/:id/items",
            post(document::handle_add_nested),
        )
        .route(
            "/api/v1/resumes/current/sections/:section/:id/items/:index",
            delete(document::handle_remove_nested),
        )
        .route(
            "/api/v1/resumes/current/completeness",
            get(document::handle_completeness),
        )
        // Preview
        .route(
            "/api/v1/resumes/current/preview",
            get(preview::handle_preview),
        )
        .route(
            "/api/v1/resumes/current/preview.txt",
            get(preview::handle_preview_text),
        )
        // Wizard
        .route("/api/v1/wizard", get(wizard::handle_get_wizard))
        .route("/api/v1/wizard/categories", get(wizard::handle_categories))
        .route("/api/v1/wizard/next", post(wizard::handle_next))
        .route("/api/v1/wizard/back", post(wizard::handle_back))
        .route("/api/v1/wizard/goto", post(wizard::handle_go_to))
        // Generation
        .route(
            "/api/v1/generate/summary",
            post(generation::handle_generate_summary),
        )
        .route(
            "/api/v1/generate/cover-letter",
            post(generation::handle_generate_cover_letter),
        )
        // ATS
        .route("/api/v1/ats/analyze", post(ats::handle_analyze))
        .route("/api/v1/ats/keywords", post(ats::handle_keywords))
        // Job tracker
        .route(
            "/api/v1/jobs",
            get(tracker::handle_board).post(tracker::handle_add),
        )
        .route("/api/v1/jobs/stats", get(tracker::handle_stats))
        .route(
            "/api/v1/jobs/:id",
            patch(tracker::handle_update).delete(tracker::handle_remove),
        )
        .route("/api/v1/jobs/:id/move", post(tracker::handle_move))
        .with_state(state)
}
