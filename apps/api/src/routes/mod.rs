pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::editor::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Document
        .route("/api/v1/resume", get(handlers::handle_get_resume))
        .route(
            "/api/v1/resume/sections",
            post(handlers::handle_add_section),
        )
        .route(
            "/api/v1/resume/sections/:id",
            put(handlers::handle_update_section)
                .patch(handlers::handle_patch_section)
                .delete(handlers::handle_delete_section),
        )
        .route(
            "/api/v1/resume/sections/:id/suggestion",
            post(handlers::handle_apply_suggestion),
        )
        .route("/api/v1/resume/reorder", post(handlers::handle_reorder))
        // Rendering
        .route("/api/v1/resume/preview", get(handlers::handle_preview))
        .route("/api/v1/resume/export", get(handlers::handle_export))
        // Editor settings and lookups
        .route(
            "/api/v1/theme",
            get(handlers::handle_get_theme).put(handlers::handle_put_theme),
        )
        .route(
            "/api/v1/suggestions/:type",
            get(handlers::handle_get_suggestion),
        )
        .route(
            "/api/v1/section-kinds",
            get(handlers::handle_section_kinds),
        )
        .with_state(state)
}
