pub mod health;

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::refine::handlers as refine;
use crate::session::handlers as sessions;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Session lifecycle
        .route("/api/v1/sessions", post(sessions::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(sessions::handle_get_session).delete(sessions::handle_delete_session),
        )
        // Section Collector
        .route(
            "/api/v1/sessions/:id/record",
            put(sessions::handle_update_record),
        )
        .route(
            "/api/v1/sessions/:id/counts",
            patch(sessions::handle_update_counts),
        )
        .route(
            "/api/v1/sessions/:id/settings",
            patch(sessions::handle_update_settings),
        )
        .route("/api/v1/sessions/:id/text", put(sessions::handle_set_text))
        // Document extraction
        .route(
            "/api/v1/sessions/:id/extract",
            post(sessions::handle_extract),
        )
        // Refine pipeline
        .route(
            "/api/v1/sessions/:id/assemble",
            post(refine::handle_assemble),
        )
        .route("/api/v1/sessions/:id/refine", post(refine::handle_refine))
        .route(
            "/api/v1/sessions/:id/download",
            get(refine::handle_download),
        )
        .with_state(state)
}
