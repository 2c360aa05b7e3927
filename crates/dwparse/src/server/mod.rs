use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::server::endpoints::{status, transcript};
use crate::types::AppState;

mod endpoints;
mod types;

/// Creates a router that can be used by `axum`.
///
/// # Parameters
/// - `app_state`: The app server state.
///
/// # Returns
/// The router.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    // Transcript parsing and cache management endpoints
    let transcript_router = Router::new()
        .route("/transcript", post(transcript::post_parse_pdf))
        .route("/transcript/text", post(transcript::post_parse_text))
        .route(
            "/transcript/cache_stats",
            get(transcript::get_cache_stats),
        )
        .route(
            "/transcript/invalidate_cache",
            post(transcript::invalidate_cache),
        );

    Router::new()
        .route("/health", get(status::get_health))
        .merge(transcript_router)
        .with_state(app_state)
}
