//! Route definitions for the preview service.
//!
//! ## Routes
//!
//! - `GET /health` - Health check (JSON)
//! - `GET /robots.txt` - Crawler instructions
//! - anything else - Post preview (`GET /profile/{handle}/post/{rkey}`)
//!
//! The preview handler is the router fallback rather than a templated route
//! so that it sees every method and path shape and can answer 405/400 itself.

mod health;
mod preview;

use axum::Router;
use axum::response::IntoResponse;
use axum::routing::get;

use crate::state::AppState;

pub use preview::PostPath;

/// Build the complete preview service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/robots.txt", get(robots_txt))
        .fallback(preview::preview_handler)
        .with_state(state)
}

/// Serve robots.txt allowing all crawlers.
///
/// Link-preview crawlers must be able to fetch every post page.
async fn robots_txt() -> impl IntoResponse {
    (
        [("content-type", "text/plain; charset=utf-8")],
        "User-agent: *\nAllow: /\n",
    )
}
