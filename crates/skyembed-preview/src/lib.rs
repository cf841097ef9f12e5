//! Skyembed Preview - link unfurling for Bluesky posts.
//!
//! Chat apps and crawlers that do not run JavaScript see a Bluesky post link
//! as a blank page. This service answers the same path with a tiny HTML
//! document carrying Open Graph / Twitter Card tags for the post, then sends
//! the visitor on to the real post with a `meta refresh`.
//!
//! # Architecture
//!
//! - **Ident**: Handle and record key syntax checks
//! - **Xrpc**: `resolveHandle` and `getRecord` against one fixed lookup service
//! - **Render**: Metadata tags and the redirect page, via maud
//! - **Routes**: The request pipeline and its mapping to HTTP status codes
//!
//! # URL Pattern
//!
//! ```text
//! GET /profile/{handle}/post/{rkey}
//! ```
//!
//! # Security
//!
//! - All dynamic content is HTML-escaped by maud
//! - Handles and record keys are validated before any upstream call
//! - Strict Content-Security-Policy: no JavaScript execution

pub mod config;
pub mod error;
pub mod ident;
pub mod record;
pub mod render;
pub mod routes;
pub mod state;
pub mod xrpc;

#[cfg(test)]
mod test_support;

pub use config::Config;
pub use error::PreviewError;
pub use routes::router;
pub use state::AppState;
