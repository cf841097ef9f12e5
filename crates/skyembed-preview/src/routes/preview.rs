//! Post preview handler.
//!
//! Runs for every path that is not a fixed route. A request moves strictly
//! forward through method check, path parse, handle and record key
//! validation, profile resolution, post fetch and rendering; the first
//! failure ends it with a plain-text error.

use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

use crate::error::PreviewError;
use crate::ident::{is_valid_handle, is_valid_record_key};
use crate::record::{POST_COLLECTION, PROFILE_COLLECTION, PROFILE_RKEY, PostRecord, ProfileRecord};
use crate::render::{self, PostContext};
use crate::state::AppState;

/// The `{handle}` and `{rkey}` segments of `/profile/{handle}/post/{rkey}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostPath<'a> {
    pub handle: &'a str,
    pub rkey: &'a str,
}

impl<'a> PostPath<'a> {
    /// Split a request path into exactly `profile/{handle}/post/{rkey}`.
    ///
    /// Segments are only located here; their syntax is checked by [`validate`].
    ///
    /// [`validate`]: PostPath::validate
    pub fn parse(path: &'a str) -> Result<Self, PreviewError> {
        let path = path.strip_prefix('/').unwrap_or(path);
        let segments: Vec<&str> = path.split('/').collect();

        match segments.as_slice() {
            ["profile", handle, "post", rkey] if !handle.is_empty() && !rkey.is_empty() => {
                Ok(Self {
                    handle: *handle,
                    rkey: *rkey,
                })
            }
            _ => Err(PreviewError::InvalidUrl),
        }
    }

    /// Check handle syntax, then record key syntax.
    pub fn validate(&self) -> Result<(), PreviewError> {
        if !is_valid_handle(self.handle) {
            return Err(PreviewError::InvalidHandle);
        }
        if !is_valid_record_key(self.rkey) {
            return Err(PreviewError::InvalidRecordKey);
        }
        Ok(())
    }
}

/// Handle a request for a post preview.
pub async fn preview_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Result<Response, PreviewError> {
    if method != Method::GET {
        return Err(PreviewError::MethodNotAllowed);
    }

    let path = PostPath::parse(uri.path())?;
    path.validate()?;

    tracing::debug!(handle = %path.handle, rkey = %path.rkey, "resolving post");

    // The DID and the profile are independent; fetch them together and stop
    // at the first one that comes back empty.
    let (did, profile) = tokio::try_join!(
        async {
            state
                .xrpc
                .resolve_handle(path.handle)
                .await
                .ok_or(PreviewError::InvalidProfile)
        },
        async {
            state
                .xrpc
                .get_record::<ProfileRecord>(path.handle, PROFILE_COLLECTION, PROFILE_RKEY)
                .await
                .ok_or(PreviewError::InvalidProfile)
        },
    )?;

    let post: PostRecord = state
        .xrpc
        .get_record(path.handle, POST_COLLECTION, path.rkey)
        .await
        .ok_or(PreviewError::InvalidPost)?;

    let canonical_url = format!(
        "{}/profile/{}/post/{}",
        state.config.app_url, path.handle, path.rkey
    );

    let tags = render::post_meta_tags(
        &PostContext {
            canonical_url: &canonical_url,
            handle: path.handle,
            did: &did,
            profile: &profile,
            post: &post,
        },
        &state.config.image_cdn,
    );
    let html = render::render_page(&tags, &canonical_url).into_string();

    tracing::debug!(
        handle = %path.handle,
        rkey = %path.rkey,
        did = %did,
        images = post.images().len(),
        "rendered preview"
    );

    Ok(build_response(html))
}

/// Build an HTTP response with HTML content and security headers.
fn build_response(html: String) -> Response {
    let mut headers = HeaderMap::new();

    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=UTF-8"),
    );
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(render::page::CSP_HEADER),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));

    (StatusCode::OK, headers, html).into_response()
}
