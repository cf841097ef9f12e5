//! Error types for the preview service.
//!
//! Every failure is terminal for its request and is returned as a short
//! plain-text body. No partial HTML is ever sent.

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

/// Preview service error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreviewError {
    /// Any method other than GET.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The path is not `/profile/{handle}/post/{rkey}`.
    #[error("Invalid URL")]
    InvalidUrl,

    /// The handle segment fails handle syntax.
    #[error("Invalid handle")]
    InvalidHandle,

    /// The record key segment fails record key syntax or is `.`/`..`.
    #[error("Invalid record key")]
    InvalidRecordKey,

    /// The handle did not resolve or the actor has no profile record.
    #[error("Invalid profile")]
    InvalidProfile,

    /// The post record could not be fetched.
    #[error("Invalid post")]
    InvalidPost,
}

impl PreviewError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::InvalidUrl | Self::InvalidProfile | Self::InvalidPost => StatusCode::BAD_REQUEST,
            Self::InvalidHandle | Self::InvalidRecordKey => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for PreviewError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(status = %status, reason = %self, "rejecting request");

        (
            status,
            [(
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/plain; charset=utf-8"),
            )],
            self.to_string(),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        assert_eq!(PreviewError::MethodNotAllowed.to_string(), "Method not allowed");
        assert_eq!(PreviewError::InvalidUrl.to_string(), "Invalid URL");
        assert_eq!(PreviewError::InvalidHandle.to_string(), "Invalid handle");
        assert_eq!(PreviewError::InvalidRecordKey.to_string(), "Invalid record key");
        assert_eq!(PreviewError::InvalidProfile.to_string(), "Invalid profile");
        assert_eq!(PreviewError::InvalidPost.to_string(), "Invalid post");
    }

    #[test]
    fn error_status_codes() {
        assert_eq!(PreviewError::MethodNotAllowed.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(PreviewError::InvalidUrl.status(), StatusCode::BAD_REQUEST);
        assert_eq!(PreviewError::InvalidHandle.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(PreviewError::InvalidRecordKey.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(PreviewError::InvalidProfile.status(), StatusCode::BAD_REQUEST);
        assert_eq!(PreviewError::InvalidPost.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn error_into_response_is_plain_text() {
        let response = PreviewError::InvalidHandle.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
    }
}
