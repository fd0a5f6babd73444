use serde::{Deserialize, Serialize};

/// Fixed document served whenever no preview could be produced.
pub const ERROR_DOCUMENT: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta property="og:title" content="Couldn't fetch match data">
</head>
<body></body>
</html>
"#;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum AppError {
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Failed to fetch page: {0}")]
    FetchFailed(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Page is neither a match nor a forum post")]
    Unclassified,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Short category safe to show to clients. Never carries the inner detail.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::InvalidPath(_) => "invalid path",
            Self::FetchFailed(_) => "could not fetch page",
            Self::Timeout => "origin timed out",
            Self::Unclassified => "unsupported page",
            Self::Internal(_) => "internal error",
        }
    }
}

#[cfg(feature = "ssr")]
mod ssr_impl {
    use super::{AppError, ERROR_DOCUMENT};
    use axum::http::{header, StatusCode};
    use axum::response::{IntoResponse, Response};

    impl AppError {
        pub fn status_code(&self) -> StatusCode {
            match self {
                AppError::InvalidPath(_) => StatusCode::BAD_REQUEST,
                AppError::FetchFailed(_) => StatusCode::BAD_GATEWAY,
                AppError::Timeout => StatusCode::GATEWAY_TIMEOUT,
                AppError::Unclassified => StatusCode::UNPROCESSABLE_ENTITY,
                AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            }
        }

        /// JSON body for the inspection API. Uses the mapped status code.
        pub fn into_json_response(self) -> Response {
            let body = serde_json::json!({ "message": self.public_message() });
            (self.status_code(), axum::Json(body)).into_response()
        }
    }

    // Unfurl bots only read the body, so the error document always goes out as 200.
    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
                ERROR_DOCUMENT,
            )
                .into_response()
        }
    }
}
