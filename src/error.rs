use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Failure of a single upstream call
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("upstream returned {status} for {url}")]
    Status { status: StatusCode, url: String },

    #[error("unexpected payload from {url}: {message}")]
    Schema { url: String, message: String },
}

impl UpstreamError {
    pub fn schema(url: &str, message: impl Into<String>) -> Self {
        UpstreamError::Schema {
            url: url.to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadRequest,
    InvalidBody,
    NotFound,
    UpstreamUnavailable,
    UpstreamStatus,
    UpstreamSchema,
    Internal,
}

impl ErrorKind {
    /// Upstream kinds all answer 500 so existing clients see no change.
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            ErrorKind::InvalidBody => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::UpstreamUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorKind::UpstreamStatus => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorKind::UpstreamSchema => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "bad_request",
            ErrorKind::InvalidBody => "invalid_body",
            ErrorKind::NotFound => "not_found",
            ErrorKind::UpstreamUnavailable => "upstream_unavailable",
            ErrorKind::UpstreamStatus => "upstream_status",
            ErrorKind::UpstreamSchema => "upstream_schema",
            ErrorKind::Internal => "internal_error",
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    /// Malformed path segment, query string or JSON syntax
    BadRequest(String),
    /// Well-formed JSON that does not fit the expected shape
    InvalidBody(String),
    NotFound(String),
    Upstream(UpstreamError),
    InternalError,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::BadRequest(_) => ErrorKind::BadRequest,
            ApiError::InvalidBody(_) => ErrorKind::InvalidBody,
            ApiError::NotFound(_) => ErrorKind::NotFound,
            ApiError::Upstream(UpstreamError::Transport { .. }) => ErrorKind::UpstreamUnavailable,
            ApiError::Upstream(UpstreamError::Status { .. }) => ErrorKind::UpstreamStatus,
            ApiError::Upstream(UpstreamError::Schema { .. }) => ErrorKind::UpstreamSchema,
            ApiError::InternalError => ErrorKind::Internal,
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let detail = match self {
            ApiError::BadRequest(message)
            | ApiError::InvalidBody(message)
            | ApiError::NotFound(message) => message,
            ApiError::Upstream(err) => err.to_string(),
            ApiError::InternalError => "Internal server error".to_string(),
        };

        let body = Json(ErrorResponse {
            error: kind.code().to_string(),
            detail,
        });

        (kind.status(), body).into_response()
    }
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        ApiError::Upstream(err)
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => ApiError::InvalidBody(err.body_text()),
            other => ApiError::BadRequest(other.body_text()),
        }
    }
}
