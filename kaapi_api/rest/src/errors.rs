use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use kaapi_models::issue::ValidationIssues;
use tracing::{error, warn};

use crate::models::{ApiError, ApiOk, ApiValidationFailed};

const UNEXPECTED_ERROR: &str = "Unexpected error";

pub fn ok() -> Response {
    Json(ApiOk { ok: true }).into_response()
}

pub fn validation_failed(issues: &ValidationIssues) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiValidationFailed {
            ok: false,
            issues,
        }),
    )
        .into_response()
}

pub fn malformed_body(err: serde_json::Error) -> Response {
    warn!("malformed request body: {err}");
    unexpected_error()
}

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    error!("internal server error: {err}");
    unexpected_error()
}

fn unexpected_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError {
            ok: false,
            message: UNEXPECTED_ERROR,
        }),
    )
        .into_response()
}
