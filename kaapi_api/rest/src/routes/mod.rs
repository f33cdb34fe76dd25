use axum::{body::Bytes, response::Response};
use kaapi_models::issue::ValidationIssues;
use serde_json::Value;

use crate::errors::{malformed_body, ok, validation_failed};

pub mod contact;
pub mod health;
pub mod supplier;

/// Bodies are read as raw bytes so that any JSON value reaches the
/// validators. Only unparseable input is rejected here.
fn parse_payload(body: &Bytes) -> Result<Value, Response> {
    serde_json::from_slice(body).map_err(malformed_body)
}

fn form_response<T>(result: Result<T, ValidationIssues>) -> Response {
    match result {
        Ok(_) => ok(),
        Err(issues) => validation_failed(&issues),
    }
}
