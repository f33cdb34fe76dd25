use kaapi_models::issue::ValidationIssue;
use serde::Serialize;

#[derive(Serialize)]
pub struct ApiOk {
    pub ok: bool,
}

#[derive(Serialize)]
pub struct ApiValidationFailed<'a> {
    pub ok: bool,
    pub issues: &'a [ValidationIssue],
}

#[derive(Serialize)]
pub struct ApiError {
    pub ok: bool,
    pub message: &'static str,
}
