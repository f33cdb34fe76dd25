use std::sync::Arc;

use axum::{body::Bytes, extract::State, response::Response, routing, Router};
use kaapi_core_contact_contracts::ContactFeatureService;

use super::{form_response, parse_payload};

pub const PATH: &str = "/api/contact";

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route(PATH, routing::post(submit))
        .with_state(service)
}

async fn submit(service: State<Arc<impl ContactFeatureService>>, body: Bytes) -> Response {
    match parse_payload(&body) {
        Ok(payload) => form_response(service.submit(&payload)),
        Err(response) => response,
    }
}
