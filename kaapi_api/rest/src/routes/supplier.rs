use std::sync::Arc;

use axum::{body::Bytes, extract::State, response::Response, routing, Router};
use kaapi_core_supplier_contracts::SupplierFeatureService;

use super::{form_response, parse_payload};

pub const PATH: &str = "/api/supplier-registration";

pub fn router(service: Arc<impl SupplierFeatureService>) -> Router<()> {
    Router::new()
        .route(PATH, routing::post(register))
        .with_state(service)
}

async fn register(service: State<Arc<impl SupplierFeatureService>>, body: Bytes) -> Response {
    match parse_payload(&body) {
        Ok(payload) => form_response(service.register(&payload)),
        Err(response) => response,
    }
}
