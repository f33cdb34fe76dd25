use kaapi_models::issue::{ValidationIssue, ValidationIssues};
use serde_json::Value;

mod service;

fn with(payload: &Value, field: &str, value: Value) -> Value {
    let mut payload = payload.clone();
    payload[field] = value;
    payload
}

fn without(payload: &Value, fields: &[&str]) -> Value {
    let mut payload = payload.clone();
    if let Some(object) = payload.as_object_mut() {
        for field in fields {
            object.remove(*field);
        }
    }
    payload
}

fn fields_of(issues: &ValidationIssues) -> Vec<&str> {
    issues.iter().filter_map(ValidationIssue::field).collect()
}
