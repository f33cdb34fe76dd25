use kaapi_core_contact_contracts::ContactFeatureService;
use kaapi_models::{contact::ContactSubmission, issue::ValidationIssues};
use serde_json::Value;
use tracing::{debug, info};

pub use validate::validate_contact;

mod validate;

#[derive(Debug, Clone, Copy, Default)]
pub struct ContactFeatureServiceImpl;

impl ContactFeatureService for ContactFeatureServiceImpl {
    fn submit(&self, payload: &Value) -> Result<ContactSubmission, ValidationIssues> {
        validate_contact(payload)
            .inspect(|_| info!("accepted contact form submission"))
            .inspect_err(|issues| debug!(issues = issues.len(), "rejected contact form submission"))
    }
}
