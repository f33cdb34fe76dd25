use kaapi_core_supplier_contracts::SupplierFeatureService;
use kaapi_models::{issue::ValidationIssues, supplier::SupplierSubmission};
use serde_json::Value;
use tracing::{debug, info};

pub use validate::validate_supplier;

#[cfg(test)]
mod tests;
mod validate;

#[derive(Debug, Clone, Copy, Default)]
pub struct SupplierFeatureServiceImpl;

impl SupplierFeatureService for SupplierFeatureServiceImpl {
    fn register(&self, payload: &Value) -> Result<SupplierSubmission, ValidationIssues> {
        validate_supplier(payload)
            .inspect(|submission| {
                info!(user_type = %submission.user_type(), "accepted supplier registration")
            })
            .inspect_err(|issues| debug!(issues = issues.len(), "rejected supplier registration"))
    }
}
