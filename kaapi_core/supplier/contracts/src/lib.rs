use kaapi_models::{issue::ValidationIssues, supplier::SupplierSubmission};
use serde_json::Value;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait SupplierFeatureService: Send + Sync + 'static {
    /// Validate a supplier registration.
    ///
    /// Which details are required depends on the submitted `userType`. An
    /// incomplete set of details is reported as a single issue on the first
    /// field of the set.
    fn register(&self, payload: &Value) -> Result<SupplierSubmission, ValidationIssues>;
}

#[cfg(feature = "mock")]
impl MockSupplierFeatureService {
    pub fn with_register(
        mut self,
        payload: Value,
        result: Result<SupplierSubmission, ValidationIssues>,
    ) -> Self {
        self.expect_register()
            .once()
            .with(mockall::predicate::eq(payload))
            .return_once(move |_| result);
        self
    }
}
