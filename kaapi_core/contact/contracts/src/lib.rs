use kaapi_models::{contact::ContactSubmission, issue::ValidationIssues};
use serde_json::Value;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Validate a submission of the contact form.
    ///
    /// Every violated field is reported, not just the first one.
    fn submit(&self, payload: &Value) -> Result<ContactSubmission, ValidationIssues>;
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit(
        mut self,
        payload: Value,
        result: Result<ContactSubmission, ValidationIssues>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(payload))
            .return_once(move |_| result);
        self
    }
}
