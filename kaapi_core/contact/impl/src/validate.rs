use kaapi_models::{
    contact::{
        Consent, ContactMessage, ContactMessageError, ContactName, ContactNameError,
        ContactSubject, ContactSubjectError, ContactSubmission,
    },
    email_address::EmailAddress,
    form::FormFields,
    issue::{IssueCode, ValidationIssue, ValidationIssues},
};
use serde_json::Value;

const INVALID_EMAIL: &str = "Please enter a valid email address";
const CONSENT_REQUIRED: &str = "You must agree to the privacy policy";

/// Validate an untyped contact form submission, collecting an issue for every
/// field that violates its constraints.
pub fn validate_contact(payload: &Value) -> Result<ContactSubmission, ValidationIssues> {
    let mut fields = FormFields::new(payload)?;

    let name = fields.required_str("name").and_then(|name| {
        fields.check("name", ContactName::try_from(name), |err| match err {
            ContactNameError::LenCharMinViolated => {
                (IssueCode::TooSmall, "Name must be at least 2 characters")
            }
            ContactNameError::LenCharMaxViolated => {
                (IssueCode::TooBig, "Name must be at most 100 characters")
            }
        })
    });

    let email = fields.required_str("email").and_then(|email| {
        fields.check("email", email.parse::<EmailAddress>(), |_| {
            (IssueCode::InvalidEmail, INVALID_EMAIL)
        })
    });

    let subject = fields.required_str("subject").and_then(|subject| {
        fields.check("subject", ContactSubject::try_from(subject), |err| match err {
            ContactSubjectError::LenCharMinViolated => {
                (IssueCode::TooSmall, "Subject must be at least 3 characters")
            }
            ContactSubjectError::LenCharMaxViolated => {
                (IssueCode::TooBig, "Subject must be at most 150 characters")
            }
        })
    });

    let message = fields.required_str("message").and_then(|message| {
        fields.check("message", ContactMessage::try_from(message), |err| match err {
            ContactMessageError::LenCharMinViolated => {
                (IssueCode::TooSmall, "Message must be at least 10 characters")
            }
            ContactMessageError::LenCharMaxViolated => {
                (IssueCode::TooBig, "Message must be at most 5000 characters")
            }
        })
    });

    let consent = match fields.value("consent") {
        Some(Value::Bool(true)) => Some(Consent),
        _ => {
            fields.push(ValidationIssue::new(
                IssueCode::InvalidLiteral,
                "consent",
                CONSENT_REQUIRED,
            ));
            None
        }
    };

    match (name, email, subject, message, consent) {
        (Some(name), Some(email), Some(subject), Some(message), Some(consent))
            if fields.is_clean() =>
        {
            Ok(ContactSubmission {
                name,
                email,
                subject,
                message,
                consent,
            })
        }
        _ => Err(fields.into_issues()),
    }
}
