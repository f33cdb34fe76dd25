use thiserror::Error;

pub mod contact;
pub mod email_address;
pub mod form;
pub mod issue;
mod macros;
pub mod supplier;

/// Returned when a string does not name any variant of a label enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown label: {0}")]
pub struct UnknownLabel(pub String);
