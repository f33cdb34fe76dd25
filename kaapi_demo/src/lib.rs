//! Well-formed form payloads as they would be posted by the website. Tests
//! start from these and break individual fields.

pub mod contact;
pub mod supplier;
