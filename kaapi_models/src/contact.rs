use serde::{Serialize, Serializer};

use crate::{email_address::EmailAddress, macros::nutype_string};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub email: EmailAddress,
    pub subject: ContactSubject,
    pub message: ContactMessage,
    pub consent: Consent,
}

nutype_string!(ContactName(validate(
    len_char_min = ContactName::MIN_LENGTH,
    len_char_max = ContactName::MAX_LENGTH
)));
impl ContactName {
    pub const MIN_LENGTH: usize = 2;
    pub const MAX_LENGTH: usize = 100;
}

nutype_string!(ContactSubject(validate(
    len_char_min = ContactSubject::MIN_LENGTH,
    len_char_max = ContactSubject::MAX_LENGTH
)));
impl ContactSubject {
    pub const MIN_LENGTH: usize = 3;
    pub const MAX_LENGTH: usize = 150;
}

nutype_string!(ContactMessage(validate(
    len_char_min = ContactMessage::MIN_LENGTH,
    len_char_max = ContactMessage::MAX_LENGTH
)));
impl ContactMessage {
    pub const MIN_LENGTH: usize = 10;
    pub const MAX_LENGTH: usize = 5000;
}

/// The privacy policy checkbox. A submission can only exist once it has been
/// ticked, so this carries no value and always serializes as `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Consent;

impl Serialize for Consent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bool(true)
    }
}
