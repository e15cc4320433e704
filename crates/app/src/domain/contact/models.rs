//! Contact Models

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Contact Message UUID
pub type ContactMessageUuid = TypedUuid<ContactMessage>;

/// A message sent through the public contact form.
#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub uuid: ContactMessageUuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub sent_at: Timestamp,
}

/// New Contact Message Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Outcome of a contact submission. The message is always persisted;
/// `notified` records whether the studio inbox notification went out.
#[derive(Debug, Clone)]
pub struct ContactReceipt {
    pub message: ContactMessage,
    pub notified: bool,
}
