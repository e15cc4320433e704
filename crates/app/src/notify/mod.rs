//! Outbound notification.
//!
//! The contact flow only needs a fire-and-forget send; everything about
//! transport lives behind [`Notifier`].

mod smtp;

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;
use tracing::info;

pub use smtp::{SmtpConfig, SmtpNotifier};

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("invalid mail address")]
    Address(#[from] lettre::address::AddressError),

    #[error("failed to build message")]
    Message(#[from] lettre::error::Error),

    #[error("smtp transport error")]
    Transport(#[from] lettre::transport::smtp::Error),
}

#[automock]
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a notification to the studio inbox. `reply_to` is the
    /// address of the person the message is about, so staff can answer
    /// directly.
    async fn send(&self, subject: &str, body: &str, reply_to: &str) -> Result<(), NotifyError>;
}

/// Logs instead of sending; used when no SMTP relay is configured.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, subject: &str, _body: &str, reply_to: &str) -> Result<(), NotifyError> {
        info!("notification (mail disabled): {subject} [reply-to {reply_to}]");

        Ok(())
    }
}
