//! Contact service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::warn;

use crate::{
    database::Db,
    domain::contact::{
        errors::ContactServiceError,
        models::{ContactMessage, ContactMessageUuid, ContactReceipt, NewContactMessage},
        repository::PgContactRepository,
    },
    notify::Notifier,
};

#[derive(Clone)]
pub struct PgContactService {
    db: Db,
    repository: PgContactRepository,
    notifier: Arc<dyn Notifier>,
}

impl PgContactService {
    #[must_use]
    pub fn new(db: Db, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            db,
            repository: PgContactRepository::new(),
            notifier,
        }
    }
}

#[async_trait]
impl ContactService for PgContactService {
    async fn submit_message(
        &self,
        message: NewContactMessage,
    ) -> Result<ContactReceipt, ContactServiceError> {
        if [&message.name, &message.email, &message.subject, &message.message]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(ContactServiceError::MissingRequiredData);
        }

        if !message.email.contains('@') {
            return Err(ContactServiceError::InvalidData);
        }

        let mut tx = self.db.begin().await?;

        let saved = self
            .repository
            .create_contact_message(&mut tx, ContactMessageUuid::new(), &message)
            .await?;

        // Commit before notifying: a failed send must never unwind the
        // stored message.
        tx.commit().await?;

        let notified = match self
            .notifier
            .send(
                &format!("New contact message from {}", saved.name),
                &notification_body(&saved),
                &saved.email,
            )
            .await
        {
            Ok(()) => true,
            Err(error) => {
                warn!("contact notification failed for {}: {error}", saved.uuid);

                false
            }
        };

        Ok(ContactReceipt {
            message: saved,
            notified,
        })
    }
}

fn notification_body(message: &ContactMessage) -> String {
    format!(
        "Name: {}\nEmail: {}\nSubject: {}\n\n{}\n",
        message.name, message.email, message.subject, message.message
    )
}

#[automock]
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Persist a contact-form message, then notify the studio inbox. The
    /// receipt records whether the notification went out; send failure is
    /// partial success, not an error.
    async fn submit_message(
        &self,
        message: NewContactMessage,
    ) -> Result<ContactReceipt, ContactServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{notify::MockNotifier, test::TestContext};

    use super::*;

    fn message() -> NewContactMessage {
        NewContactMessage {
            name: "Maya Chen".to_string(),
            email: "maya@example.com".to_string(),
            subject: "Availability in June".to_string(),
            message: "Do you have any wedding slots left in June?".to_string(),
        }
    }

    #[tokio::test]
    async fn submission_persists_and_notifies() -> TestResult {
        let ctx = TestContext::new().await;

        let mut notifier = MockNotifier::new();

        notifier
            .expect_send()
            .once()
            .withf(|subject, body, reply_to| {
                subject == "New contact message from Maya Chen"
                    && body.contains("wedding slots")
                    && reply_to == "maya@example.com"
            })
            .return_once(|_, _, _| Ok(()));

        let service = PgContactService::new(ctx.db_handle(), Arc::new(notifier));

        let receipt = service.submit_message(message()).await?;

        assert!(receipt.notified);
        assert_eq!(receipt.message.subject, "Availability in June");

        Ok(())
    }

    #[tokio::test]
    async fn failed_send_still_saves_the_message() -> TestResult {
        let ctx = TestContext::new().await;

        let mut notifier = MockNotifier::new();

        notifier.expect_send().once().return_once(|_, _, _| {
            Err(crate::notify::NotifyError::Address(
                "not-an-address".parse::<lettre::Address>().unwrap_err(),
            ))
        });

        let service = PgContactService::new(ctx.db_handle(), Arc::new(notifier));

        let receipt = service.submit_message(message()).await?;

        assert!(!receipt.notified, "send failure is partial success");

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contact_messages")
            .fetch_one(ctx.db.pool())
            .await?;

        assert_eq!(count, 1, "message must survive the failed send");

        Ok(())
    }

    #[tokio::test]
    async fn log_notifier_counts_as_notified() -> TestResult {
        let ctx = TestContext::new().await;

        let receipt = ctx.contact.submit_message(message()).await?;

        assert!(receipt.notified);

        Ok(())
    }

    #[tokio::test]
    async fn blank_fields_are_rejected_without_notification() {
        let ctx = TestContext::new().await;

        let mut notifier = MockNotifier::new();

        notifier.expect_send().never();

        let service = PgContactService::new(ctx.db_handle(), Arc::new(notifier));

        let result = service
            .submit_message(NewContactMessage {
                subject: "  ".to_string(),
                ..message()
            })
            .await;

        assert!(
            matches!(result, Err(ContactServiceError::MissingRequiredData)),
            "expected MissingRequiredData, got {result:?}"
        );
    }

    #[tokio::test]
    async fn mailless_address_is_rejected() {
        let ctx = TestContext::new().await;

        let service = PgContactService::new(ctx.db_handle(), Arc::new(MockNotifier::new()));

        let result = service
            .submit_message(NewContactMessage {
                email: "not-an-address".to_string(),
                ..message()
            })
            .await;

        assert!(
            matches!(result, Err(ContactServiceError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );
    }
}
