//! Submit Contact Message Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use darkroom_app::domain::contact::models::NewContactMessage;

use crate::{contact::errors::into_status_error, extensions::*, state::State};

/// Contact Message Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ContactRequest {
    pub name: String,

    /// Reply address for the studio's answer
    pub email: String,

    pub subject: String,

    pub message: String,
}

impl From<ContactRequest> for NewContactMessage {
    fn from(request: ContactRequest) -> Self {
        NewContactMessage {
            name: request.name,
            email: request.email,
            subject: request.subject,
            message: request.message,
        }
    }
}

/// Contact Message Response
///
/// The message is always stored when this returns 201; `notified` is false
/// when the studio-inbox notification could not be sent.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ContactResponse {
    /// The stored message's identifier
    pub uuid: Uuid,

    /// Whether the notification email went out
    pub notified: bool,
}

/// Submit Contact Message Handler
#[endpoint(
    tags("contact"),
    summary = "Submit Contact Message",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Message stored"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ContactRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ContactResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.identity_or_401()?;

    let receipt = state
        .app
        .contact
        .submit_message(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(ContactResponse {
        uuid: receipt.message.uuid.into(),
        notified: receipt.notified,
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use darkroom_app::domain::contact::{
        MockContactService,
        models::{ContactMessage, ContactMessageUuid, ContactReceipt},
    };
    use jiff::Timestamp;

    use crate::test_helpers::{authed_service, state_with_contact};

    use super::*;

    fn receipt(notified: bool) -> ContactReceipt {
        ContactReceipt {
            message: ContactMessage {
                uuid: ContactMessageUuid::new(),
                name: "Maya Chen".to_string(),
                email: "maya@example.com".to_string(),
                subject: "Availability in June".to_string(),
                message: "Do you have any wedding slots left in June?".to_string(),
                sent_at: Timestamp::UNIX_EPOCH,
            },
            notified,
        }
    }

    fn request_body() -> serde_json::Value {
        json!({
            "name": "Maya Chen",
            "email": "maya@example.com",
            "subject": "Availability in June",
            "message": "Do you have any wedding slots left in June?",
        })
    }

    fn make_service(contact: MockContactService) -> Service {
        authed_service(
            state_with_contact(contact),
            Router::with_path("contact").post(handler),
        )
    }

    #[tokio::test]
    async fn test_submission_returns_201_and_notified() -> TestResult {
        let mut contact = MockContactService::new();

        contact
            .expect_submit_message()
            .once()
            .withf(|new| new.subject == "Availability in June")
            .return_once(|_| Ok(receipt(true)));

        let mut res = TestClient::post("http://example.com/contact")
            .json(&request_body())
            .send(&make_service(contact))
            .await;

        let body: ContactResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert!(body.notified);

        Ok(())
    }

    #[tokio::test]
    async fn test_failed_notification_is_partial_success() -> TestResult {
        let mut contact = MockContactService::new();

        contact
            .expect_submit_message()
            .once()
            .return_once(|_| Ok(receipt(false)));

        let mut res = TestClient::post("http://example.com/contact")
            .json(&request_body())
            .send(&make_service(contact))
            .await;

        let body: ContactResponse = res.take_json().await?;

        // Still 201: the message is stored even though the send failed.
        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert!(!body.notified);

        Ok(())
    }
}
