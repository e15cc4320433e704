//! Auth service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    auth::{
        ApiToken, ApiTokenVersion, AuthServiceError, Identity, IssuedApiToken, NewApiToken,
        build_verifier_input, format_api_token, generate_api_token_secret, hash_verifier_input,
        models::ApiTokenUuid, parse_api_token, repository::PgAuthRepository,
    },
    domain::users::models::UserUuid,
};

#[derive(Debug, Clone)]
pub struct PgAuthService {
    repository: PgAuthRepository,
}

impl PgAuthService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgAuthRepository::new(pool),
        }
    }

    /// Issue a new API token for the given user.
    ///
    /// # Errors
    ///
    /// Returns an error when the database insertion fails.
    pub async fn issue_api_token(
        &self,
        user: UserUuid,
        expires_at: Option<Timestamp>,
    ) -> Result<IssuedApiToken, AuthServiceError> {
        let token_uuid = Uuid::now_v7();
        let version = ApiTokenVersion::V1;
        let secret = generate_api_token_secret();
        let token = format_api_token(token_uuid, version, &secret);

        let verifier_input = build_verifier_input(&token_uuid, version, &user, &secret);
        let token_hash = hash_verifier_input(&verifier_input);

        let metadata = self
            .repository
            .create_api_token(&NewApiToken {
                uuid: ApiTokenUuid::from_uuid(token_uuid),
                user_uuid: user,
                token_hash,
                expires_at,
            })
            .await
            .map_err(AuthServiceError::from)?;

        Ok(IssuedApiToken { token, metadata })
    }

    /// List all tokens ever issued for the given user.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_api_tokens(
        &self,
        user: UserUuid,
    ) -> Result<Vec<ApiToken>, AuthServiceError> {
        self.repository
            .list_api_tokens_by_user(user)
            .await
            .map_err(AuthServiceError::from)
    }

    /// Revoke a token by UUID. Returns `true` if the token was active.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn revoke_api_token(&self, token_uuid: Uuid) -> Result<bool, AuthServiceError> {
        self.repository
            .revoke_api_token(token_uuid)
            .await
            .map(|record| record.is_some())
            .map_err(AuthServiceError::from)
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Identity, AuthServiceError> {
        let parsed = parse_api_token(bearer_token).map_err(|_| AuthServiceError::NotFound)?;

        let token = self
            .repository
            .find_active_api_token(parsed.token_uuid)
            .await
            .map_err(AuthServiceError::from)?
            .ok_or(AuthServiceError::NotFound)?;

        let verifier_input = build_verifier_input(
            &parsed.token_uuid,
            parsed.version,
            &token.user_uuid,
            &parsed.secret,
        );

        if hash_verifier_input(&verifier_input) != token.token_hash {
            return Err(AuthServiceError::NotFound);
        }

        // Best-effort metadata update; auth success should not depend on
        // this write.
        let _touch_result = self
            .repository
            .touch_api_token_last_used(parsed.token_uuid)
            .await;

        Ok(Identity {
            user: token.user_uuid,
            staff: token.staff,
        })
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve a bearer token string into the request identity.
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Identity, AuthServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    #[tokio::test]
    async fn issued_token_authenticates_to_its_user() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user("maya", false).await;

        let issued = ctx.auth.issue_api_token(user, None).await?;
        let identity = ctx.auth.authenticate_bearer(&issued.token).await?;

        assert_eq!(identity, Identity { user, staff: false });

        Ok(())
    }

    #[tokio::test]
    async fn staff_flag_is_carried_into_identity() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user("vic", true).await;

        let issued = ctx.auth.issue_api_token(user, None).await?;
        let identity = ctx.auth.authenticate_bearer(&issued.token).await?;

        assert!(identity.staff);

        Ok(())
    }

    #[tokio::test]
    async fn revoked_token_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user("maya", false).await;

        let issued = ctx.auth.issue_api_token(user, None).await?;

        assert!(ctx.auth.revoke_api_token(issued.metadata.uuid.into_uuid()).await?);

        let result = ctx.auth.authenticate_bearer(&issued.token).await;

        assert!(
            matches!(result, Err(AuthServiceError::NotFound)),
            "expected NotFound after revocation, got {result:?}"
        );

        // Revoking again reports the token as no longer active.
        assert!(!ctx.auth.revoke_api_token(issued.metadata.uuid.into_uuid()).await?);

        Ok(())
    }

    #[tokio::test]
    async fn expired_token_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user("maya", false).await;

        let past = Timestamp::from_second(Timestamp::now().as_second() - 3600)?;
        let issued = ctx.auth.issue_api_token(user, Some(past)).await?;

        let result = ctx.auth.authenticate_bearer(&issued.token).await;

        assert!(
            matches!(result, Err(AuthServiceError::NotFound)),
            "expected NotFound for expired token, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn tampered_secret_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user("maya", false).await;

        let issued = ctx.auth.issue_api_token(user, None).await?;

        let mut tampered = issued.token.clone();
        let flipped = if tampered.ends_with('0') { '1' } else { '0' };
        tampered.pop();
        tampered.push(flipped);

        let result = ctx.auth.authenticate_bearer(&tampered).await;

        assert!(
            matches!(result, Err(AuthServiceError::NotFound)),
            "expected NotFound for tampered token, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn garbage_token_is_rejected() {
        let ctx = TestContext::new().await;

        let result = ctx.auth.authenticate_bearer("Bearer nonsense").await;

        assert!(
            matches!(result, Err(AuthServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
