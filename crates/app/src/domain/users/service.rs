//! Users service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::users::{
        errors::UsersServiceError,
        models::{NewUser, ProfileUpdate, User, UserUuid},
        repository::PgUsersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgUsersService {
    db: Db,
    repository: PgUsersRepository,
}

impl PgUsersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgUsersRepository::new(),
        }
    }
}

#[async_trait]
impl UsersService for PgUsersService {
    async fn get_profile(&self, user: UserUuid) -> Result<User, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let user = self.repository.get_user(&mut tx, user).await?;

        tx.commit().await?;

        Ok(user)
    }

    async fn update_profile(
        &self,
        user: UserUuid,
        update: ProfileUpdate,
    ) -> Result<User, UsersServiceError> {
        if update
            .username
            .as_deref()
            .is_some_and(|value| value.trim().is_empty())
        {
            return Err(UsersServiceError::MissingRequiredData);
        }

        let mut tx = self.db.begin().await?;

        let updated = self.repository.update_user(&mut tx, user, &update).await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn create_user(&self, user: NewUser) -> Result<User, UsersServiceError> {
        if user.username.trim().is_empty() || user.email.trim().is_empty() {
            return Err(UsersServiceError::MissingRequiredData);
        }

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_user(&mut tx, &user).await?;

        tx.commit().await?;

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Retrieve a user's profile.
    async fn get_profile(&self, user: UserUuid) -> Result<User, UsersServiceError>;

    /// Partially update a user's profile.
    async fn update_profile(
        &self,
        user: UserUuid,
        update: ProfileUpdate,
    ) -> Result<User, UsersServiceError>;

    /// Register a new user record (admin tooling and tests; registration
    /// itself belongs to the external identity provider).
    async fn create_user(&self, user: NewUser) -> Result<User, UsersServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    fn new_user(username: &str) -> NewUser {
        NewUser {
            uuid: UserUuid::new(),
            username: username.to_string(),
            email: format!("{username}@example.com"),
            first_name: "Alex".to_string(),
            last_name: "Reyes".to_string(),
            phone: None,
            address: "12 Harbour Lane".to_string(),
            profile_image: None,
            staff: false,
        }
    }

    #[tokio::test]
    async fn create_and_get_profile_round_trip() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx.users.create_user(new_user("alex")).await?;
        let fetched = ctx.users.get_profile(created.uuid).await?;

        assert_eq!(fetched.uuid, created.uuid);
        assert_eq!(fetched.username, "alex");
        assert!(!fetched.staff);

        Ok(())
    }

    #[tokio::test]
    async fn get_profile_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.users.get_profile(UserUuid::new()).await;

        assert!(
            matches!(result, Err(UsersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn update_profile_changes_only_provided_fields() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx.users.create_user(new_user("jordan")).await?;

        let updated = ctx
            .users
            .update_profile(
                created.uuid,
                ProfileUpdate {
                    phone: Some("+44 20 7946 0000".to_string()),
                    address: Some("3 Film House".to_string()),
                    ..ProfileUpdate::default()
                },
            )
            .await?;

        assert_eq!(updated.username, "jordan");
        assert_eq!(updated.phone.as_deref(), Some("+44 20 7946 0000"));
        assert_eq!(updated.address, "3 Film House");

        Ok(())
    }

    #[tokio::test]
    async fn duplicate_username_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.users.create_user(new_user("sam")).await?;

        let mut duplicate = new_user("sam");
        duplicate.email = "sam-other@example.com".to_string();

        let result = ctx.users.create_user(duplicate).await;

        assert!(
            matches!(result, Err(UsersServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_to_taken_username_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.users.create_user(new_user("robin")).await?;
        let other = ctx.users.create_user(new_user("casey")).await?;

        let result = ctx
            .users
            .update_profile(
                other.uuid,
                ProfileUpdate {
                    username: Some("robin".to_string()),
                    ..ProfileUpdate::default()
                },
            )
            .await;

        assert!(
            matches!(result, Err(UsersServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }
}
