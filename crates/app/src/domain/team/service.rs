//! Team service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::team::{
        errors::TeamServiceError,
        models::{NewTeamMember, TeamMember},
        repository::PgTeamRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgTeamService {
    db: Db,
    repository: PgTeamRepository,
}

impl PgTeamService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgTeamRepository::new(),
        }
    }
}

#[async_trait]
impl TeamService for PgTeamService {
    async fn list_team(&self) -> Result<Vec<TeamMember>, TeamServiceError> {
        let mut tx = self.db.begin().await?;

        let members = self.repository.list_team_members(&mut tx).await?;

        tx.commit().await?;

        Ok(members)
    }

    async fn add_team_member(
        &self,
        member: NewTeamMember,
    ) -> Result<TeamMember, TeamServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_team_member(&mut tx, &member).await?;

        tx.commit().await?;

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait TeamService: Send + Sync {
    /// The public team listing, ordered by name.
    async fn list_team(&self) -> Result<Vec<TeamMember>, TeamServiceError>;

    /// Add a member to the team page (admin tooling).
    async fn add_team_member(&self, member: NewTeamMember)
    -> Result<TeamMember, TeamServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{domain::team::models::TeamRole, test::TestContext};

    use super::*;

    #[tokio::test]
    async fn team_listing_is_ordered_by_name() -> TestResult {
        let ctx = TestContext::new().await;

        for (name, role) in [
            ("Noor Haddad", TeamRole::Director),
            ("Elio Marchetti", TeamRole::Videographer),
        ] {
            ctx.team
                .add_team_member(NewTeamMember {
                    uuid: crate::domain::team::models::TeamMemberUuid::new(),
                    name: name.to_string(),
                    role,
                    profile_image: None,
                    bio: "Part of the studio since the start.".to_string(),
                })
                .await?;
        }

        let members = ctx.team.list_team().await?;
        let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();

        assert_eq!(names, ["Elio Marchetti", "Noor Haddad"]);

        Ok(())
    }
}
