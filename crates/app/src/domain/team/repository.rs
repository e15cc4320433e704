//! Team Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::team::models::{NewTeamMember, TeamMember, TeamMemberUuid, TeamRole};

const LIST_TEAM_MEMBERS_SQL: &str = include_str!("sql/list_team_members.sql");
const CREATE_TEAM_MEMBER_SQL: &str = include_str!("sql/create_team_member.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgTeamRepository;

impl PgTeamRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_team_members(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<TeamMember>, sqlx::Error> {
        query_as::<Postgres, TeamMember>(LIST_TEAM_MEMBERS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_team_member(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        member: &NewTeamMember,
    ) -> Result<TeamMember, sqlx::Error> {
        query_as::<Postgres, TeamMember>(CREATE_TEAM_MEMBER_SQL)
            .bind(member.uuid.into_uuid())
            .bind(&member.name)
            .bind(member.role.as_str())
            .bind(&member.profile_image)
            .bind(&member.bio)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for TeamMember {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let role: TeamRole =
            row.try_get::<String, _>("role")?
                .parse()
                .map_err(|e| sqlx::Error::ColumnDecode {
                    index: "role".to_string(),
                    source: Box::new(e),
                })?;

        Ok(Self {
            uuid: TeamMemberUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            role,
            profile_image: row.try_get("profile_image")?,
            bio: row.try_get("bio")?,
        })
    }
}
