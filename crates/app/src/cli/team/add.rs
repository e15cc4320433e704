use clap::Args;
use darkroom_app::{
    database::Db,
    domain::team::{
        PgTeamService, TeamService,
        models::{NewTeamMember, TeamMemberUuid, TeamRole},
    },
};

#[derive(Debug, Args)]
pub(crate) struct AddTeamMemberArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    #[arg(long)]
    name: String,

    /// One of: ceo, producer, director, editor, photographer, videographer
    #[arg(long)]
    role: String,

    /// Opaque image store reference
    #[arg(long)]
    profile_image: Option<String>,

    #[arg(long)]
    bio: String,
}

pub(crate) async fn run(args: AddTeamMemberArgs) -> Result<(), String> {
    let role: TeamRole = args
        .role
        .parse()
        .map_err(|_| format!("unknown role '{}'", args.role))?;

    let pool = crate::cli::connect(&args.database_url).await?;

    let service = PgTeamService::new(Db::new(pool));

    let member = service
        .add_team_member(NewTeamMember {
            uuid: TeamMemberUuid::new(),
            name: args.name,
            role,
            profile_image: args.profile_image,
            bio: args.bio,
        })
        .await
        .map_err(|error| format!("failed to add team member: {error}"))?;

    println!("member_uuid: {}", member.uuid);
    println!("name: {}", member.name);
    println!("role: {}", member.role);

    Ok(())
}
