use clap::Args;
use darkroom_app::{auth::PgAuthService, domain::users::models::UserUuid};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct ListTokensArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// User UUID whose tokens should be listed
    #[arg(long)]
    user_uuid: Uuid,
}

pub(crate) async fn run(args: ListTokensArgs) -> Result<(), String> {
    let pool = crate::cli::connect(&args.database_url).await?;

    let service = PgAuthService::new(pool);

    let tokens = service
        .list_api_tokens(UserUuid::from_uuid(args.user_uuid))
        .await
        .map_err(|error| format!("failed to list tokens: {error}"))?;

    if tokens.is_empty() {
        println!("no tokens for user {}", args.user_uuid);
        return Ok(());
    }

    for token in tokens {
        let state = if token.revoked_at.is_some() {
            "revoked"
        } else {
            "active"
        };

        println!(
            "{} created_at={} last_used_at={} {state}",
            token.uuid,
            token.created_at,
            token
                .last_used_at
                .map_or_else(|| "never".to_string(), |at| at.to_string()),
        );
    }

    Ok(())
}
