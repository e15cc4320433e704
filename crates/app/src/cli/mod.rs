use clap::{Parser, Subcommand};

mod service;
mod team;
mod token;
mod user;

#[derive(Debug, Parser)]
#[command(name = "darkroom-app", about = "Darkroom CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    User(user::UserCommand),
    Service(service::ServiceCommand),
    Team(team::TeamCommand),
    Token(token::TokenCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::User(command) => user::run(command).await,
            Commands::Service(command) => service::run(command).await,
            Commands::Team(command) => team::run(command).await,
            Commands::Token(command) => token::run(command).await,
        }
    }
}

pub(crate) async fn connect(database_url: &str) -> Result<sqlx::PgPool, String> {
    darkroom_app::database::connect(database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))
}
