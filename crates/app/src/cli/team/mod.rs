use clap::{Args, Subcommand};

mod add;

#[derive(Debug, Args)]
pub(crate) struct TeamCommand {
    #[command(subcommand)]
    command: TeamSubcommand,
}

#[derive(Debug, Subcommand)]
enum TeamSubcommand {
    Add(add::AddTeamMemberArgs),
}

pub(crate) async fn run(command: TeamCommand) -> Result<(), String> {
    match command.command {
        TeamSubcommand::Add(args) => add::run(args).await,
    }
}
