use clap::Parser;
use team_invitations::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Invite(args) => cli::invite::run(args).await,
        Command::List(args) => cli::list::run(args).await,
    }
}
