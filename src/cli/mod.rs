//! CLI module for team invitations
//!
//! Provides subcommands:
//! - `invite`: invite a user to a team by email
//! - `list`: print the event log statement of stored invitations

pub mod invite;
pub mod list;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;
use crate::state::{create_app_state, AppState};

/// Team invitations - invite users to teams and audit the results
#[derive(Parser)]
#[command(name = "team-invitations")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Invite a user to a team
    Invite(invite::InviteArgs),

    /// List stored invitations
    List(list::ListArgs),
}

/// Load configuration, install logging and wire the services
async fn bootstrap() -> anyhow::Result<AppState> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("failed to load configuration")?;
    logging::init_logging(&config.logging);

    create_app_state(&config).await
}
