//! Invite command - invites a user to a team by email

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::domain::invitation::Invitation;
use crate::domain::team::{Team, TeamId};
use crate::domain::user::{User, UserId};
use crate::state::AppState;

/// Arguments for the invite command
#[derive(Args, Debug, Clone)]
pub struct InviteArgs {
    /// Team name; the team is created when unknown
    #[arg(long)]
    pub team: String,

    /// Email address of the invitee; the user is registered when unknown
    #[arg(long)]
    pub email: String,

    /// Only print what would happen, persist nothing
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

/// Run the invite command
pub async fn run(args: InviteArgs) -> anyhow::Result<()> {
    let state = super::bootstrap().await?;

    for line in execute(&state, &args).await? {
        println!("{}", line);
    }

    Ok(())
}

/// Build and save the invitation, returning the statements to print
pub async fn execute(state: &AppState, args: &InviteArgs) -> anyhow::Result<Vec<String>> {
    let (team, user) = if args.dry_run {
        (preview_team(state, &args.team).await?, preview_user(state, &args.email).await?)
    } else {
        (
            state.team_service.get_or_create_by_name(&args.team).await?,
            state.user_service.get_or_register(&args.email).await?,
        )
    };

    let mut invitation = Invitation::new(Some(team), Some(user));
    let mut lines = vec![invitation.event_log_statement()];

    if args.dry_run {
        info!("Dry run, invitation not saved");
        return Ok(lines);
    }

    state
        .invitation_service
        .save(&mut invitation)
        .await
        .context("failed to save invitation")?;

    lines.push(invitation.event_log_statement());
    Ok(lines)
}

async fn preview_team(state: &AppState, name: &str) -> anyhow::Result<Team> {
    match state.team_service.find_by_name(name).await? {
        Some(team) => Ok(team),
        None => Ok(Team::new(TeamId::generate(), name)?),
    }
}

async fn preview_user(state: &AppState, email: &str) -> anyhow::Result<User> {
    match state.user_service.get_by_email(email).await? {
        Some(user) => Ok(user),
        None => Ok(User::new(UserId::generate(), email)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(dry_run: bool) -> InviteArgs {
        InviteArgs {
            team: "A fine team".to_string(),
            email: "rookie@example.com".to_string(),
            dry_run,
        }
    }

    #[tokio::test]
    async fn test_invite_prints_pending_then_saved() {
        let state = AppState::in_memory().await.unwrap();

        let lines = execute(&state, &args(false)).await.unwrap();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("PENDING"));
        assert_eq!(lines[1], "rookie@example.com was invited to A fine team");

        let user = state
            .user_service
            .get_by_email("rookie@example.com")
            .await
            .unwrap()
            .unwrap();
        assert!(user.is_invited());
    }

    #[tokio::test]
    async fn test_dry_run_persists_nothing() {
        let state = AppState::in_memory().await.unwrap();

        let lines = execute(&state, &args(true)).await.unwrap();

        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("PENDING"));
        assert!(state.team_service.list(None).await.unwrap().is_empty());
        assert!(state
            .user_service
            .get_by_email("rookie@example.com")
            .await
            .unwrap()
            .is_none());
        assert!(state.invitation_service.list(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invite_rejects_bad_email() {
        let state = AppState::in_memory().await.unwrap();
        let args = InviteArgs {
            email: "nope".to_string(),
            ..args(false)
        };

        assert!(execute(&state, &args).await.is_err());
        assert!(state.invitation_service.list(None).await.unwrap().is_empty());
    }
}
