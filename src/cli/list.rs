//! List command - prints one event log statement per stored invitation

use clap::Args;

use crate::domain::invitation::InvitationQuery;
use crate::domain::team::TeamId;
use crate::domain::user::UserId;
use crate::state::AppState;

/// Arguments for the list command
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Only invitations to this team
    #[arg(long)]
    pub team_id: Option<String>,

    /// Only invitations for this user
    #[arg(long)]
    pub user_id: Option<String>,

    /// Maximum number of invitations to print
    #[arg(long)]
    pub limit: Option<usize>,
}

impl ListArgs {
    fn query(&self) -> anyhow::Result<InvitationQuery> {
        let mut query = InvitationQuery::new();

        if let Some(ref team_id) = self.team_id {
            query = query.with_team(TeamId::new(team_id)?);
        }
        if let Some(ref user_id) = self.user_id {
            query = query.with_user(UserId::new(user_id)?);
        }
        if let Some(limit) = self.limit {
            query = query.with_limit(limit);
        }

        Ok(query)
    }
}

/// Run the list command
pub async fn run(args: ListArgs) -> anyhow::Result<()> {
    let state = super::bootstrap().await?;

    for line in execute(&state, &args).await? {
        println!("{}", line);
    }

    Ok(())
}

/// Collect the statements of the matching invitations
pub async fn execute(state: &AppState, args: &ListArgs) -> anyhow::Result<Vec<String>> {
    let invitations = state.invitation_service.list(Some(args.query()?)).await?;

    Ok(invitations
        .iter()
        .map(|invitation| invitation.event_log_statement())
        .collect())
}
