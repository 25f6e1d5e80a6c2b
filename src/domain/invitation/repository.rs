//! Invitation repository trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::{Invitation, InvitationId, RecordState};
use crate::domain::team::TeamId;
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Query parameters for listing invitations
#[derive(Debug, Clone, Default)]
pub struct InvitationQuery {
    /// Only invitations to this team
    pub team_id: Option<TeamId>,
    /// Only invitations for this user
    pub user_id: Option<UserId>,
    /// Filter by persistence state
    pub state: Option<RecordState>,
    /// Maximum number of results
    pub limit: Option<usize>,
    /// Offset for pagination
    pub offset: Option<usize>,
}

impl InvitationQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_team(mut self, team_id: TeamId) -> Self {
        self.team_id = Some(team_id);
        self
    }

    pub fn with_user(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn with_state(mut self, state: RecordState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Check whether an invitation passes the filters of this query
    pub fn matches(&self, invitation: &Invitation) -> bool {
        if let Some(ref team_id) = self.team_id {
            if invitation.team().map(|t| t.id()) != Some(team_id) {
                return false;
            }
        }

        if let Some(ref user_id) = self.user_id {
            if invitation.user().map(|u| u.id()) != Some(user_id) {
                return false;
            }
        }

        if let Some(state) = self.state {
            if invitation.state() != state {
                return false;
            }
        }

        true
    }
}

/// Repository for persisted invitations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait InvitationRepository: Send + Sync {
    /// Get an invitation by ID
    async fn get(&self, id: &InvitationId) -> Result<Option<Invitation>, DomainError>;

    /// Store a new invitation
    async fn create(&self, invitation: Invitation) -> Result<Invitation, DomainError>;

    /// Replace a stored invitation
    async fn update(&self, invitation: Invitation) -> Result<Invitation, DomainError>;

    /// Remove an invitation, returns true if it existed
    async fn delete(&self, id: &InvitationId) -> Result<bool, DomainError>;

    /// List invitations oldest first
    async fn list(&self, query: &InvitationQuery) -> Result<Vec<Invitation>, DomainError>;
}
