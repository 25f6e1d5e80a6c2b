//! Invitation service
//!
//! Owns the save workflow: validate, persist the invitation, persist the
//! invited user, then hand the saved state back to the caller. A new
//! invitation whose user cannot be persisted is deleted again so no half
//! saved invitation is left behind.

use std::sync::Arc;

use tracing::{error, info, instrument, warn};

use crate::domain::invitation::{Invitation, InvitationId, InvitationQuery, InvitationRepository};
use crate::domain::team::{TeamId, TeamRepository};
use crate::domain::user::{UserId, UserRepository};
use crate::domain::DomainError;

/// Tracing target for event log statements
pub const EVENT_LOG_TARGET: &str = "event_log";

/// Invitation service for saving and querying invitations
pub struct InvitationService<I, U, T>
where
    I: InvitationRepository,
    U: UserRepository,
    T: TeamRepository,
{
    invitations: Arc<I>,
    users: Arc<U>,
    teams: Arc<T>,
}

impl<I, U, T> InvitationService<I, U, T>
where
    I: InvitationRepository,
    U: UserRepository,
    T: TeamRepository,
{
    /// Create a new invitation service
    pub fn new(invitations: Arc<I>, users: Arc<U>, teams: Arc<T>) -> Self {
        Self {
            invitations,
            users,
            teams,
        }
    }

    /// Persist an invitation and flag its user as invited
    ///
    /// The stored version of the user is flagged, so an earlier first
    /// invitation time survives stale copies. The caller's invitation only
    /// changes when every write went through.
    #[instrument(skip(self, invitation), fields(invitation_id = %invitation.id()))]
    pub async fn save(&self, invitation: &mut Invitation) -> Result<(), DomainError> {
        if let Err(e) = invitation.validate() {
            warn!(target: EVENT_LOG_TARGET, "{}", invitation.event_log());
            return Err(DomainError::validation(e.to_string()));
        }

        let current_user = match invitation.user() {
            Some(user) => self.users.get(user.id()).await?,
            None => None,
        };

        let snapshot = invitation
            .saved_snapshot(current_user)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let was_new = invitation.is_new_record();

        let stored = if was_new {
            self.invitations.create(snapshot).await?
        } else {
            self.invitations.update(snapshot).await?
        };

        if let Some(user) = stored.user().cloned() {
            if let Err(e) = self.users.save(user).await {
                if was_new {
                    self.roll_back(stored.id()).await;
                }
                return Err(e);
            }
        }

        *invitation = stored;
        info!(target: EVENT_LOG_TARGET, "{}", invitation.event_log());

        Ok(())
    }

    async fn roll_back(&self, id: &InvitationId) {
        match self.invitations.delete(id).await {
            Ok(_) => warn!(invitation_id = %id, "Rolled back invitation after user save failed"),
            Err(e) => error!(invitation_id = %id, error = %e, "Failed to roll back invitation"),
        }
    }

    /// Get an invitation by ID
    pub async fn get(&self, id: &str) -> Result<Option<Invitation>, DomainError> {
        let invitation_id =
            InvitationId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))?;
        self.invitations.get(&invitation_id).await
    }

    /// List invitations
    pub async fn list(&self, query: Option<InvitationQuery>) -> Result<Vec<Invitation>, DomainError> {
        self.invitations.list(&query.unwrap_or_default()).await
    }

    /// Invite a stored user to a stored team
    pub async fn invite(&self, team_id: &str, user_id: &str) -> Result<Invitation, DomainError> {
        let team_id = TeamId::new(team_id).map_err(|e| DomainError::invalid_id(e.to_string()))?;
        let user_id = UserId::new(user_id).map_err(|e| DomainError::invalid_id(e.to_string()))?;

        let team = self
            .teams
            .get(&team_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Team '{}' not found", team_id)))?;

        let user = self
            .users
            .get(&user_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", user_id)))?;

        let mut invitation = Invitation::new(Some(team), Some(user));
        self.save(&mut invitation).await?;

        Ok(invitation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::invitation::{MockInvitationRepository, RecordState};
    use crate::domain::team::Team;
    use crate::domain::user::{MockUserRepository, User};
    use crate::infrastructure::invitation::StorageInvitationRepository;
    use crate::infrastructure::storage::InMemoryStorage;
    use crate::infrastructure::team::StorageTeamRepository;
    use crate::infrastructure::user::StorageUserRepository;

    type InMemoryService =
        InvitationService<StorageInvitationRepository, StorageUserRepository, StorageTeamRepository>;

    struct Fixture {
        service: InMemoryService,
        users: Arc<StorageUserRepository>,
        invitations: Arc<StorageInvitationRepository>,
        teams: Arc<StorageTeamRepository>,
    }

    fn fixture() -> Fixture {
        let invitations = Arc::new(StorageInvitationRepository::new(Arc::new(
            InMemoryStorage::<Invitation>::new(),
        )));
        let users = Arc::new(StorageUserRepository::new(Arc::new(
            InMemoryStorage::<User>::new(),
        )));
        let teams = Arc::new(StorageTeamRepository::new(Arc::new(
            InMemoryStorage::<Team>::new(),
        )));

        Fixture {
            service: InvitationService::new(invitations.clone(), users.clone(), teams.clone()),
            users,
            invitations,
            teams,
        }
    }

    fn fine_team() -> Team {
        Team::new(TeamId::new("fine").unwrap(), "A fine team").unwrap()
    }

    fn rookie() -> User {
        User::new(UserId::new("rookie").unwrap(), "rookie@example.com").unwrap()
    }

    fn empty_teams() -> Arc<StorageTeamRepository> {
        Arc::new(StorageTeamRepository::new(Arc::new(
            InMemoryStorage::<Team>::new(),
        )))
    }

    #[tokio::test]
    async fn test_save_marks_user_invited() {
        let f = fixture();
        let mut invitation = Invitation::new(Some(fine_team()), Some(rookie()));

        f.service.save(&mut invitation).await.unwrap();

        assert!(invitation.user().unwrap().is_invited());
        assert!(!invitation.is_new_record());
        assert_eq!(invitation.state(), RecordState::Saved);
        assert!(invitation.saved_at().is_some());

        let stored_user = f.users.get(rookie().id()).await.unwrap().unwrap();
        assert!(stored_user.is_invited());

        let stored = f.invitations.get(invitation.id()).await.unwrap().unwrap();
        assert!(stored.is_saved());
        assert_eq!(
            stored.event_log_statement(),
            "rookie@example.com was invited to A fine team"
        );
    }

    #[tokio::test]
    async fn test_save_without_team_fails() {
        let f = fixture();
        let mut invitation = Invitation::new(Some(fine_team()), Some(rookie()));
        invitation.set_team(None);

        let result = f.service.save(&mut invitation).await;

        assert!(matches!(result, Err(DomainError::Validation { .. })));
        assert!(!invitation.is_valid());
        assert!(invitation.is_new_record());
        assert!(!invitation.user().unwrap().is_invited());
        assert!(f.invitations.get(invitation.id()).await.unwrap().is_none());
        assert!(f.users.list(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_without_user_fails() {
        let f = fixture();
        let mut invitation = Invitation::new(Some(fine_team()), None);

        let result = f.service.save(&mut invitation).await;

        assert!(matches!(result, Err(DomainError::Validation { .. })));
        assert!(invitation.is_new_record());
        assert!(invitation.event_log_statement().contains("INVALID"));
    }

    #[tokio::test]
    async fn test_stale_user_copy_keeps_first_invited_at() {
        let f = fixture();
        let user = f.users.create(rookie()).await.unwrap();

        let mut first = Invitation::new(Some(fine_team()), Some(user.clone()));
        let mut second = Invitation::new(
            Some(Team::new(TeamId::new("other").unwrap(), "Another team").unwrap()),
            Some(user.clone()),
        );

        f.service.save(&mut first).await.unwrap();
        let first_invited_at = f
            .users
            .get(user.id())
            .await
            .unwrap()
            .unwrap()
            .invited_at();
        assert!(first_invited_at.is_some());

        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        f.service.save(&mut second).await.unwrap();

        let stored = f.users.get(user.id()).await.unwrap().unwrap();
        assert_eq!(stored.invited_at(), first_invited_at);
        assert_eq!(second.user().unwrap().invited_at(), first_invited_at);
    }

    #[tokio::test]
    async fn test_saving_twice_updates() {
        let f = fixture();
        let mut invitation = Invitation::new(Some(fine_team()), Some(rookie()));

        f.service.save(&mut invitation).await.unwrap();
        let first_saved_at = invitation.saved_at();

        f.service.save(&mut invitation).await.unwrap();

        assert!(invitation.is_saved());
        assert_eq!(invitation.saved_at(), first_saved_at);
        assert_eq!(f.service.list(None).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_saving_saved_invitation_calls_update() {
        let mut invitations = MockInvitationRepository::new();
        invitations.expect_create().never();
        invitations
            .expect_update()
            .times(1)
            .returning(|invitation| Ok(invitation));

        let mut users = MockUserRepository::new();
        users.expect_get().returning(|_| Ok(None));
        users.expect_save().times(1).returning(|user| Ok(user));

        let service = InvitationService::new(Arc::new(invitations), Arc::new(users), empty_teams());

        let mut invitation = Invitation::new(Some(fine_team()), Some(rookie()))
            .saved_snapshot(None)
            .unwrap();

        service.save(&mut invitation).await.unwrap();
        assert!(invitation.is_saved());
    }

    #[tokio::test]
    async fn test_user_failure_rolls_back_new_invitation() {
        let mut invitations = MockInvitationRepository::new();
        invitations
            .expect_create()
            .times(1)
            .returning(|invitation| Ok(invitation));
        invitations.expect_delete().times(1).returning(|_| Ok(true));

        let mut users = MockUserRepository::new();
        users.expect_get().returning(|_| Ok(None));
        users
            .expect_save()
            .times(1)
            .returning(|_| Err(DomainError::storage("users table locked")));

        let service = InvitationService::new(Arc::new(invitations), Arc::new(users), empty_teams());
        let mut invitation = Invitation::new(Some(fine_team()), Some(rookie()));

        let result = service.save(&mut invitation).await;

        assert!(matches!(result, Err(DomainError::Storage { .. })));
        assert!(invitation.is_new_record());
        assert!(!invitation.user().unwrap().is_invited());
    }

    #[tokio::test]
    async fn test_user_failure_keeps_previously_saved_invitation() {
        let mut invitations = MockInvitationRepository::new();
        invitations
            .expect_update()
            .times(1)
            .returning(|invitation| Ok(invitation));
        invitations.expect_delete().never();

        let mut users = MockUserRepository::new();
        users.expect_get().returning(|_| Ok(None));
        users
            .expect_save()
            .returning(|_| Err(DomainError::storage("users table locked")));

        let service = InvitationService::new(Arc::new(invitations), Arc::new(users), empty_teams());
        let mut invitation = Invitation::new(Some(fine_team()), Some(rookie()))
            .saved_snapshot(None)
            .unwrap();

        let result = service.save(&mut invitation).await;
        assert!(matches!(result, Err(DomainError::Storage { .. })));
    }

    #[tokio::test]
    async fn test_invitation_failure_never_writes_users() {
        let mut invitations = MockInvitationRepository::new();
        invitations
            .expect_create()
            .returning(|_| Err(DomainError::storage("invitations table locked")));

        let mut users = MockUserRepository::new();
        users.expect_get().returning(|_| Ok(None));
        users.expect_save().never();

        let service = InvitationService::new(Arc::new(invitations), Arc::new(users), empty_teams());
        let mut invitation = Invitation::new(Some(fine_team()), Some(rookie()));

        let result = service.save(&mut invitation).await;

        assert!(matches!(result, Err(DomainError::Storage { .. })));
        assert!(invitation.is_new_record());
        assert!(!invitation.user().unwrap().is_invited());
    }

    #[tokio::test]
    async fn test_invite_loads_references() {
        let f = fixture();
        f.teams.create(fine_team()).await.unwrap();
        f.users.create(rookie()).await.unwrap();

        let invitation = f.service.invite("fine", "rookie").await.unwrap();

        assert!(invitation.is_saved());
        assert!(f.users.get(rookie().id()).await.unwrap().unwrap().is_invited());

        let fetched = f
            .service
            .get(invitation.id().as_str())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.id(), invitation.id());
    }

    #[tokio::test]
    async fn test_invite_missing_references() {
        let f = fixture();
        f.users.create(rookie()).await.unwrap();

        let result = f.service.invite("fine", "rookie").await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));

        f.teams.create(fine_team()).await.unwrap();
        let result = f.service.invite("fine", "nobody").await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));

        assert!(f.service.list(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_rejects_malformed_id() {
        let f = fixture();

        let result = f.service.get("not-a-uuid").await;
        assert!(matches!(result, Err(DomainError::InvalidId { .. })));
    }
}
