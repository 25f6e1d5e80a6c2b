//! Application state for shared services

use std::sync::Arc;

use tracing::info;

use crate::config::AppConfig;
use crate::domain::invitation::Invitation;
use crate::domain::team::Team;
use crate::domain::user::User;
use crate::domain::DomainError;
use crate::infrastructure::invitation::{InvitationService, StorageInvitationRepository};
use crate::infrastructure::storage::StorageFactory;
use crate::infrastructure::team::{StorageTeamRepository, TeamService};
use crate::infrastructure::user::{StorageUserRepository, UserService};

pub type AppTeamService = TeamService<StorageTeamRepository>;
pub type AppUserService = UserService<StorageUserRepository>;
pub type AppInvitationService =
    InvitationService<StorageInvitationRepository, StorageUserRepository, StorageTeamRepository>;

/// Services wired against one storage backend
#[derive(Clone)]
pub struct AppState {
    pub team_service: Arc<AppTeamService>,
    pub user_service: Arc<AppUserService>,
    pub invitation_service: Arc<AppInvitationService>,
}

impl AppState {
    /// Wire every service to storages handed out by the factory
    pub async fn from_factory(factory: &StorageFactory) -> Result<Self, DomainError> {
        let teams = Arc::new(StorageTeamRepository::new(
            factory.create::<Team>("teams").await?,
        ));
        let users = Arc::new(StorageUserRepository::new(
            factory.create::<User>("users").await?,
        ));
        let invitations = Arc::new(StorageInvitationRepository::new(
            factory.create::<Invitation>("invitations").await?,
        ));

        Ok(Self {
            team_service: Arc::new(TeamService::new(teams.clone())),
            user_service: Arc::new(UserService::new(users.clone())),
            invitation_service: Arc::new(InvitationService::new(invitations, users, teams)),
        })
    }

    /// State backed by in-memory storage
    pub async fn in_memory() -> Result<Self, DomainError> {
        Self::from_factory(&StorageFactory::in_memory()).await
    }
}

/// Create the application state for the configured backend
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let storage_config = config.storage_config()?;
    let factory = StorageFactory::connect(&storage_config).await?;

    info!(storage = %factory.storage_type(), "Creating application state");

    Ok(AppState::from_factory(&factory).await?)
}
