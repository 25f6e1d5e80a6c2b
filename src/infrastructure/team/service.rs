//! Team service for team management

use std::sync::Arc;

use tracing::{debug, info};
use validator::Validate;

use crate::domain::team::{Team, TeamId, TeamQuery, TeamRepository};
use crate::domain::DomainError;

/// Request for creating a new team
#[derive(Debug, Clone, Validate)]
pub struct CreateTeamRequest {
    /// Explicit ID; a random one is generated when absent
    pub id: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

impl CreateTeamRequest {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

/// Team service for managing teams
#[derive(Debug)]
pub struct TeamService<R: TeamRepository> {
    repository: Arc<R>,
}

impl<R: TeamRepository> TeamService<R> {
    /// Create a new team service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create a new team
    pub async fn create(&self, request: CreateTeamRequest) -> Result<Team, DomainError> {
        info!(name = %request.name, "Creating team");

        request
            .validate()
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let team_id = match request.id {
            Some(ref id) => TeamId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))?,
            None => TeamId::generate(),
        };

        let team =
            Team::new(team_id, &request.name).map_err(|e| DomainError::validation(e.to_string()))?;

        self.repository.create(team).await
    }

    /// Get a team by ID
    pub async fn get(&self, id: &str) -> Result<Option<Team>, DomainError> {
        let team_id = TeamId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))?;
        self.repository.get(&team_id).await
    }

    /// Find the first team with the given display name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Team>, DomainError> {
        let query = TeamQuery::new().with_name(name).with_limit(1);
        Ok(self.repository.list(&query).await?.into_iter().next())
    }

    /// Look a team up by display name, creating it when missing
    pub async fn get_or_create_by_name(&self, name: &str) -> Result<Team, DomainError> {
        if let Some(team) = self.find_by_name(name).await? {
            debug!(team_id = %team.id(), "Team already exists");
            return Ok(team);
        }

        self.create(CreateTeamRequest::named(name)).await
    }

    /// List teams
    pub async fn list(&self, query: Option<TeamQuery>) -> Result<Vec<Team>, DomainError> {
        self.repository.list(&query.unwrap_or_default()).await
    }
}
