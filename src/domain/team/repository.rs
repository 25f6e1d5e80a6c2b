//! Team repository trait

use async_trait::async_trait;

use super::entity::{Team, TeamId};
use crate::domain::DomainError;

/// Query parameters for listing teams
#[derive(Debug, Clone, Default)]
pub struct TeamQuery {
    /// Filter by display name (case-insensitive exact match)
    pub name: Option<String>,
    /// Maximum number of results
    pub limit: Option<usize>,
    /// Offset for pagination
    pub offset: Option<usize>,
}

impl TeamQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
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

    /// Check whether a team passes the filters of this query
    pub fn matches(&self, team: &Team) -> bool {
        match self.name {
            Some(ref name) => team.name().eq_ignore_ascii_case(name.trim()),
            None => true,
        }
    }
}

/// Repository for managing teams
#[async_trait]
pub trait TeamRepository: Send + Sync + std::fmt::Debug {
    /// Get a team by ID
    async fn get(&self, id: &TeamId) -> Result<Option<Team>, DomainError>;

    /// Create a new team
    async fn create(&self, team: Team) -> Result<Team, DomainError>;

    /// Update an existing team
    async fn update(&self, team: Team) -> Result<Team, DomainError>;

    /// List teams sorted by name
    async fn list(&self, query: &TeamQuery) -> Result<Vec<Team>, DomainError>;

    /// Check if a team exists
    async fn exists(&self, id: &TeamId) -> Result<bool, DomainError> {
        Ok(self.get(id).await?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_name_filter_ignores_case() {
        let team = Team::new(TeamId::generate(), "A fine team").unwrap();

        assert!(TeamQuery::new().matches(&team));
        assert!(TeamQuery::new().with_name("a FINE team").matches(&team));
        assert!(TeamQuery::new().with_name(" A fine team ").matches(&team));
        assert!(!TeamQuery::new().with_name("Another team").matches(&team));
    }
}
