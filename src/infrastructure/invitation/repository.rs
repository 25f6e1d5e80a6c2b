//! Storage-backed invitation repository implementation

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::invitation::{Invitation, InvitationId, InvitationQuery, InvitationRepository};
use crate::domain::storage::Storage;
use crate::domain::DomainError;

/// Storage-backed implementation of InvitationRepository
#[derive(Debug)]
pub struct StorageInvitationRepository {
    storage: Arc<dyn Storage<Invitation>>,
}

impl StorageInvitationRepository {
    /// Create a new storage-backed repository
    pub fn new(storage: Arc<dyn Storage<Invitation>>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl InvitationRepository for StorageInvitationRepository {
    async fn get(&self, id: &InvitationId) -> Result<Option<Invitation>, DomainError> {
        self.storage.get(id).await
    }

    async fn create(&self, invitation: Invitation) -> Result<Invitation, DomainError> {
        if self.storage.exists(invitation.id()).await? {
            return Err(DomainError::conflict(format!(
                "Invitation '{}' already exists",
                invitation.id()
            )));
        }

        self.storage.create(invitation).await
    }

    async fn update(&self, invitation: Invitation) -> Result<Invitation, DomainError> {
        if !self.storage.exists(invitation.id()).await? {
            return Err(DomainError::not_found(format!(
                "Invitation '{}' not found",
                invitation.id()
            )));
        }

        self.storage.update(invitation).await
    }

    async fn delete(&self, id: &InvitationId) -> Result<bool, DomainError> {
        self.storage.delete(id).await
    }

    async fn list(&self, query: &InvitationQuery) -> Result<Vec<Invitation>, DomainError> {
        let mut result: Vec<Invitation> = self
            .storage
            .list()
            .await?
            .into_iter()
            .filter(|invitation| query.matches(invitation))
            .collect();

        result.sort_by_key(|invitation| invitation.created_at());

        let offset = query.offset.unwrap_or(0);
        let limit = query.limit.unwrap_or(usize::MAX);

        Ok(result.into_iter().skip(offset).take(limit).collect())
    }
}
