//! Storage-backed user repository implementation

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::storage::Storage;
use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;

/// Storage-backed implementation of UserRepository
///
/// Email lookups scan the stored users.
#[derive(Debug)]
pub struct StorageUserRepository {
    storage: Arc<dyn Storage<User>>,
}

impl StorageUserRepository {
    /// Create a new storage-backed repository
    pub fn new(storage: Arc<dyn Storage<User>>) -> Self {
        Self { storage }
    }

    async fn ensure_email_free(&self, user: &User) -> Result<(), DomainError> {
        match self.get_by_email(user.email()).await? {
            Some(existing) if existing.id() != user.id() => Err(DomainError::conflict(format!(
                "Email '{}' is already taken",
                user.email()
            ))),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl UserRepository for StorageUserRepository {
    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        self.storage.get(id).await
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .storage
            .list()
            .await?
            .into_iter()
            .find(|user| user.has_email(email)))
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        if self.storage.exists(user.id()).await? {
            return Err(DomainError::conflict(format!(
                "User '{}' already exists",
                user.id()
            )));
        }

        self.ensure_email_free(&user).await?;
        self.storage.create(user).await
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        if !self.storage.exists(user.id()).await? {
            return Err(DomainError::not_found(format!(
                "User '{}' not found",
                user.id()
            )));
        }

        self.ensure_email_free(&user).await?;
        self.storage.update(user).await
    }

    async fn save(&self, user: User) -> Result<User, DomainError> {
        self.ensure_email_free(&user).await?;
        self.storage.save(user).await
    }

    async fn list(&self, invited: Option<bool>) -> Result<Vec<User>, DomainError> {
        let mut users: Vec<User> = self
            .storage
            .list()
            .await?
            .into_iter()
            .filter(|user| invited.is_none_or(|flag| user.is_invited() == flag))
            .collect();

        users.sort_by(|a, b| a.email().cmp(b.email()));
        Ok(users)
    }

    async fn exists(&self, id: &UserId) -> Result<bool, DomainError> {
        self.storage.exists(id).await
    }
}
