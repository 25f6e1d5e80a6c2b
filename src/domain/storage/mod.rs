//! Storage domain
//!
//! Backends persist whole entities addressed by a string key. Repositories
//! build queries and business rules on top; a backend only knows keys.

use std::fmt::Debug;
use std::hash::Hash;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use crate::domain::DomainError;

#[cfg(test)]
pub mod testing;

/// Identifier a backend can address an entity by
pub trait StorageKey: Clone + Debug + Eq + Hash + Send + Sync {
    fn as_str(&self) -> &str;
}

/// Entity that can be round-tripped through a backend as a JSON document
pub trait StorageEntity: Clone + Debug + Serialize + DeserializeOwned + Send + Sync {
    type Key: StorageKey;

    fn key(&self) -> &Self::Key;
}

/// Keyed document store for one entity type
///
/// `create` fails with `Conflict` on an existing key and `update` fails with
/// `NotFound` on a missing one. `save` never fails for either reason.
#[async_trait]
pub trait Storage<E>: Debug + Send + Sync
where
    E: StorageEntity + 'static,
{
    async fn get(&self, key: &E::Key) -> Result<Option<E>, DomainError>;

    /// All stored entities, in no particular order
    async fn list(&self) -> Result<Vec<E>, DomainError>;

    async fn create(&self, entity: E) -> Result<E, DomainError>;

    async fn update(&self, entity: E) -> Result<E, DomainError>;

    /// Insert or replace
    async fn save(&self, entity: E) -> Result<E, DomainError>;

    /// Returns false when nothing was stored under the key
    async fn delete(&self, key: &E::Key) -> Result<bool, DomainError>;

    async fn exists(&self, key: &E::Key) -> Result<bool, DomainError> {
        Ok(self.get(key).await?.is_some())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.list().await?.len())
    }

    async fn clear(&self) -> Result<(), DomainError>;
}
