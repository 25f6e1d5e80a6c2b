//! Storage doubles for tests

use std::marker::PhantomData;

use async_trait::async_trait;

use super::{Storage, StorageEntity};
use crate::domain::DomainError;

/// Backend whose every call fails with the same storage error
#[derive(Debug)]
pub struct FailingStorage<E> {
    message: String,
    _entity: PhantomData<fn() -> E>,
}

impl<E> FailingStorage<E> {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            _entity: PhantomData,
        }
    }

    fn fail<T>(&self) -> Result<T, DomainError> {
        Err(DomainError::storage(self.message.clone()))
    }
}

#[async_trait]
impl<E> Storage<E> for FailingStorage<E>
where
    E: StorageEntity + 'static,
{
    async fn get(&self, _key: &E::Key) -> Result<Option<E>, DomainError> {
        self.fail()
    }

    async fn list(&self) -> Result<Vec<E>, DomainError> {
        self.fail()
    }

    async fn create(&self, _entity: E) -> Result<E, DomainError> {
        self.fail()
    }

    async fn update(&self, _entity: E) -> Result<E, DomainError> {
        self.fail()
    }

    async fn save(&self, _entity: E) -> Result<E, DomainError> {
        self.fail()
    }

    async fn delete(&self, _key: &E::Key) -> Result<bool, DomainError> {
        self.fail()
    }

    async fn clear(&self) -> Result<(), DomainError> {
        self.fail()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::team::{Team, TeamId};

    #[tokio::test]
    async fn test_every_call_fails() {
        let storage = FailingStorage::<Team>::new("offline");
        let id = TeamId::new("fine").unwrap();

        assert!(matches!(storage.get(&id).await, Err(DomainError::Storage { .. })));
        assert!(matches!(storage.exists(&id).await, Err(DomainError::Storage { .. })));
        assert!(matches!(storage.count().await, Err(DomainError::Storage { .. })));
    }
}
