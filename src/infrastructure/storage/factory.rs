//! Storage factory for runtime storage selection

use std::sync::Arc;

use serde::Deserialize;
use sqlx::PgPool;
use tracing::info;

use crate::domain::storage::{Storage, StorageEntity};
use crate::domain::DomainError;

use super::in_memory::InMemoryStorage;
use super::postgres::{connect_pool, PostgresConfig, PostgresStorage};

/// Supported storage types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageType {
    /// In-memory storage (for testing/development)
    #[default]
    #[serde(alias = "inmemory", alias = "in-memory", alias = "in_memory")]
    Memory,
    /// PostgreSQL storage
    #[serde(alias = "postgresql", alias = "pg")]
    Postgres,
}

impl std::fmt::Display for StorageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::Postgres => write!(f, "postgres"),
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// In-memory storage configuration
    InMemory,
    /// PostgreSQL storage configuration
    Postgres(PostgresConfig),
}

impl StorageConfig {
    /// Creates an in-memory storage configuration
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Creates a PostgreSQL configuration from a URL
    pub fn postgres_url(url: impl Into<String>) -> Self {
        Self::Postgres(PostgresConfig::new(url))
    }

    /// Returns the storage type
    pub fn storage_type(&self) -> StorageType {
        match self {
            Self::InMemory => StorageType::Memory,
            Self::Postgres(_) => StorageType::Postgres,
        }
    }
}

#[derive(Debug, Clone)]
enum Backend {
    InMemory,
    Postgres(PgPool),
}

/// Creates storages for every entity type from one configuration
///
/// PostgreSQL storages created by the same factory share a connection pool.
#[derive(Debug, Clone)]
pub struct StorageFactory {
    backend: Backend,
}

impl StorageFactory {
    /// Prepares the backend described by the configuration
    pub async fn connect(config: &StorageConfig) -> Result<Self, DomainError> {
        let backend = match config {
            StorageConfig::InMemory => Backend::InMemory,
            StorageConfig::Postgres(pg_config) => {
                Backend::Postgres(connect_pool(pg_config).await?)
            }
        };

        info!(storage = %config.storage_type(), "Storage backend ready");
        Ok(Self { backend })
    }

    /// A factory that only hands out in-memory storages
    pub fn in_memory() -> Self {
        Self {
            backend: Backend::InMemory,
        }
    }

    pub fn storage_type(&self) -> StorageType {
        match self.backend {
            Backend::InMemory => StorageType::Memory,
            Backend::Postgres(_) => StorageType::Postgres,
        }
    }

    /// Creates the storage for one entity type
    pub async fn create<E>(&self, table_name: &str) -> Result<Arc<dyn Storage<E>>, DomainError>
    where
        E: StorageEntity + 'static,
    {
        match &self.backend {
            Backend::InMemory => Ok(Arc::new(InMemoryStorage::<E>::new())),
            Backend::Postgres(pool) => {
                let storage = PostgresStorage::<E>::new(pool.clone(), table_name)?;
                storage.ensure_table().await?;
                Ok(Arc::new(storage))
            }
        }
    }
}
