//! Storage implementations for different backends

pub mod in_memory;
#[cfg(feature = "postgres")]
pub mod postgres;

pub use in_memory::InMemoryStore;
#[cfg(feature = "postgres")]
pub use postgres::{PostgresStore, ensure_schema};

use crate::config::{StorageBackend, StorageConfig};
use crate::core::error::ConfigError;
use crate::core::resource::Resource;
use crate::core::store::ResourceStore;
use anyhow::Result;
use std::sync::Arc;

/// Hands out stores for the configured backend
///
/// In-memory stores are independent per call, so callers that share a
/// resource between managers must reuse the returned `Arc`.
#[derive(Clone, Default)]
pub enum StoreFactory {
    #[default]
    InMemory,
    #[cfg(feature = "postgres")]
    Postgres(sqlx::PgPool),
}

impl StoreFactory {
    /// Connect to the backend named in the configuration
    pub async fn from_config(config: &StorageConfig) -> Result<Self> {
        match config.backend {
            StorageBackend::InMemory => Ok(StoreFactory::InMemory),
            #[cfg(feature = "postgres")]
            StorageBackend::Postgres => {
                let url = config.url.as_deref().ok_or_else(|| ConfigError::InvalidValue {
                    field: "storage.url".to_string(),
                    value: String::new(),
                    message: "postgres backend requires a connection url".to_string(),
                })?;
                let pool = sqlx::postgres::PgPoolOptions::new()
                    .max_connections(config.max_connections)
                    .connect(url)
                    .await?;
                tracing::info!(max_connections = config.max_connections, "connected to PostgreSQL");
                Ok(StoreFactory::Postgres(pool))
            }
            #[cfg(not(feature = "postgres"))]
            StorageBackend::Postgres => Err(ConfigError::InvalidValue {
                field: "storage.backend".to_string(),
                value: "postgres".to_string(),
                message: "built without the `postgres` feature".to_string(),
            }
            .into()),
        }
    }

    /// Create a store for one resource type
    pub fn store<T: Resource>(&self) -> Arc<dyn ResourceStore<T>> {
        match self {
            StoreFactory::InMemory => Arc::new(InMemoryStore::<T>::new()),
            #[cfg(feature = "postgres")]
            StoreFactory::Postgres(pool) => Arc::new(PostgresStore::<T>::new(pool.clone())),
        }
    }

    /// Backend name for logs
    pub fn backend_name(&self) -> &'static str {
        match self {
            StoreFactory::InMemory => "in-memory",
            #[cfg(feature = "postgres")]
            StoreFactory::Postgres(_) => "postgres",
        }
    }
}
