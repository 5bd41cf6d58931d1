//! Persistence port consumed by the resource manager

use crate::core::error::StorageError;
use crate::core::resource::Resource;
use async_trait::async_trait;

/// Storage trait for one resource type
///
/// Implementations own identifier generation and unique-field enforcement:
/// two writes racing on the same unique value must resolve with exactly one
/// winner and a [`StorageError::UniqueViolation`] for the others.
/// The manager never pre-checks uniqueness.
#[async_trait]
pub trait ResourceStore<T: Resource>: Send + Sync {
    /// Persist a new record and assign its identifier
    async fn insert(&self, entity: T) -> Result<T, StorageError>;

    /// Get a record by identifier
    async fn find(&self, id: i64) -> Result<Option<T>, StorageError>;

    /// Snapshot of all records, in identifier order
    async fn find_all(&self) -> Result<Vec<T>, StorageError>;

    /// Overwrite a stored record
    ///
    /// Returns `None` when no record carries the entity's identifier.
    async fn replace(&self, entity: T) -> Result<Option<T>, StorageError>;

    /// Remove a record, returning it as it was before removal
    async fn remove(&self, id: i64) -> Result<Option<T>, StorageError>;

    /// Number of stored records
    async fn count(&self) -> Result<usize, StorageError> {
        Ok(self.find_all().await?.len())
    }
}
