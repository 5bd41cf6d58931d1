//! In-memory implementation of ResourceStore for testing and development

use crate::core::error::StorageError;
use crate::core::resource::Resource;
use crate::core::store::ResourceStore;
use async_trait::async_trait;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

const BACKEND: &str = "in-memory";

/// Unique index key: field name plus the value's text form
type UniqueKey = (&'static str, String);

struct Row<T> {
    entity: T,
    keys: Vec<UniqueKey>,
}

struct Table<T> {
    next_id: i64,
    rows: IndexMap<i64, Row<T>>,
    unique: HashMap<UniqueKey, i64>,
}

/// In-memory resource store
///
/// Useful for testing and development. Uses RwLock for thread-safe access.
/// Identifiers come from a per-store sequence starting at 1; rows keep
/// insertion order. Unique fields are indexed and checked under the same
/// write guard as the insert, so racing writers cannot both succeed.
/// Null values are not indexed and never collide.
pub struct InMemoryStore<T> {
    table: Arc<RwLock<Table<T>>>,
}

impl<T> Clone for InMemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
        }
    }
}

impl<T: Resource> InMemoryStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(Table {
                next_id: 0,
                rows: IndexMap::new(),
                unique: HashMap::new(),
            })),
        }
    }

    fn unique_keys(entity: &T) -> Result<Vec<UniqueKey>, StorageError> {
        let values = entity
            .unique_values()
            .map_err(|e| StorageError::Serialization {
                resource: T::SCHEMA.name,
                message: e.to_string(),
            })?;

        Ok(values
            .into_iter()
            .filter_map(|(field, value)| value.to_key().map(|key| (field, key)))
            .collect())
    }

    fn violation(field: &str) -> StorageError {
        StorageError::UniqueViolation {
            resource: T::SCHEMA.name,
            field: Some(field.to_string()),
        }
    }
}

impl<T: Resource> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Resource> ResourceStore<T> for InMemoryStore<T> {
    async fn insert(&self, mut entity: T) -> Result<T, StorageError> {
        let keys = Self::unique_keys(&entity)?;

        let mut table = self
            .table
            .write()
            .map_err(|e| StorageError::backend(BACKEND, format!("Failed to acquire write lock: {}", e)))?;

        if let Some((field, _)) = keys.iter().find(|key| table.unique.contains_key(*key)) {
            return Err(Self::violation(field));
        }

        table.next_id += 1;
        let id = table.next_id;
        entity.set_id(id);

        for key in &keys {
            table.unique.insert(key.clone(), id);
        }
        table.rows.insert(
            id,
            Row {
                entity: entity.clone(),
                keys,
            },
        );

        Ok(entity)
    }

    async fn find(&self, id: i64) -> Result<Option<T>, StorageError> {
        let table = self
            .table
            .read()
            .map_err(|e| StorageError::backend(BACKEND, format!("Failed to acquire read lock: {}", e)))?;

        Ok(table.rows.get(&id).map(|row| row.entity.clone()))
    }

    async fn find_all(&self) -> Result<Vec<T>, StorageError> {
        let table = self
            .table
            .read()
            .map_err(|e| StorageError::backend(BACKEND, format!("Failed to acquire read lock: {}", e)))?;

        Ok(table.rows.values().map(|row| row.entity.clone()).collect())
    }

    async fn replace(&self, entity: T) -> Result<Option<T>, StorageError> {
        let Some(id) = entity.id() else {
            return Ok(None);
        };
        let keys = Self::unique_keys(&entity)?;

        let mut table = self
            .table
            .write()
            .map_err(|e| StorageError::backend(BACKEND, format!("Failed to acquire write lock: {}", e)))?;

        if !table.rows.contains_key(&id) {
            return Ok(None);
        }

        if let Some((field, _)) = keys
            .iter()
            .find(|key| table.unique.get(*key).is_some_and(|owner| *owner != id))
        {
            return Err(Self::violation(field));
        }

        let Table { rows, unique, .. } = &mut *table;
        if let Some(row) = rows.get_mut(&id) {
            for key in &row.keys {
                unique.remove(key);
            }
            for key in &keys {
                unique.insert(key.clone(), id);
            }
            row.entity = entity.clone();
            row.keys = keys;
        }

        Ok(Some(entity))
    }

    async fn remove(&self, id: i64) -> Result<Option<T>, StorageError> {
        let mut table = self
            .table
            .write()
            .map_err(|e| StorageError::backend(BACKEND, format!("Failed to acquire write lock: {}", e)))?;

        let Some(row) = table.rows.shift_remove(&id) else {
            return Ok(None);
        };
        for key in &row.keys {
            table.unique.remove(key);
        }

        Ok(Some(row.entity))
    }

    async fn count(&self) -> Result<usize, StorageError> {
        let table = self
            .table
            .read()
            .map_err(|e| StorageError::backend(BACKEND, format!("Failed to acquire read lock: {}", e)))?;

        Ok(table.rows.len())
    }
}
