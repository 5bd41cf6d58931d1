//! Generic resource manager
//!
//! One implementation of add / get / list / update / delete shared by every
//! resource type. The resource's schema supplies the constraints and the
//! manager enforces them the same way for all of them.

use crate::core::error::{ResourceError, StorageError, ValidationError};
use crate::core::relation::Relation;
use crate::core::resource::{Resource, ResourceSchema};
use crate::core::store::ResourceStore;
use chrono::Utc;
use std::sync::Arc;
use validator::Validate;

/// CRUD operations for one resource type over a [`ResourceStore`]
///
/// Cheap to clone; clones share the same store and relations.
pub struct ResourceManager<T: Resource> {
    store: Arc<dyn ResourceStore<T>>,
    relations: Vec<Arc<dyn Relation<T>>>,
}

impl<T: Resource> Clone for ResourceManager<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            relations: self.relations.clone(),
        }
    }
}

impl<T: Resource> ResourceManager<T> {
    /// Create a manager over the given store
    pub fn new(store: Arc<dyn ResourceStore<T>>) -> Self {
        Self {
            store,
            relations: Vec::new(),
        }
    }

    /// Register an eagerly loaded relation
    pub fn with_relation(mut self, relation: impl Relation<T> + 'static) -> Self {
        self.relations.push(Arc::new(relation));
        self
    }

    /// Schema of the managed resource
    pub fn schema(&self) -> ResourceSchema {
        T::SCHEMA
    }

    /// Underlying store
    pub fn store(&self) -> &Arc<dyn ResourceStore<T>> {
        &self.store
    }

    /// Store a new record
    ///
    /// Server-owned fields are assigned before validation. The store assigns
    /// the identifier and rejects unique collisions.
    pub async fn add(&self, mut candidate: T) -> Result<T, ResourceError> {
        tracing::debug!(resource = T::SCHEMA.name, "add");

        candidate.on_add(Utc::now());
        self.check_fields(&candidate).map_err(|e| self.rejected("add", e))?;
        self.resolve_relations(&mut candidate)
            .await
            .map_err(|e| self.rejected("add", e))?;

        let mut stored = self
            .store
            .insert(candidate)
            .await
            .map_err(|e| self.rejected("add", e.into()))?;
        self.load_relations(&mut stored).await?;

        tracing::info!(resource = T::SCHEMA.name, id = ?stored.id(), "added");
        Ok(stored)
    }

    /// Get a record by identifier
    pub async fn get_by_id(&self, id: i64) -> Result<Option<T>, ResourceError> {
        tracing::debug!(resource = T::SCHEMA.name, id, "get");

        let found = self
            .store
            .find(id)
            .await
            .map_err(|e| self.rejected("get", e.into()))?;

        match found {
            Some(mut entity) => {
                self.load_relations(&mut entity).await?;
                Ok(Some(entity))
            }
            None => Ok(None),
        }
    }

    /// Snapshot of all stored records, in insertion order
    pub async fn get_all(&self) -> Result<Vec<T>, ResourceError> {
        tracing::debug!(resource = T::SCHEMA.name, "get all");

        let mut entities = self
            .store
            .find_all()
            .await
            .map_err(|e| self.rejected("get all", e.into()))?;
        for entity in entities.iter_mut() {
            self.load_relations(entity).await?;
        }
        Ok(entities)
    }

    /// Overwrite a stored record
    ///
    /// Natural identifiers must match the stored values. Creation timestamps
    /// are carried over from the stored record and update timestamps refreshed.
    pub async fn update(&self, mut modified: T) -> Result<T, ResourceError> {
        let resource = T::SCHEMA.name;
        let id = modified
            .id()
            .ok_or_else(|| self.rejected("update", ValidationError::MissingId { resource }.into()))?;

        tracing::debug!(resource, id, "update");

        let stored = self
            .store
            .find(id)
            .await
            .map_err(|e| self.rejected("update", e.into()))?
            .ok_or(ResourceError::NotFound { resource, id })?;

        self.check_natural_ids(&stored, &modified)
            .map_err(|e| self.rejected("update", e))?;
        modified.on_update(&stored, Utc::now());
        self.check_fields(&modified)
            .map_err(|e| self.rejected("update", e))?;
        self.resolve_relations(&mut modified)
            .await
            .map_err(|e| self.rejected("update", e))?;

        let mut updated = self
            .store
            .replace(modified)
            .await
            .map_err(|e| self.rejected("update", e.into()))?
            .ok_or(ResourceError::NotFound { resource, id })?;
        self.load_relations(&mut updated).await?;

        tracing::info!(resource, id, "updated");
        Ok(updated)
    }

    /// Remove a record, returning it as it was before removal
    pub async fn delete_by_id(&self, id: i64) -> Result<Option<T>, ResourceError> {
        tracing::debug!(resource = T::SCHEMA.name, id, "delete");

        let removed = self
            .store
            .remove(id)
            .await
            .map_err(|e| self.rejected("delete", e.into()))?;

        match removed {
            Some(mut entity) => {
                self.load_relations(&mut entity).await?;
                tracing::info!(resource = T::SCHEMA.name, id, "deleted");
                Ok(Some(entity))
            }
            None => Ok(None),
        }
    }

    fn check_fields(&self, entity: &T) -> Result<(), ResourceError> {
        entity
            .validate()
            .map_err(|report| ValidationError::from_report(T::SCHEMA.name, &report).into())
    }

    fn check_natural_ids(&self, stored: &T, modified: &T) -> Result<(), ResourceError> {
        let resource = T::SCHEMA.name;
        let serialization = |e: serde_json::Error| {
            ResourceError::Storage(StorageError::Serialization {
                resource,
                message: e.to_string(),
            })
        };

        let before = stored.natural_id_values().map_err(serialization)?;
        let after = modified.natural_id_values().map_err(serialization)?;

        for ((field, old), (_, new)) in before.iter().zip(after.iter()) {
            if old != new {
                return Err(ValidationError::Immutable {
                    resource,
                    field: field.to_string(),
                }
                .into());
            }
        }
        Ok(())
    }

    async fn resolve_relations(&self, entity: &mut T) -> Result<(), ResourceError> {
        for relation in &self.relations {
            relation.resolve(entity).await?;
        }
        Ok(())
    }

    async fn load_relations(&self, entity: &mut T) -> Result<(), ResourceError> {
        for relation in &self.relations {
            relation.load(entity).await?;
        }
        Ok(())
    }

    fn rejected(&self, operation: &str, err: ResourceError) -> ResourceError {
        match &err {
            ResourceError::Validation(e) => {
                tracing::warn!(resource = T::SCHEMA.name, operation, error = %e, "rejected");
            }
            ResourceError::Storage(e) => {
                tracing::error!(resource = T::SCHEMA.name, operation, error = %e, "storage failure");
            }
            ResourceError::NotFound { .. } => {}
        }
        err
    }
}
