//! Resource traits defining the abstraction shared by every managed record type

use crate::core::field::{FieldValue, fields_of};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use validator::Validate;

/// Declarative description of a resource type
///
/// One record per resource. It names the resource, places it under a route
/// root and lists the fields that carry constraints beyond field-level
/// validation. Field names are the serialized (camelCase) names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceSchema {
    /// Singular name used in logs and error messages (e.g. "customer")
    pub name: &'static str,

    /// Route root the CRUD routes are nested under (e.g. "/customer")
    pub route: &'static str,

    /// Table name for relational backends
    pub table: &'static str,

    /// Fields that must be non-null and non-whitespace
    ///
    /// Enforced by the type's `Validate` impl; listed here so generic
    /// tooling can probe them.
    pub not_blank: &'static [&'static str],

    /// Fields whose values must be distinct across stored records
    pub unique: &'static [&'static str],

    /// Fields that cannot change once the record has been stored
    pub natural_ids: &'static [&'static str],
}

impl ResourceSchema {
    /// Check whether a field is declared unique
    pub fn is_unique(&self, field: &str) -> bool {
        self.unique.contains(&field)
    }
}

/// Base trait for all resources exposed through a [`ResourceManager`].
///
/// A resource has:
/// - an optional server-assigned identifier (absent until stored)
/// - business fields validated through [`Validate`]
/// - optional server-owned timestamps refreshed by the hooks below
///
/// [`ResourceManager`]: crate::core::manager::ResourceManager
pub trait Resource:
    Clone + Debug + Serialize + DeserializeOwned + Validate + Send + Sync + 'static
{
    /// Schema record for this resource type
    const SCHEMA: ResourceSchema;

    /// Get the identifier, if the record has been stored
    fn id(&self) -> Option<i64>;

    /// Set the identifier
    fn set_id(&mut self, id: i64);

    /// Assign server-owned fields when the record is first stored
    fn on_add(&mut self, _now: DateTime<Utc>) {}

    /// Refresh server-owned fields on update
    ///
    /// `stored` is the record as it was before the update; creation
    /// timestamps are carried over from it.
    fn on_update(&mut self, _stored: &Self, _now: DateTime<Utc>) {}

    /// Values of the unique fields, in schema order
    fn unique_values(&self) -> serde_json::Result<Vec<(&'static str, FieldValue)>> {
        let object = serde_json::to_value(self)?;
        Ok(fields_of(&object, Self::SCHEMA.unique))
    }

    /// Values of the natural identifier fields, in schema order
    fn natural_id_values(&self) -> serde_json::Result<Vec<(&'static str, FieldValue)>> {
        let object = serde_json::to_value(self)?;
        Ok(fields_of(&object, Self::SCHEMA.natural_ids))
    }
}
