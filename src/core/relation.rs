//! Eagerly loaded references between resources

use crate::core::error::ResourceError;
use async_trait::async_trait;

/// A reference from one resource type to records of another
///
/// Registered on a [`ResourceManager`](crate::core::manager::ResourceManager)
/// with `with_relation`. The manager calls [`resolve`](Relation::resolve)
/// before every write and [`load`](Relation::load) after every read.
#[async_trait]
pub trait Relation<T>: Send + Sync {
    /// Name of the referenced resource (e.g. "operator")
    fn target(&self) -> &'static str;

    /// Check that every reference points at a stored record and replace
    /// the references with the stored records
    ///
    /// A missing or unknown reference is a validation failure.
    async fn resolve(&self, entity: &mut T) -> Result<(), ResourceError>;

    /// Refresh references with the current stored records
    ///
    /// References whose target no longer exists are dropped.
    async fn load(&self, entity: &mut T) -> Result<(), ResourceError>;
}
