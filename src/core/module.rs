//! Module system
//!
//! A module groups related resources and wires their managers, stores and
//! relations into the registry.

use crate::server::resource_registry::ResourceRegistry;
use crate::storage::StoreFactory;
use anyhow::Result;

/// Trait for a group of resources served together
pub trait Module: Send + Sync {
    /// Unique module name
    fn name(&self) -> &str;

    /// Module version
    fn version(&self) -> &str {
        "1.0.0"
    }

    /// Names of the resources managed by this module
    fn resource_names(&self) -> Vec<&str>;

    /// Register a descriptor for every resource of the module
    ///
    /// Stores are created from `stores`; a store shared between a resource
    /// and a relation pointing at it must be created once and reused.
    fn register_resources(&self, registry: &mut ResourceRegistry, stores: &StoreFactory) -> Result<()>;
}
