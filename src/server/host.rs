//! Server host holding the state the HTTP exposure is built from

use crate::config::AppConfig;
use crate::server::resource_registry::ResourceRegistry;
use std::sync::Arc;

/// Everything needed to expose the registered resources
pub struct ServerHost {
    /// Application configuration the server was started with
    pub config: Arc<AppConfig>,

    /// Registered resources and their CRUD routes
    pub registry: ResourceRegistry,

    /// Name of the storage backend, for health reporting
    pub backend: &'static str,
}

impl ServerHost {
    pub fn new(config: AppConfig, registry: ResourceRegistry, backend: &'static str) -> Self {
        Self {
            config: Arc::new(config),
            registry,
            backend,
        }
    }

    /// Resource names registered in the host
    pub fn resource_names(&self) -> Vec<&str> {
        self.registry.resource_names()
    }

    /// A host is ready once at least one resource is registered
    pub fn is_ready(&self) -> bool {
        !self.registry.is_empty()
    }
}
