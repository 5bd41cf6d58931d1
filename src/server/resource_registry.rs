//! Resource registry for managing resource descriptors and generating CRUD routes

use crate::core::manager::ResourceManager;
use crate::core::resource::Resource;
use crate::server::handlers;
use anyhow::{Result, bail};
use axum::{
    Router,
    routing::{delete, get, post, put},
};
use indexmap::IndexMap;

/// Trait that describes how to build routes for a resource
pub trait ResourceDescriptor: Send + Sync {
    /// The resource name (e.g. "customer_request_stage")
    fn resource_name(&self) -> &str;

    /// Path the resource's routes are mounted under (e.g. "/customer")
    fn route(&self) -> &str;

    /// Build the CRUD routes for this resource, relative to `route()`
    fn build_routes(&self) -> Router;
}

/// Descriptor backed by a `ResourceManager`
pub struct ManagedResource<T: Resource> {
    manager: ResourceManager<T>,
}

impl<T: Resource> ManagedResource<T> {
    pub fn new(manager: ResourceManager<T>) -> Self {
        Self { manager }
    }
}

impl<T: Resource> ResourceDescriptor for ManagedResource<T> {
    fn resource_name(&self) -> &str {
        T::SCHEMA.name
    }

    fn route(&self) -> &str {
        T::SCHEMA.route
    }

    fn build_routes(&self) -> Router {
        Router::new()
            .route("/add", post(handlers::add::<T>))
            .route("/get/all", get(handlers::get_all::<T>))
            .route("/get/{id}", get(handlers::get_by_id::<T>))
            .route("/update", put(handlers::update::<T>))
            .route("/delete/{id}", delete(handlers::delete_by_id::<T>))
            .with_state(self.manager.clone())
    }
}

/// Registry for all resources in the application
///
/// Registration order is kept, so listings and startup logs are stable.
#[derive(Default)]
pub struct ResourceRegistry {
    descriptors: IndexMap<String, Box<dyn ResourceDescriptor>>,
}

impl ResourceRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            descriptors: IndexMap::new(),
        }
    }

    /// Register a resource descriptor
    ///
    /// Fails when the name or the route is already taken.
    pub fn register(&mut self, descriptor: Box<dyn ResourceDescriptor>) -> Result<()> {
        let name = descriptor.resource_name().to_string();
        if self.descriptors.contains_key(&name) {
            bail!("resource '{}' is already registered", name);
        }
        if let Some(existing) = self
            .descriptors
            .values()
            .find(|d| d.route() == descriptor.route())
        {
            bail!(
                "route '{}' is already used by resource '{}'",
                descriptor.route(),
                existing.resource_name()
            );
        }

        tracing::debug!(resource = %name, route = descriptor.route(), "registered resource");
        self.descriptors.insert(name, descriptor);
        Ok(())
    }

    /// Register the CRUD routes of a manager
    pub fn register_manager<T: Resource>(&mut self, manager: ResourceManager<T>) -> Result<()> {
        self.register(Box::new(ManagedResource::new(manager)))
    }

    /// Build a router with every registered resource nested under its route
    pub fn build_routes(&self) -> Router {
        self.descriptors
            .values()
            .fold(Router::new(), |router, descriptor| {
                router.nest(descriptor.route(), descriptor.build_routes())
            })
    }

    /// Names of all registered resources, in registration order
    pub fn resource_names(&self) -> Vec<&str> {
        self.descriptors.keys().map(|s| s.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
