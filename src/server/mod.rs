//! HTTP server assembly
//!
//! `ServerBuilder` collects modules, builds their resource managers from the
//! configured storage backend and exposes every resource over REST.

pub mod builder;
pub mod exposure;
pub mod handlers;
pub mod host;
pub mod resource_registry;

pub use builder::ServerBuilder;
pub use host::ServerHost;
pub use resource_registry::{ManagedResource, ResourceDescriptor, ResourceRegistry};
