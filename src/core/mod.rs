//! Core module containing fundamental traits and types

pub mod error;
pub mod field;
pub mod manager;
pub mod module;
pub mod relation;
pub mod resource;
pub mod store;
pub mod validation;

pub use error::{ErrorResponse, RequestError, ResourceError, StorageError, ValidationError};
pub use field::FieldValue;
pub use manager::ResourceManager;
pub use module::Module;
pub use relation::Relation;
pub use resource::{Resource, ResourceSchema};
pub use store::ResourceStore;
