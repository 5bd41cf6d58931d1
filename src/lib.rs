//! # ba
//!
//! CRUD REST backend for customers, operators, points of interest and the
//! customer request workflow.
//!
//! Every resource is a serde struct implementing [`Resource`](core::Resource).
//! A generic [`ResourceManager`](core::ResourceManager) enforces the shared
//! rules (not-blank and unique fields, immutable natural identifiers,
//! server-assigned timestamps) on top of a pluggable
//! [`ResourceStore`](core::ResourceStore), and the server layer exposes each
//! manager under five routes:
//!
//! | Method | Path                    | Success |
//! |--------|-------------------------|---------|
//! | POST   | `{route}/add`           | 201     |
//! | GET    | `{route}/get/all`       | 200     |
//! | GET    | `{route}/get/{id}`      | 200     |
//! | PUT    | `{route}/update`        | 200     |
//! | DELETE | `{route}/delete/{id}`   | 204     |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ba::prelude::*;
//!
//! let config = AppConfig::load()?;
//! let stores = StoreFactory::from_config(&config.storage).await?;
//! let addr = config.listen_addr();
//!
//! ServerBuilder::new()
//!     .with_config(config)
//!     .with_stores(stores)
//!     .register_module(BaModule)?
//!     .serve(&addr)
//!     .await?;
//! ```

pub mod config;
pub mod core;
pub mod resources;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ErrorResponse, FieldValue, Module, Relation, RequestError, Resource, ResourceError,
        ResourceManager, ResourceSchema, ResourceStore, StorageError, ValidationError,
        validation::{Payload, not_blank},
    };

    // === Resources ===
    pub use crate::resources::{
        Address, BaModule, Category, Customer, CustomerRequest, CustomerRequestCategory,
        CustomerRequestStage, CustomerRequestStageName, CustomerRequestType, Operator,
        OperatorRole, PersonInformation, PoiAddress, PointOfInterest, StageOperators,
    };

    // === Storage ===
    pub use crate::storage::{InMemoryStore, StoreFactory};
    #[cfg(feature = "postgres")]
    pub use crate::storage::PostgresStore;

    // === Config ===
    pub use crate::config::{AppConfig, StorageBackend};

    // === Server ===
    pub use crate::server::{ResourceDescriptor, ResourceRegistry, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
}
