//! Business resources served by the application
//!
//! Every resource is a plain serde struct with a `Resource` implementation
//! describing its route, table and constraints. [`BaModule`] wires all of
//! them into a registry.

pub mod macros;

pub mod address;
pub mod category;
pub mod customer;
pub mod customer_request;
pub mod customer_request_stage;
pub mod customer_request_stage_name;
pub mod customer_request_type;
pub mod operator;
pub mod operator_role;
pub mod person;
pub mod point_of_interest;

pub use address::Address;
pub use category::Category;
pub use customer::Customer;
pub use customer_request::CustomerRequest;
pub use customer_request_stage::{CustomerRequestStage, StageOperators};
pub use customer_request_stage_name::CustomerRequestStageName;
pub use customer_request_type::{CustomerRequestCategory, CustomerRequestType};
pub use operator::Operator;
pub use operator_role::OperatorRole;
pub use person::PersonInformation;
pub use point_of_interest::{PoiAddress, PointOfInterest};

use crate::core::manager::ResourceManager;
use crate::core::module::Module;
use crate::core::resource::Resource;
use crate::server::resource_registry::ResourceRegistry;
use crate::storage::StoreFactory;
use anyhow::Result;

/// Module registering every resource of the application
pub struct BaModule;

impl Module for BaModule {
    fn name(&self) -> &str {
        "ba"
    }

    fn resource_names(&self) -> Vec<&str> {
        vec![
            Customer::SCHEMA.name,
            Operator::SCHEMA.name,
            Category::SCHEMA.name,
            PointOfInterest::SCHEMA.name,
            CustomerRequest::SCHEMA.name,
            CustomerRequestStage::SCHEMA.name,
            CustomerRequestStageName::SCHEMA.name,
            CustomerRequestType::SCHEMA.name,
            OperatorRole::SCHEMA.name,
            Address::SCHEMA.name,
        ]
    }

    fn register_resources(&self, registry: &mut ResourceRegistry, stores: &StoreFactory) -> Result<()> {
        // stages read operators through the same store the operator routes write to
        let operators = stores.store::<Operator>();

        registry.register_manager(ResourceManager::<Customer>::new(stores.store()))?;
        registry.register_manager(ResourceManager::new(operators.clone()))?;
        registry.register_manager(ResourceManager::<Category>::new(stores.store()))?;
        registry.register_manager(ResourceManager::<PointOfInterest>::new(stores.store()))?;
        registry.register_manager(ResourceManager::<CustomerRequest>::new(stores.store()))?;
        registry.register_manager(
            ResourceManager::<CustomerRequestStage>::new(stores.store())
                .with_relation(StageOperators::new(operators)),
        )?;
        registry.register_manager(ResourceManager::<CustomerRequestStageName>::new(stores.store()))?;
        registry.register_manager(ResourceManager::<CustomerRequestType>::new(stores.store()))?;
        registry.register_manager(ResourceManager::<OperatorRole>::new(stores.store()))?;
        registry.register_manager(ResourceManager::<Address>::new(stores.store()))?;
        Ok(())
    }
}
