//! Names of customer request stages

use crate::core::validation::not_blank;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A stage name such as "accepted" or "in progress"
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CustomerRequestStageName {
    pub id: Option<i64>,

    #[validate(required, custom(function = "not_blank"))]
    pub name: Option<String>,

    pub description: Option<String>,
}

crate::impl_resource!(CustomerRequestStageName {
    name: "customer_request_stage_name",
    route: "/customer_request_stage_name",
    table: "customer_request_stage_names",
    not_blank: ["name"],
    unique: ["name"],
    natural_ids: ["name"],
    eq: [name, description],
});
