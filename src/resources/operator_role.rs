//! Operator roles

use crate::core::validation::not_blank;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct OperatorRole {
    pub id: Option<i64>,

    #[validate(required, custom(function = "not_blank"))]
    pub name: Option<String>,

    pub description: Option<String>,
}

crate::impl_resource!(OperatorRole {
    name: "operator_role",
    route: "/operator_role",
    table: "operator_roles",
    not_blank: ["name"],
    unique: ["name"],
    natural_ids: ["name"],
    eq: [name, description],
});
