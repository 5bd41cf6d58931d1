//! Types of customer requests

use crate::core::validation::not_blank;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Where a request is served
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerRequestCategory {
    HomeService,
    OfficeService,
}

/// A kind of request customers can open
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRequestType {
    pub id: Option<i64>,

    #[validate(required, custom(function = "not_blank"))]
    pub name: Option<String>,

    pub description: Option<String>,

    #[validate(required)]
    pub customer_request_category: Option<CustomerRequestCategory>,
}

crate::impl_resource!(CustomerRequestType {
    name: "customer_request_type",
    route: "/customer_request_type",
    table: "customer_request_types",
    not_blank: ["name"],
    unique: ["name"],
    natural_ids: ["name"],
    eq: [name, description, customer_request_category],
});
