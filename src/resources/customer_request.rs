//! Customer requests

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A request opened by a customer
///
/// Carries only its identifier; stages and types refer to it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CustomerRequest {
    pub id: Option<i64>,
}

crate::impl_resource!(CustomerRequest {
    name: "customer_request",
    route: "/customer_request",
    table: "customer_requests",
    not_blank: [],
    unique: [],
    natural_ids: [],
    eq: [],
});
