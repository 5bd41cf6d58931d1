//! Standalone postal addresses

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct Address {
    pub id: Option<i64>,
    pub region: Option<String>,
    pub city: Option<String>,
    pub street: Option<String>,
    #[serde(default)]
    pub postcode: i32,
    pub hause: Option<String>,
    pub office: Option<String>,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

crate::impl_resource!(Address {
    name: "address",
    route: "/address",
    table: "addresses",
    not_blank: [],
    unique: [],
    natural_ids: [],
    eq: [region, city, street, postcode, hause, office, latitude, longitude],
});
