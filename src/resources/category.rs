//! Point of interest categories

use crate::core::validation::not_blank;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A named category such as "Hospital" or "SuperMarket"
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct Category {
    pub id: Option<i64>,

    #[validate(required, custom(function = "not_blank"))]
    pub name: Option<String>,
}

impl Category {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }
}

crate::impl_resource!(Category {
    name: "category",
    route: "/category",
    table: "categories",
    not_blank: ["name"],
    unique: [],
    natural_ids: [],
    eq: [name],
});
