//! Points of interest: shops, offices, hospitals

use crate::core::validation::not_blank;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Location of a point of interest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoiAddress {
    pub region: Option<String>,
    pub city: Option<String>,
    pub street: Option<String>,
    pub postcode: Option<String>,
    pub build: Option<String>,
    pub room: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// A place customers can be served at
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PointOfInterest {
    pub id: Option<i64>,

    #[validate(required, custom(function = "not_blank"))]
    pub name: Option<String>,

    #[serde(default = "default_category")]
    pub category: String,

    /// Opening time, `HH:mm`
    #[serde(default, with = "hh_mm")]
    pub start_work: Option<NaiveTime>,

    /// Length of the working day in minutes
    pub work_time: Option<i32>,

    pub address: Option<PoiAddress>,
}

fn default_category() -> String {
    "unknown".to_string()
}

impl Default for PointOfInterest {
    fn default() -> Self {
        Self {
            id: None,
            name: None,
            category: default_category(),
            start_work: None,
            work_time: None,
            address: None,
        }
    }
}

crate::impl_resource!(PointOfInterest {
    name: "point_of_interest",
    route: "/pointOfInterest",
    table: "points_of_interest",
    not_blank: ["name"],
    unique: [],
    natural_ids: [],
    eq: [name, category, start_work, work_time, address],
});

/// `Option<NaiveTime>` as `"HH:mm"`; `"HH:mm:ss"` is accepted on input
mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(time) => serializer.serialize_str(&time.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveTime>, D::Error> {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        NaiveTime::parse_from_str(&raw, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}
