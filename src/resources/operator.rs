//! Operator accounts

use super::person::PersonInformation;
use crate::core::resource::{Resource, ResourceSchema};
use crate::core::validation::not_blank;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A registered operator
///
/// `login` is the natural identifier. `registrationTimestamp` is set by the
/// server when the operator is added and never changes afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Operator {
    pub id: Option<i64>,

    #[validate(required, custom(function = "not_blank"))]
    pub login: Option<String>,

    #[validate(required, custom(function = "not_blank"))]
    pub password: Option<String>,

    #[validate(required, custom(function = "not_blank"))]
    pub email: Option<String>,

    pub registration_timestamp: Option<DateTime<Utc>>,

    pub operator_information: Option<PersonInformation>,
}

impl Resource for Operator {
    const SCHEMA: ResourceSchema = ResourceSchema {
        name: "operator",
        route: "/operator",
        table: "operators",
        not_blank: &["login", "password", "email"],
        unique: &["login", "email"],
        natural_ids: &["login"],
    };

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn on_add(&mut self, now: DateTime<Utc>) {
        self.registration_timestamp = Some(now);
    }

    fn on_update(&mut self, stored: &Self, _now: DateTime<Utc>) {
        self.registration_timestamp = stored.registration_timestamp;
    }
}

crate::resource_eq!(Operator, [login, password, email, operator_information]);
