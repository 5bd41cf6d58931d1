//! Customer accounts

use super::person::PersonInformation;
use crate::core::resource::{Resource, ResourceSchema};
use crate::core::validation::not_blank;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A registered customer
///
/// `login` is the natural identifier. `registrationTimestamp` is set by the
/// server when the customer is added and never changes afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Option<i64>,

    #[validate(required, custom(function = "not_blank"))]
    pub login: Option<String>,

    #[validate(required, custom(function = "not_blank"))]
    pub password: Option<String>,

    #[validate(required, custom(function = "not_blank"))]
    pub email: Option<String>,

    pub registration_timestamp: Option<DateTime<Utc>>,

    pub customer_information: Option<PersonInformation>,
}

impl Resource for Customer {
    const SCHEMA: ResourceSchema = ResourceSchema {
        name: "customer",
        route: "/customer",
        table: "customers",
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

crate::resource_eq!(Customer, [login, password, email, customer_information]);
