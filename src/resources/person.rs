//! Profile block embedded in customers and operators

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Personal details of a customer or operator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonInformation {
    pub full_name: Option<String>,

    /// Serialized as `YYYY-MM-DD`
    pub birth_date: Option<NaiveDate>,

    pub country: Option<String>,
    pub city: Option<String>,
    pub about: Option<String>,
}
