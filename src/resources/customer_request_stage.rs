//! Stages of a customer request and the operators assigned to them

use super::operator::Operator;
use crate::core::error::{ResourceError, ValidationError};
use crate::core::relation::Relation;
use crate::core::resource::{Resource, ResourceSchema};
use crate::core::store::ResourceStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

/// One step in the handling of a customer request
///
/// `operators` is an ordered list of references to stored operators. Only
/// the `id` of each entry is read on input; responses carry the full
/// operator records.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRequestStage {
    pub id: Option<i64>,

    pub creation_timestamp: Option<DateTime<Utc>>,

    pub update_timestamp: Option<DateTime<Utc>>,

    #[serde(default)]
    pub operators: Vec<Operator>,

    pub comment: Option<String>,
}

impl Resource for CustomerRequestStage {
    const SCHEMA: ResourceSchema = ResourceSchema {
        name: "customer_request_stage",
        route: "/customer_request_stage",
        table: "customer_request_stages",
        not_blank: &[],
        unique: &[],
        natural_ids: &[],
    };

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn on_add(&mut self, now: DateTime<Utc>) {
        self.creation_timestamp = Some(now);
        self.update_timestamp = Some(now);
    }

    fn on_update(&mut self, stored: &Self, now: DateTime<Utc>) {
        self.creation_timestamp = stored.creation_timestamp;
        self.update_timestamp = Some(now);
    }
}

crate::resource_eq!(CustomerRequestStage, [operators, comment]);

/// Eager link from stages to the operator store
#[derive(Clone)]
pub struct StageOperators {
    operators: Arc<dyn ResourceStore<Operator>>,
}

impl StageOperators {
    pub fn new(operators: Arc<dyn ResourceStore<Operator>>) -> Self {
        Self { operators }
    }
}

#[async_trait]
impl Relation<CustomerRequestStage> for StageOperators {
    fn target(&self) -> &'static str {
        Operator::SCHEMA.name
    }

    async fn resolve(&self, stage: &mut CustomerRequestStage) -> Result<(), ResourceError> {
        let unknown = |id: Option<i64>| ValidationError::UnknownReference {
            resource: CustomerRequestStage::SCHEMA.name,
            target: self.target(),
            id,
        };

        let ids = stage
            .operators
            .iter()
            .map(|operator| operator.id.ok_or_else(|| unknown(None)))
            .collect::<Result<Vec<_>, _>>()?;

        let found = try_join_all(ids.iter().map(|id| self.operators.find(*id))).await?;

        stage.operators = ids
            .into_iter()
            .zip(found)
            .map(|(id, operator)| operator.ok_or_else(|| unknown(Some(id))))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(())
    }

    async fn load(&self, stage: &mut CustomerRequestStage) -> Result<(), ResourceError> {
        let found = try_join_all(
            stage
                .operators
                .iter()
                .filter_map(|operator| operator.id)
                .map(|id| self.operators.find(id)),
        )
        .await?;

        stage.operators = found.into_iter().flatten().collect();
        Ok(())
    }
}
