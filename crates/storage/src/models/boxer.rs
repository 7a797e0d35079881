use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::WeightClass;
use crate::error::{Result, StorageError};

/// Snapshot of a boxer's biometric fields. Fight counters are not part of it;
/// re-fetch from the store when fresh numbers are needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Boxer {
    pub id: i64,
    pub name: String,
    pub weight: i64,
    pub height: i64,
    pub reach: f64,
    pub age: i64,
    pub weight_class: WeightClass,
}

impl Boxer {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        weight: i64,
        height: i64,
        reach: f64,
        age: i64,
    ) -> Result<Self> {
        Ok(Self {
            id,
            name: name.into(),
            weight,
            height,
            reach,
            age,
            weight_class: WeightClass::for_weight(weight)?,
        })
    }
}

/// Row shape of the biometric columns of `boxers`
#[derive(Debug, FromRow)]
pub(crate) struct BoxerRow {
    pub id: i64,
    pub name: String,
    pub weight: i64,
    pub height: i64,
    pub reach: f64,
    pub age: i64,
}

impl TryFrom<BoxerRow> for Boxer {
    type Error = StorageError;

    fn try_from(row: BoxerRow) -> Result<Self> {
        Boxer::new(row.id, row.name, row.weight, row.height, row.reach, row.age)
    }
}
