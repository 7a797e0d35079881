use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use crate::error::{Result, StorageError};

/// Lightest weight, in pounds, that still has a class.
pub const MIN_WEIGHT: i64 = 125;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum WeightClass {
    Featherweight,
    Lightweight,
    Middleweight,
    Heavyweight,
}

impl WeightClass {
    /// Classify a weight in pounds.
    ///
    /// Boxer snapshots and leaderboard rows both go through here instead of
    /// reading a stored class, so the thresholds live in one place.
    pub fn for_weight(weight: i64) -> Result<Self> {
        let class = match weight {
            w if w >= 203 => Self::Heavyweight,
            w if w >= 166 => Self::Middleweight,
            w if w >= 133 => Self::Lightweight,
            w if w >= MIN_WEIGHT => Self::Featherweight,
            _ => {
                tracing::error!("Invalid weight: {}. Weight must be at least 125.", weight);
                return Err(StorageError::InvalidAttribute {
                    field: "weight",
                    value: weight.to_string(),
                    requirement: format!("Weight must be at least {}.", MIN_WEIGHT),
                });
            }
        };

        tracing::debug!("Determined weight class {} for weight {}", class, weight);
        Ok(class)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Featherweight => "FEATHERWEIGHT",
            Self::Lightweight => "LIGHTWEIGHT",
            Self::Middleweight => "MIDDLEWEIGHT",
            Self::Heavyweight => "HEAVYWEIGHT",
        }
    }
}

impl fmt::Display for WeightClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
