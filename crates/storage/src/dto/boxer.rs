use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{Result, StorageError};

/// Request payload for creating a new boxer
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateBoxerRequest {
    #[validate(length(min = 1, message = "Name must not be empty."))]
    pub name: String,

    #[validate(range(min = 125, message = "Must be at least 125."))]
    pub weight: i64,

    #[validate(range(exclusive_min = 0, message = "Must be greater than 0."))]
    pub height: i64,

    #[validate(range(exclusive_min = 0.0, message = "Must be greater than 0."))]
    pub reach: f64,

    #[validate(range(min = 18, max = 40, message = "Must be between 18 and 40."))]
    pub age: i64,
}

/// Order in which violations are reported when several fields are invalid.
const CHECK_ORDER: [&str; 5] = ["weight", "height", "reach", "age", "name"];

impl CreateBoxerRequest {
    pub fn new(name: impl Into<String>, weight: i64, height: i64, reach: f64, age: i64) -> Self {
        Self {
            name: name.into(),
            weight,
            height,
            reach,
            age,
        }
    }

    /// Run the attribute checks and report the first violated field with its
    /// value and bound.
    pub fn check(&self) -> Result<()> {
        let errors = match self.validate() {
            Ok(()) => return Ok(()),
            Err(errors) => errors,
        };

        let field_errors = errors.field_errors();
        for field in CHECK_ORDER {
            if let Some(error) = field_errors.get(field).and_then(|errs| errs.first()) {
                let requirement = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                return Err(StorageError::InvalidAttribute {
                    field,
                    value: self.field_value(field),
                    requirement,
                });
            }
        }

        Err(StorageError::InvalidArgument(errors.to_string()))
    }

    fn field_value(&self, field: &str) -> String {
        match field {
            "weight" => self.weight.to_string(),
            "height" => self.height.to_string(),
            "reach" => self.reach.to_string(),
            "age" => self.age.to_string(),
            _ => format!("'{}'", self.name),
        }
    }
}

/// Result of a single fight from one boxer's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FightOutcome {
    Win,
    Loss,
}

impl FightOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Loss => "loss",
        }
    }
}

impl fmt::Display for FightOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FightOutcome {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "win" => Ok(Self::Win),
            "loss" => Ok(Self::Loss),
            other => {
                tracing::error!("Invalid result: {}. Expected 'win' or 'loss'.", other);
                Err(StorageError::InvalidArgument(format!(
                    "Invalid result: {}. Expected 'win' or 'loss'.",
                    other
                )))
            }
        }
    }
}
