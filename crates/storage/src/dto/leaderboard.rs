use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::{IntoParams, ToSchema};

use crate::error::{Result, StorageError};
use crate::models::WeightClass;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    Wins,
    WinPct,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wins => "wins",
            Self::WinPct => "win_pct",
        }
    }

    /// ORDER BY clause for the leaderboard query
    pub(crate) fn order_clause(&self) -> &'static str {
        match self {
            Self::Wins => "wins DESC, id ASC",
            Self::WinPct => "CAST(wins AS REAL) / fights DESC, id ASC",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "wins" => Ok(Self::Wins),
            "win_pct" => Ok(Self::WinPct),
            other => {
                tracing::error!("Invalid sort_by parameter: {}", other);
                Err(StorageError::InvalidArgument(format!(
                    "Invalid sort_by parameter: {}",
                    other
                )))
            }
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LeaderboardQuery {
    /// Either `wins` (default) or `win_pct`
    pub sort_by: Option<String>,
}

impl LeaderboardQuery {
    pub fn sort_by(&self) -> Result<SortBy> {
        self.sort_by
            .as_deref()
            .map(SortBy::from_str)
            .transpose()
            .map(Option::unwrap_or_default)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardEntry {
    pub id: i64,
    pub name: String,
    pub weight: i64,
    pub height: i64,
    pub reach: f64,
    pub age: i64,
    pub weight_class: WeightClass,
    pub fights: i64,
    pub wins: i64,
    /// Percentage of fights won, rounded to one decimal
    pub win_pct: f64,
}

pub fn win_percentage(wins: i64, fights: i64) -> f64 {
    if fights == 0 {
        return 0.0;
    }
    let pct = wins as f64 / fights as f64 * 100.0;
    (pct * 10.0).round_ties_even() / 10.0
}
