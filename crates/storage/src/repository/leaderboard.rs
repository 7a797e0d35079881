use sqlx::{FromRow, QueryBuilder, SqlitePool};

use crate::dto::leaderboard::{LeaderboardEntry, SortBy, win_percentage};
use crate::error::Result;
use crate::models::WeightClass;

#[derive(FromRow)]
struct LeaderboardRow {
    id: i64,
    name: String,
    weight: i64,
    height: i64,
    reach: f64,
    age: i64,
    fights: i64,
    wins: i64,
}

pub struct LeaderboardRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> LeaderboardRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Boxers that have fought at least once, best first.
    pub async fn get_leaderboard(&self, sort_by: SortBy) -> Result<Vec<LeaderboardEntry>> {
        tracing::info!("Generating leaderboard sorted by: {}", sort_by);

        let mut query = QueryBuilder::new(
            r#"
            SELECT id, name, weight, height, reach, age, fights, wins
            FROM boxers
            WHERE fights > 0
            ORDER BY
            "#,
        );
        query.push(sort_by.order_clause());

        let rows: Vec<LeaderboardRow> = query
            .build_query_as()
            .fetch_all(self.pool)
            .await
            .inspect_err(|e| tracing::error!("Database error while generating leaderboard: {}", e))?;

        let entries = rows
            .into_iter()
            .map(|row| {
                Ok(LeaderboardEntry {
                    weight_class: WeightClass::for_weight(row.weight)?,
                    win_pct: win_percentage(row.wins, row.fights),
                    id: row.id,
                    name: row.name,
                    weight: row.weight,
                    height: row.height,
                    reach: row.reach,
                    age: row.age,
                    fights: row.fights,
                    wins: row.wins,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::info!(
            "Successfully generated leaderboard with {} boxers",
            entries.len()
        );
        Ok(entries)
    }
}
