use sqlx::SqlitePool;

use crate::dto::boxer::{CreateBoxerRequest, FightOutcome};
use crate::error::{Result, StorageError};
use crate::models::Boxer;
use crate::models::boxer::BoxerRow;

pub struct BoxerRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> BoxerRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new boxer with zeroed fight counters
    pub async fn create(&self, req: &CreateBoxerRequest) -> Result<Boxer> {
        tracing::info!("Creating new boxer: {}", req.name);

        req.check().inspect_err(|e| tracing::error!("{}", e))?;

        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM boxers WHERE name = ?")
            .bind(&req.name)
            .fetch_one(self.pool)
            .await?;
        if existing > 0 {
            tracing::error!("Boxer with name '{}' already exists", req.name);
            return Err(StorageError::DuplicateName(req.name.clone()));
        }

        let row = sqlx::query_as::<_, BoxerRow>(
            r#"
            INSERT INTO boxers (name, weight, height, reach, age)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, name, weight, height, reach, age
            "#,
        )
        .bind(&req.name)
        .bind(req.weight)
        .bind(req.height)
        .bind(req.reach)
        .bind(req.age)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let err = StorageError::from(e);
            if err.is_unique_violation() {
                tracing::error!("Boxer with name '{}' already exists", req.name);
                StorageError::DuplicateName(req.name.clone())
            } else {
                tracing::error!("Database error while creating boxer: {}", err);
                err
            }
        })?;

        let boxer = Boxer::try_from(row)?;
        tracing::info!("Successfully created boxer: {} (id {})", boxer.name, boxer.id);
        Ok(boxer)
    }

    /// Delete a boxer by ID
    pub async fn delete(&self, id: i64) -> Result<()> {
        tracing::info!("Deleting boxer with ID: {}", id);

        let result = sqlx::query("DELETE FROM boxers WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            tracing::error!("Boxer with ID {} not found.", id);
            return Err(StorageError::boxer_id_not_found(id));
        }

        tracing::info!("Successfully deleted boxer with ID: {}", id);
        Ok(())
    }

    /// Find boxer by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Boxer> {
        tracing::info!("Retrieving boxer with ID: {}", id);

        let row = sqlx::query_as::<_, BoxerRow>(
            "SELECT id, name, weight, height, reach, age FROM boxers WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| {
            tracing::error!("Boxer with ID {} not found.", id);
            StorageError::boxer_id_not_found(id)
        })?;

        Boxer::try_from(row)
    }

    /// Find boxer by exact name
    pub async fn find_by_name(&self, name: &str) -> Result<Boxer> {
        tracing::info!("Retrieving boxer with name: {}", name);

        let row = sqlx::query_as::<_, BoxerRow>(
            "SELECT id, name, weight, height, reach, age FROM boxers WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| {
            tracing::error!("Boxer '{}' not found.", name);
            StorageError::boxer_name_not_found(name)
        })?;

        Boxer::try_from(row)
    }

    /// Record one fight for a boxer. The only write path for the counters.
    pub async fn update_stats(&self, id: i64, outcome: FightOutcome) -> Result<()> {
        tracing::info!("Updating stats for boxer {} with result: {}", id, outcome);

        let sql = match outcome {
            FightOutcome::Win => "UPDATE boxers SET fights = fights + 1, wins = wins + 1 WHERE id = ?",
            FightOutcome::Loss => "UPDATE boxers SET fights = fights + 1 WHERE id = ?",
        };

        let result = sqlx::query(sql)
            .bind(id)
            .execute(self.pool)
            .await
            .inspect_err(|e| tracing::error!("Database error while updating boxer stats: {}", e))?;

        if result.rows_affected() == 0 {
            tracing::error!("Boxer with ID {} not found.", id);
            return Err(StorageError::boxer_id_not_found(id));
        }

        tracing::info!("Successfully updated stats for boxer {}", id);
        Ok(())
    }

    /// Current `(fights, wins)` counters for a boxer
    pub async fn stats(&self, id: i64) -> Result<(i64, i64)> {
        sqlx::query_as::<_, (i64, i64)>("SELECT fights, wins FROM boxers WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| StorageError::boxer_id_not_found(id))
    }
}
