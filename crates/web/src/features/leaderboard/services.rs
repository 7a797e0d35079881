use sqlx::SqlitePool;
use storage::{
    dto::leaderboard::{LeaderboardEntry, SortBy},
    error::Result,
    repository::leaderboard::LeaderboardRepository,
};

/// Boxers with at least one fight, ranked by `sort_by`
pub async fn get_leaderboard(pool: &SqlitePool, sort_by: SortBy) -> Result<Vec<LeaderboardEntry>> {
    let repo = LeaderboardRepository::new(pool);
    repo.get_leaderboard(sort_by).await
}
