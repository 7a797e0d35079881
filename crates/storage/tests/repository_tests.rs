//! Integration tests for the boxer and leaderboard repositories

use storage::Database;
use storage::dto::boxer::{CreateBoxerRequest, FightOutcome};
use storage::dto::leaderboard::SortBy;
use storage::error::StorageError;
use storage::models::WeightClass;
use storage::repository::boxer::BoxerRepository;
use storage::repository::leaderboard::LeaderboardRepository;

fn tyson() -> CreateBoxerRequest {
    CreateBoxerRequest::new("Mike Tyson", 220, 178, 71.0, 25)
}

fn ali() -> CreateBoxerRequest {
    CreateBoxerRequest::new("Muhammad Ali", 215, 191, 78.0, 30)
}

async fn record(repo: &BoxerRepository<'_>, id: i64, wins: usize, losses: usize) {
    for _ in 0..wins {
        repo.update_stats(id, FightOutcome::Win).await.unwrap();
    }
    for _ in 0..losses {
        repo.update_stats(id, FightOutcome::Loss).await.unwrap();
    }
}

#[tokio::test]
async fn test_create_then_fetch_round_trip() {
    let db = Database::in_memory().await.unwrap();
    let repo = BoxerRepository::new(db.pool());

    let created = repo.create(&tyson()).await.unwrap();
    assert_eq!(created.weight_class, WeightClass::Heavyweight);

    let by_id = repo.find_by_id(created.id).await.unwrap();
    let by_name = repo.find_by_name("Mike Tyson").await.unwrap();
    assert_eq!(by_id, created);
    assert_eq!(by_name, created);

    assert_eq!(by_id.name, "Mike Tyson");
    assert_eq!(by_id.weight, 220);
    assert_eq!(by_id.height, 178);
    assert_eq!(by_id.reach, 71.0);
    assert_eq!(by_id.age, 25);
    assert_eq!(repo.stats(created.id).await.unwrap(), (0, 0));
}

#[tokio::test]
async fn test_create_rejects_duplicate_name() {
    let db = Database::in_memory().await.unwrap();
    let repo = BoxerRepository::new(db.pool());

    repo.create(&tyson()).await.unwrap();
    let err = repo.create(&tyson()).await.unwrap_err();

    assert!(matches!(err, StorageError::DuplicateName(ref name) if name == "Mike Tyson"));
    assert_eq!(err.to_string(), "Boxer with name 'Mike Tyson' already exists");
}

#[tokio::test]
async fn test_create_invalid_weight_inserts_nothing() {
    let db = Database::in_memory().await.unwrap();
    let repo = BoxerRepository::new(db.pool());

    let err = repo
        .create(&CreateBoxerRequest::new("X", 120, 178, 71.0, 25))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        StorageError::InvalidAttribute { field: "weight", .. }
    ));

    assert!(matches!(
        repo.find_by_name("X").await,
        Err(StorageError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_delete_removes_boxer() {
    let db = Database::in_memory().await.unwrap();
    let repo = BoxerRepository::new(db.pool());

    let boxer = repo.create(&tyson()).await.unwrap();
    repo.delete(boxer.id).await.unwrap();

    let err = repo.find_by_id(boxer.id).await.unwrap_err();
    assert_eq!(err.to_string(), format!("Boxer with ID {} not found.", boxer.id));
}

#[tokio::test]
async fn test_missing_boxer_is_not_found() {
    let db = Database::in_memory().await.unwrap();
    let repo = BoxerRepository::new(db.pool());

    assert_eq!(
        repo.delete(1).await.unwrap_err().to_string(),
        "Boxer with ID 1 not found."
    );
    assert_eq!(
        repo.find_by_name("Mike Tyson").await.unwrap_err().to_string(),
        "Boxer 'Mike Tyson' not found."
    );
    assert!(matches!(
        repo.update_stats(1, FightOutcome::Win).await,
        Err(StorageError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_update_stats_counts_fights_and_wins() {
    let db = Database::in_memory().await.unwrap();
    let repo = BoxerRepository::new(db.pool());

    let boxer = repo.create(&tyson()).await.unwrap();

    repo.update_stats(boxer.id, FightOutcome::Win).await.unwrap();
    assert_eq!(repo.stats(boxer.id).await.unwrap(), (1, 1));

    repo.update_stats(boxer.id, FightOutcome::Loss).await.unwrap();
    assert_eq!(repo.stats(boxer.id).await.unwrap(), (2, 1));
}

#[tokio::test]
async fn test_leaderboard_skips_boxers_without_fights() {
    let db = Database::in_memory().await.unwrap();
    let repo = BoxerRepository::new(db.pool());

    let tyson = repo.create(&tyson()).await.unwrap();
    repo.create(&ali()).await.unwrap();
    record(&repo, tyson.id, 1, 0).await;

    let board = LeaderboardRepository::new(db.pool())
        .get_leaderboard(SortBy::Wins)
        .await
        .unwrap();

    assert_eq!(board.len(), 1);
    assert_eq!(board[0].name, "Mike Tyson");
    assert_eq!(board[0].weight_class, WeightClass::Heavyweight);
    assert_eq!(board[0].win_pct, 100.0);
}

#[tokio::test]
async fn test_leaderboard_order_depends_on_sort_key() {
    let db = Database::in_memory().await.unwrap();
    let repo = BoxerRepository::new(db.pool());

    let a = repo.create(&tyson()).await.unwrap();
    let b = repo.create(&ali()).await.unwrap();
    record(&repo, a.id, 8, 2).await;
    record(&repo, b.id, 5, 0).await;

    let leaderboard = LeaderboardRepository::new(db.pool());

    let by_wins = leaderboard.get_leaderboard(SortBy::Wins).await.unwrap();
    assert_eq!(by_wins[0].name, "Mike Tyson");
    assert_eq!(by_wins[0].wins, 8);
    assert_eq!(by_wins[0].fights, 10);
    assert_eq!(by_wins[0].win_pct, 80.0);
    assert_eq!(by_wins[1].name, "Muhammad Ali");

    let by_pct = leaderboard.get_leaderboard(SortBy::WinPct).await.unwrap();
    assert_eq!(by_pct[0].name, "Muhammad Ali");
    assert_eq!(by_pct[0].win_pct, 100.0);
    assert_eq!(by_pct[1].name, "Mike Tyson");
}

#[tokio::test]
async fn test_leaderboard_rounds_win_pct() {
    let db = Database::in_memory().await.unwrap();
    let repo = BoxerRepository::new(db.pool());

    let boxer = repo.create(&tyson()).await.unwrap();
    record(&repo, boxer.id, 1, 2).await;

    let board = LeaderboardRepository::new(db.pool())
        .get_leaderboard(SortBy::WinPct)
        .await
        .unwrap();
    assert_eq!(board[0].win_pct, 33.3);
}
