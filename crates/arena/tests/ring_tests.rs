//! Fight simulation against an in-memory boxer store

use std::sync::atomic::{AtomicUsize, Ordering};

use arena::{ArenaError, RandomSource, Ring, fighting_skill, win_probability};
use async_trait::async_trait;
use storage::Database;
use storage::dto::boxer::CreateBoxerRequest;
use storage::error::StorageError;
use storage::models::{Boxer, WeightClass};
use storage::repository::boxer::BoxerRepository;

/// Returns the same draw every time and counts how often it was asked.
struct FixedRandom {
    value: f64,
    calls: AtomicUsize,
}

impl FixedRandom {
    fn new(value: f64) -> Self {
        Self {
            value,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RandomSource for FixedRandom {
    async fn draw(&self) -> arena::Result<f64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.value)
    }
}

struct FailingRandom;

#[async_trait]
impl RandomSource for FailingRandom {
    async fn draw(&self) -> arena::Result<f64> {
        Err(ArenaError::Timeout)
    }
}

async fn create(db: &Database, req: CreateBoxerRequest) -> Boxer {
    BoxerRepository::new(db.pool()).create(&req).await.unwrap()
}

async fn stats(db: &Database, boxer: &Boxer) -> (i64, i64) {
    BoxerRepository::new(db.pool()).stats(boxer.id).await.unwrap()
}

/// Two boxers with identical skill, so the threshold is exactly 0.5
async fn evenly_matched(db: &Database) -> (Boxer, Boxer) {
    let first = create(db, CreateBoxerRequest::new("Boxer 1", 150, 180, 10.0, 30)).await;
    let second = create(db, CreateBoxerRequest::new("Boxer 2", 150, 175, 10.0, 28)).await;
    assert_eq!(fighting_skill(&first), fighting_skill(&second));
    (first, second)
}

#[tokio::test]
async fn test_tyson_beats_ali_on_low_draw() {
    let db = Database::in_memory().await.unwrap();
    let tyson = create(&db, CreateBoxerRequest::new("Mike Tyson", 220, 178, 71.0, 25)).await;
    let ali = create(&db, CreateBoxerRequest::new("Muhammad Ali", 215, 191, 78.0, 30)).await;
    assert_eq!(tyson.weight_class, WeightClass::Heavyweight);
    assert_eq!(ali.weight_class, WeightClass::Heavyweight);

    let mut ring = Ring::new();
    ring.enter(tyson.clone()).unwrap();
    ring.enter(ali.clone()).unwrap();

    let random = FixedRandom::new(0.10);
    let winner = ring.fight(db.pool(), &random).await.unwrap();

    assert_eq!(winner, "Mike Tyson");
    assert_eq!(random.calls(), 1);
    assert!(ring.is_empty());
    assert_eq!(stats(&db, &tyson).await, (1, 1));
    assert_eq!(stats(&db, &ali).await, (1, 0));
}

#[tokio::test]
async fn test_first_occupant_favoured_even_when_weaker() {
    let db = Database::in_memory().await.unwrap();
    let weaker = create(&db, CreateBoxerRequest::new("Al", 130, 170, 60.0, 22)).await;
    let stronger = create(&db, CreateBoxerRequest::new("Muhammad Ali", 215, 191, 78.0, 30)).await;
    assert!(fighting_skill(&stronger) > fighting_skill(&weaker));
    assert_eq!(
        win_probability(fighting_skill(&weaker), fighting_skill(&stronger)),
        1.0
    );

    let mut ring = Ring::new();
    ring.enter(weaker.clone()).unwrap();
    ring.enter(stronger.clone()).unwrap();

    let winner = ring.fight(db.pool(), &FixedRandom::new(0.99)).await.unwrap();

    assert_eq!(winner, "Al");
    assert_eq!(stats(&db, &weaker).await, (1, 1));
    assert_eq!(stats(&db, &stronger).await, (1, 0));
}

#[tokio::test]
async fn test_draw_at_threshold_goes_to_second_occupant() {
    let db = Database::in_memory().await.unwrap();
    let (first, second) = evenly_matched(&db).await;

    let mut ring = Ring::new();
    ring.enter(first.clone()).unwrap();
    ring.enter(second.clone()).unwrap();
    assert_eq!(ring.fight(db.pool(), &FixedRandom::new(0.5)).await.unwrap(), "Boxer 2");

    ring.enter(first.clone()).unwrap();
    ring.enter(second.clone()).unwrap();
    assert_eq!(ring.fight(db.pool(), &FixedRandom::new(0.49)).await.unwrap(), "Boxer 1");

    assert_eq!(stats(&db, &first).await, (2, 1));
    assert_eq!(stats(&db, &second).await, (2, 1));
}

#[tokio::test]
async fn test_fight_needs_two_boxers() {
    let db = Database::in_memory().await.unwrap();
    let (first, _) = evenly_matched(&db).await;
    let random = FixedRandom::new(0.1);

    let mut ring = Ring::new();
    let err = ring.fight(db.pool(), &random).await.unwrap_err();
    assert!(matches!(err, ArenaError::InsufficientOccupants));
    assert_eq!(err.to_string(), "There must be two boxers to start a fight.");

    ring.enter(first.clone()).unwrap();
    let err = ring.fight(db.pool(), &random).await.unwrap_err();
    assert!(matches!(err, ArenaError::InsufficientOccupants));

    assert_eq!(random.calls(), 0);
    assert_eq!(ring.len(), 1);
    assert_eq!(stats(&db, &first).await, (0, 0));
}

#[tokio::test]
async fn test_random_failure_keeps_ring_and_stats() {
    let db = Database::in_memory().await.unwrap();
    let (first, second) = evenly_matched(&db).await;

    let mut ring = Ring::new();
    ring.enter(first.clone()).unwrap();
    ring.enter(second.clone()).unwrap();

    let err = ring.fight(db.pool(), &FailingRandom).await.unwrap_err();
    assert!(matches!(err, ArenaError::Timeout));

    assert_eq!(ring.len(), 2);
    assert_eq!(stats(&db, &first).await, (0, 0));
    assert_eq!(stats(&db, &second).await, (0, 0));
}

#[tokio::test]
async fn test_stats_failure_leaves_ring_occupied() {
    let db = Database::in_memory().await.unwrap();
    let (first, second) = evenly_matched(&db).await;

    let mut ring = Ring::new();
    ring.enter(first.clone()).unwrap();
    ring.enter(second.clone()).unwrap();

    // The loser disappears from the store after entering the ring
    BoxerRepository::new(db.pool()).delete(second.id).await.unwrap();

    let err = ring.fight(db.pool(), &FixedRandom::new(0.1)).await.unwrap_err();
    assert!(matches!(err, ArenaError::Storage(StorageError::NotFound(_))));

    assert_eq!(ring.len(), 2);
    assert_eq!(stats(&db, &first).await, (1, 1));
}
