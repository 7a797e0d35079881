use arena::{RandomSource, Result, Ring};
use sqlx::SqlitePool;
use storage::{models::Boxer, repository::boxer::BoxerRepository};
use tokio::sync::Mutex;

/// Current occupants in entry order
pub async fn occupants(ring: &Mutex<Ring>) -> Vec<Boxer> {
    ring.lock().await.occupants().to_vec()
}

/// Look a boxer up by name and put them in the ring
pub async fn enter_ring(pool: &SqlitePool, ring: &Mutex<Ring>, name: &str) -> Result<Vec<Boxer>> {
    let boxer = BoxerRepository::new(pool).find_by_name(name).await?;

    let mut ring = ring.lock().await;
    ring.enter(boxer)?;
    Ok(ring.occupants().to_vec())
}

/// Fight the current occupants; the ring stays locked until stats are written
pub async fn fight(pool: &SqlitePool, ring: &Mutex<Ring>, random: &dyn RandomSource) -> Result<String> {
    let mut ring = ring.lock().await;
    ring.fight(pool, random).await
}

pub async fn clear_ring(ring: &Mutex<Ring>) {
    ring.lock().await.clear();
}
