use std::sync::Arc;

use arena::{RandomSource, Ring};
use storage::Database;
use tokio::sync::Mutex;

/// Shared by every request. There is one ring per server; the mutex is held
/// for the whole of a fight so ring operations never interleave.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub ring: Arc<Mutex<Ring>>,
    pub random: Arc<dyn RandomSource>,
}

impl AppState {
    pub fn new(db: Database, random: Arc<dyn RandomSource>) -> Self {
        Self {
            db,
            ring: Arc::new(Mutex::new(Ring::new())),
            random,
        }
    }
}
