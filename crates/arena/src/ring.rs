//! The ring: two slots, one fight, then empty again.

use sqlx::SqlitePool;
use storage::dto::boxer::FightOutcome;
use storage::models::Boxer;
use storage::repository::boxer::BoxerRepository;

use crate::error::{ArenaError, Result};
use crate::random::RandomSource;

pub const RING_CAPACITY: usize = 2;

/// Boxers staged for the next fight, in the order they entered.
#[derive(Debug, Clone, Default)]
pub struct Ring {
    occupants: Vec<Boxer>,
}

impl Ring {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter(&mut self, boxer: Boxer) -> Result<()> {
        tracing::info!("Attempting to add boxer '{}' into the ring", boxer.name);

        if self.occupants.len() >= RING_CAPACITY {
            tracing::warn!("Attempted to add more than two boxers into the ring");
            return Err(ArenaError::RingFull);
        }

        tracing::info!("Boxer '{}' is successfully added to the ring", boxer.name);
        self.occupants.push(boxer);
        Ok(())
    }

    pub fn clear(&mut self) {
        if self.occupants.is_empty() {
            tracing::info!("Ring is already cleared");
            return;
        }
        self.occupants.clear();
        tracing::info!("Ring is successfully cleared");
    }

    pub fn occupants(&self) -> &[Boxer] {
        &self.occupants
    }

    pub fn len(&self) -> usize {
        self.occupants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }

    /// Fight the two occupants and return the winner's name.
    ///
    /// Occupant one wins when the draw lands below the logistic of the
    /// absolute skill gap. That value never drops below 0.5, so the first
    /// boxer to enter keeps an edge even when the second one is stronger.
    ///
    /// The ring is cleared only after both stats updates succeed. If the draw
    /// or either update fails the error is returned with the occupants still
    /// in place, and the winner's stats may already have been written.
    pub async fn fight(&mut self, pool: &SqlitePool, random: &dyn RandomSource) -> Result<String> {
        tracing::info!("Received request to simulate fight");

        let [first, second] = self.occupants.as_slice() else {
            tracing::warn!("Unable to fight, less than two boxers are in the ring");
            return Err(ArenaError::InsufficientOccupants);
        };

        let skill_1 = fighting_skill(first);
        let skill_2 = fighting_skill(second);
        let threshold = win_probability(skill_1, skill_2);

        let roll = random.draw().await?;

        let (winner, loser) = if roll < threshold {
            (first, second)
        } else {
            (second, first)
        };
        tracing::info!(
            skill_1,
            skill_2,
            threshold,
            roll,
            "'{}' defeats '{}'",
            winner.name,
            loser.name
        );

        let repo = BoxerRepository::new(pool);
        repo.update_stats(winner.id, FightOutcome::Win).await?;
        repo.update_stats(loser.id, FightOutcome::Loss).await?;

        let winner_name = winner.name.clone();
        self.clear();
        tracing::info!("Fight successfully executed");
        Ok(winner_name)
    }
}

/// Deterministic rating of one boxer snapshot
pub fn fighting_skill(boxer: &Boxer) -> f64 {
    let age_modifier = if boxer.age < 25 {
        -1.0
    } else if boxer.age > 35 {
        -2.0
    } else {
        0.0
    };

    let name_length = boxer.name.chars().count() as f64;
    boxer.weight as f64 * name_length + boxer.reach / 10.0 + age_modifier
}

/// Logistic of the absolute skill difference, always in `[0.5, 1]`
pub fn win_probability(skill_1: f64, skill_2: f64) -> f64 {
    let delta = (skill_1 - skill_2).abs();
    1.0 / (1.0 + (-delta).exp())
}
