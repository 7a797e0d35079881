pub mod error;
pub mod random;
pub mod ring;

pub use error::{ArenaError, Result};
pub use random::{RandomOrgClient, RandomSource};
pub use ring::{RING_CAPACITY, Ring, fighting_skill, win_probability};
