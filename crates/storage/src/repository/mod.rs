pub mod boxer;
pub mod leaderboard;
