pub mod boxers;
pub mod leaderboard;
pub mod ring;
