//! Leaderboard.

use serde::{Deserialize, Serialize};

use super::id::UserId;

/// One leaderboard row. Only users with at least one finished debate appear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub rank: u32,
    pub user_id: UserId,
    pub nickname: String,
    pub avatar: Option<String>,
    pub rating: i32,
    pub wins: i32,
    pub losses: i32,
    pub draws: i32,
    /// Percentage of wins, rounded to two decimals by the server.
    pub win_rate: f64,
}

/// Response of `GET /ranking`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    pub ranking: Vec<RankingEntry>,
}
