//! Votes and round results.

use serde::{Deserialize, Serialize};

use super::id::RoundId;
use super::status::{RoundWinner, Side};

/// Request body of `POST /votes/{id}/vote`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ballot {
    pub side_voted: Side,
}

/// Weighted tally of a closed round, from `GET /votes/{id}/results`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteResults {
    pub round_id: RoundId,
    pub pros_votes: i64,
    pub cons_votes: i64,
    pub total_votes: i64,
    pub pros_percentage: f64,
    pub cons_percentage: f64,
    pub winner_side: Option<RoundWinner>,
}

/// Response of `POST /votes/{id}/close_voting`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotingClosed {
    pub message: String,
    pub winner_side: Option<RoundWinner>,
    pub debate_finished: bool,
}
