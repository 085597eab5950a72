//! Debates between two users on an approved topic.

use serde::{Deserialize, Serialize};

use super::id::{DebateId, RoundId, TopicId, UserId};
use super::round::Round;
use super::status::DebateStatus;

/// A debate as listed by `GET /debates`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebateSummary {
    pub debate_id: DebateId,
    pub topic_id: TopicId,
    pub pros_user_id: UserId,
    pub cons_user_id: UserId,
    pub status: DebateStatus,
    pub round_count: Option<i32>,
    pub winner_id: Option<UserId>,
    pub topic_title: Option<String>,
    pub pros_nickname: Option<String>,
    pub cons_nickname: Option<String>,
    pub created_at: Option<String>,
}

/// A debate with participant details and its rounds, from `GET /debates/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebateDetail {
    #[serde(flatten)]
    pub summary: DebateSummary,
    pub topic_description: Option<String>,
    pub side_pros: Option<String>,
    pub side_cons: Option<String>,
    pub pros_avatar: Option<String>,
    pub pros_rating: Option<i32>,
    pub cons_avatar: Option<String>,
    pub cons_rating: Option<i32>,
    #[serde(default)]
    pub rounds: Vec<Round>,
}

/// Response of `GET /debates`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebateList {
    pub debates: Vec<DebateSummary>,
}

/// Request body of `POST /debates/create`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDebate {
    pub topic_id: TopicId,
    pub pros_user_id: UserId,
    pub cons_user_id: UserId,
}

/// Response of `POST /debates/create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebateCreated {
    pub message: String,
    pub debate_id: DebateId,
    pub round_id: RoundId,
}

/// Request body of `POST /admin/debates/{id}/force_end`.
///
/// `winner_id: None` is sent as `null` and ends the debate as a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForceEnd {
    pub winner_id: Option<UserId>,
}

/// Request body of `POST /admin/judges/assign`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgeAssignment {
    pub debate_id: DebateId,
    pub user_id: UserId,
}
