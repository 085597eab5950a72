//! Rounds and round submissions.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::id::{DebateId, RoundId};
use super::status::{RoundStatus, RoundStep, RoundWinner};

/// One structured exchange inside a debate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub round_id: RoundId,
    pub debate_id: DebateId,
    pub round_number: i32,
    pub status: RoundStatus,
    pub pros_statement: Option<String>,
    #[serde(default, deserialize_with = "questions")]
    pub cons_questions: Option<Vec<String>>,
    pub pros_reply: Option<String>,
    pub cons_statement: Option<String>,
    #[serde(default, deserialize_with = "questions")]
    pub pros_questions: Option<Vec<String>>,
    pub cons_reply: Option<String>,
    pub voting_deadline: Option<String>,
    pub winner_side: Option<RoundWinner>,
    pub created_at: Option<String>,
}

/// Question lists arrive decoded from `/rounds/{id}` but as stored JSON
/// text when embedded in a debate. Text that is not a JSON list becomes a
/// single question.
fn questions<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let list = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(text)) => match serde_json::from_str::<Vec<String>>(&text) {
            Ok(list) => list,
            Err(_) if text.is_empty() => return Ok(None),
            Err(_) => vec![text],
        },
        Some(other) => Vec::<String>::deserialize(other).map_err(serde::de::Error::custom)?,
    };
    Ok(Some(list))
}

/// Content submitted for one [`RoundStep`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundSubmission {
    ProsStatement(String),
    ConsQuestions(Vec<String>),
    ProsReply(String),
    ConsStatement(String),
    ProsQuestions(Vec<String>),
    ConsReply(String),
}

/// JSON body sent for a round submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SubmissionBody<'a> {
    Statement { statement: &'a str },
    Questions { questions: &'a [String] },
    Reply { reply: &'a str },
}

impl RoundSubmission {
    /// The step this content belongs to.
    #[must_use]
    pub const fn step(&self) -> RoundStep {
        match self {
            Self::ProsStatement(_) => RoundStep::ProsStatement,
            Self::ConsQuestions(_) => RoundStep::ConsQuestions,
            Self::ProsReply(_) => RoundStep::ProsReply,
            Self::ConsStatement(_) => RoundStep::ConsStatement,
            Self::ProsQuestions(_) => RoundStep::ProsQuestions,
            Self::ConsReply(_) => RoundStep::ConsReply,
        }
    }

    #[must_use]
    pub fn body(&self) -> SubmissionBody<'_> {
        match self {
            Self::ProsStatement(statement) | Self::ConsStatement(statement) => {
                SubmissionBody::Statement { statement }
            }
            Self::ConsQuestions(questions) | Self::ProsQuestions(questions) => {
                SubmissionBody::Questions { questions }
            }
            Self::ProsReply(reply) | Self::ConsReply(reply) => SubmissionBody::Reply { reply },
        }
    }
}
