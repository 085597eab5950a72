//! Status vocabulary for debates, topics and rounds.
//!
//! Each entity has its own enum with the exact wire spelling the backend
//! uses. [`Status`] unifies them for display, with an explicit
//! [`Status::Unrecognized`] variant for values the client does not know.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Color class used for any status without a dedicated color.
pub const NEUTRAL_COLOR_CLASS: &str = "bg-gray-100 text-gray-800";

/// A status string did not match any variant of the target enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} status: {value}")]
pub struct UnknownStatus {
    /// Which vocabulary was being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

/// Debate lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DebateStatus {
    New,
    #[default]
    Ongoing,
    Finished,
}

impl DebateStatus {
    pub const ALL: [Self; 3] = [Self::New, Self::Ongoing, Self::Finished];

    /// Wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::Ongoing => "ONGOING",
            Self::Finished => "FINISHED",
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "新建",
            Self::Ongoing => "進行中",
            Self::Finished => "已結束",
        }
    }

    /// Badge color class.
    #[must_use]
    pub const fn color_class(self) -> &'static str {
        match self {
            Self::New => "bg-blue-100 text-blue-800",
            Self::Ongoing => "bg-green-100 text-green-800",
            Self::Finished => NEUTRAL_COLOR_CLASS,
        }
    }
}

/// Topic moderation status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TopicStatus {
    Pending,
    #[default]
    Approved,
    Rejected,
}

impl TopicStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::Approved, Self::Rejected];

    /// Wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "待審核",
            Self::Approved => "已批准",
            Self::Rejected => "已拒絕",
        }
    }

    /// Badge color class.
    #[must_use]
    pub const fn color_class(self) -> &'static str {
        match self {
            Self::Pending => "bg-yellow-100 text-yellow-800",
            Self::Approved => "bg-green-100 text-green-800",
            Self::Rejected => "bg-red-100 text-red-800",
        }
    }
}

/// Round stage.
///
/// The six `Wait*` stages are the structured exchange, followed by voting
/// and the published result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundStatus {
    WaitProsStatement,
    WaitConsQuestions,
    WaitProsReply,
    WaitConsStatement,
    WaitProsQuestions,
    WaitConsReply,
    WaitVoting,
    VotingClosed,
    RoundResult,
}

impl RoundStatus {
    pub const ALL: [Self; 9] = [
        Self::WaitProsStatement,
        Self::WaitConsQuestions,
        Self::WaitProsReply,
        Self::WaitConsStatement,
        Self::WaitProsQuestions,
        Self::WaitConsReply,
        Self::WaitVoting,
        Self::VotingClosed,
        Self::RoundResult,
    ];

    /// Wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WaitProsStatement => "WAIT_PROS_STATEMENT",
            Self::WaitConsQuestions => "WAIT_CONS_QUESTIONS",
            Self::WaitProsReply => "WAIT_PROS_REPLY",
            Self::WaitConsStatement => "WAIT_CONS_STATEMENT",
            Self::WaitProsQuestions => "WAIT_PROS_QUESTIONS",
            Self::WaitConsReply => "WAIT_CONS_REPLY",
            Self::WaitVoting => "WAIT_VOTING",
            Self::VotingClosed => "VOTING_CLOSED",
            Self::RoundResult => "ROUND_RESULT",
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::WaitProsStatement => "等待正方主張",
            Self::WaitConsQuestions => "等待反方質詢",
            Self::WaitProsReply => "等待正方回覆",
            Self::WaitConsStatement => "等待反方主張",
            Self::WaitProsQuestions => "等待正方質詢",
            Self::WaitConsReply => "等待反方回覆",
            Self::WaitVoting => "投票中",
            Self::VotingClosed => "投票已關閉",
            Self::RoundResult => "回合結束",
        }
    }

    /// Badge color class. Only the voting stage is highlighted.
    #[must_use]
    pub const fn color_class(self) -> &'static str {
        match self {
            Self::WaitVoting => "bg-purple-100 text-purple-800",
            _ => NEUTRAL_COLOR_CLASS,
        }
    }

    /// The submission this stage is waiting for, if any.
    #[must_use]
    pub const fn awaiting(self) -> Option<RoundStep> {
        match self {
            Self::WaitProsStatement => Some(RoundStep::ProsStatement),
            Self::WaitConsQuestions => Some(RoundStep::ConsQuestions),
            Self::WaitProsReply => Some(RoundStep::ProsReply),
            Self::WaitConsStatement => Some(RoundStep::ConsStatement),
            Self::WaitProsQuestions => Some(RoundStep::ProsQuestions),
            Self::WaitConsReply => Some(RoundStep::ConsReply),
            Self::WaitVoting | Self::VotingClosed | Self::RoundResult => None,
        }
    }
}

/// A debate side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Pros,
    Cons,
}

impl Side {
    pub const ALL: [Self; 2] = [Self::Pros, Self::Cons];

    /// Wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pros => "pros",
            Self::Cons => "cons",
        }
    }
}

/// Outcome of a single round's vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundWinner {
    Pros,
    Cons,
    Draw,
}

/// Result of a finished debate from one participant's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchResult {
    Win,
    Loss,
    Draw,
}

/// One submission step inside a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundStep {
    ProsStatement,
    ConsQuestions,
    ProsReply,
    ConsStatement,
    ProsQuestions,
    ConsReply,
}

impl RoundStep {
    pub const ALL: [Self; 6] = [
        Self::ProsStatement,
        Self::ConsQuestions,
        Self::ProsReply,
        Self::ConsStatement,
        Self::ProsQuestions,
        Self::ConsReply,
    ];

    /// Path segment under `/rounds/{id}/`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProsStatement => "pros_statement",
            Self::ConsQuestions => "cons_questions",
            Self::ProsReply => "pros_reply",
            Self::ConsStatement => "cons_statement",
            Self::ProsQuestions => "pros_questions",
            Self::ConsReply => "cons_reply",
        }
    }

    /// The side allowed to submit this step.
    #[must_use]
    pub const fn side(self) -> Side {
        match self {
            Self::ProsStatement | Self::ProsReply | Self::ProsQuestions => Side::Pros,
            Self::ConsQuestions | Self::ConsStatement | Self::ConsReply => Side::Cons,
        }
    }
}

macro_rules! impl_wire_str {
    ($ty:ty, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownStatus;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .into_iter()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| UnknownStatus {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

impl_wire_str!(DebateStatus, "debate");
impl_wire_str!(TopicStatus, "topic");
impl_wire_str!(RoundStatus, "round");
impl_wire_str!(Side, "side");
impl_wire_str!(RoundStep, "round step");

/// Any status the UI may need to display.
///
/// Parsing never fails: values outside the known vocabularies become
/// [`Status::Unrecognized`], which displays the raw value with the neutral
/// color.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Status {
    Debate(DebateStatus),
    Topic(TopicStatus),
    Round(RoundStatus),
    Unrecognized(String),
}

impl Status {
    /// Classify a raw status string.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if let Ok(s) = raw.parse::<DebateStatus>() {
            return Self::Debate(s);
        }
        if let Ok(s) = raw.parse::<TopicStatus>() {
            return Self::Topic(s);
        }
        if let Ok(s) = raw.parse::<RoundStatus>() {
            return Self::Round(s);
        }
        Self::Unrecognized(raw.to_string())
    }

    /// Display label; unrecognized values are shown verbatim.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Debate(s) => s.label(),
            Self::Topic(s) => s.label(),
            Self::Round(s) => s.label(),
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Badge color class; unrecognized values get [`NEUTRAL_COLOR_CLASS`].
    #[must_use]
    pub fn color_class(&self) -> &'static str {
        match self {
            Self::Debate(s) => s.color_class(),
            Self::Topic(s) => s.color_class(),
            Self::Round(s) => s.color_class(),
            Self::Unrecognized(_) => NEUTRAL_COLOR_CLASS,
        }
    }
}

impl From<DebateStatus> for Status {
    fn from(s: DebateStatus) -> Self {
        Self::Debate(s)
    }
}

impl From<TopicStatus> for Status {
    fn from(s: TopicStatus) -> Self {
        Self::Topic(s)
    }
}

impl From<RoundStatus> for Status {
    fn from(s: RoundStatus) -> Self {
        Self::Round(s)
    }
}
