//! Core types for the debate platform.
//!
//! Typed identifiers, the status vocabulary and the JSON shapes exchanged
//! with the backend.

pub mod debate;
pub mod id;
pub mod message;
pub mod ranking;
pub mod round;
pub mod status;
pub mod topic;
pub mod user;
pub mod vote;

pub use debate::{
    DebateCreated, DebateDetail, DebateList, DebateSummary, ForceEnd, JudgeAssignment, NewDebate,
};
pub use id::*;
pub use message::Message;
pub use ranking::{Ranking, RankingEntry};
pub use round::{Round, RoundSubmission, SubmissionBody};
pub use status::*;
pub use topic::{Topic, TopicApplication, TopicApplied, TopicList};
pub use user::{LoginUrl, MatchList, MatchRecord, SetAdmin, UserProfile, Verification};
pub use vote::{Ballot, VoteResults, VotingClosed};
