//! User profiles, match history and authentication payloads.

use serde::{Deserialize, Serialize};

use super::id::{DebateId, TopicId, UserId};
use super::status::MatchResult;

/// A user as returned by `/users/me`, `/users/{id}` and `/auth/verify`.
///
/// Cached client-side for display only; the backend stays authoritative.
/// Public profiles omit `is_admin`, which then defaults to `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(alias = "id")]
    pub user_id: UserId,
    pub nickname: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub rating: i32,
    #[serde(default)]
    pub wins: Option<i32>,
    #[serde(default)]
    pub losses: Option<i32>,
    #[serde(default)]
    pub draws: Option<i32>,
    #[serde(default)]
    pub is_admin: bool,
}

/// Response of `GET /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginUrl {
    /// Identity provider authorization URL to send the user to.
    pub auth_url: String,
}

/// Response of `GET /auth/verify`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verification {
    pub valid: bool,
    pub user: UserProfile,
}

/// One finished debate in a user's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub debate_id: DebateId,
    pub user_id: UserId,
    pub result: MatchResult,
    pub rating_before: Option<i32>,
    pub rating_after: Option<i32>,
    pub topic_id: Option<TopicId>,
    pub topic_title: Option<String>,
    pub opponent_id: Option<UserId>,
    pub opponent_nickname: Option<String>,
    pub created_at: Option<String>,
}

/// Response of `GET /users/{id}/matches`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchList {
    pub matches: Vec<MatchRecord>,
}

/// Request body of `POST /admin/users/{id}/set_admin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetAdmin {
    pub is_admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_from_me_endpoint() {
        let user: UserProfile = serde_json::from_value(json!({
            "user_id": 3,
            "nickname": "Alice",
            "avatar": null,
            "rating": 1532,
            "wins": 4,
            "losses": 1,
            "draws": 0,
            "is_admin": true
        }))
        .unwrap();

        assert_eq!(user.user_id, UserId::new(3));
        assert_eq!(user.rating, 1532);
        assert!(user.is_admin);
    }

    #[test]
    fn test_public_profile_defaults_is_admin() {
        let user: UserProfile = serde_json::from_value(json!({
            "id": 9,
            "nickname": "Bob",
            "rating": 1500
        }))
        .unwrap();

        assert_eq!(user.user_id, UserId::new(9));
        assert!(!user.is_admin);
        assert_eq!(user.wins, None);
    }

    #[test]
    fn test_profile_requires_nickname() {
        let result = serde_json::from_value::<UserProfile>(json!({ "user_id": 1 }));
        assert!(result.is_err());
    }

    #[test]
    fn test_match_record() {
        let list: MatchList = serde_json::from_value(json!({
            "matches": [{
                "history_id": 1,
                "debate_id": 2,
                "user_id": 3,
                "result": "win",
                "rating_before": 1500,
                "rating_after": 1516,
                "topic_id": 4,
                "topic_title": "Remote work",
                "opponent_id": 5,
                "opponent_nickname": "Carol",
                "created_at": "2026-10-01T12:00:00"
            }]
        }))
        .unwrap();

        let record = list.matches.first().unwrap();
        assert_eq!(record.result, MatchResult::Win);
        assert_eq!(record.opponent_nickname.as_deref(), Some("Carol"));
    }
}
