//! Debate topics.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::id::{TopicId, UserId};
use super::status::TopicStatus;

/// A debate topic.
///
/// `rules` is free-form JSON. The detail endpoint decodes it into an object,
/// the list endpoints return the stored text as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub topic_id: TopicId,
    pub title: String,
    pub description: Option<String>,
    pub side_pros: Option<String>,
    pub side_cons: Option<String>,
    #[serde(default)]
    pub rules: Value,
    pub status: TopicStatus,
    pub created_by: Option<UserId>,
    pub creator_nickname: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Response of `GET /topics` and `GET /admin/topics/pending`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicList {
    pub topics: Vec<Topic>,
}

/// Request body of `POST /topics/apply`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicApplication {
    pub title: String,
    pub description: String,
    pub side_pros: String,
    pub side_cons: String,
    #[serde(default)]
    pub rules: Map<String, Value>,
}

/// Response of `POST /topics/apply`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicApplied {
    pub message: String,
    pub topic_id: TopicId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_topic_detail_with_decoded_rules() {
        let topic: Topic = serde_json::from_value(json!({
            "topic_id": 1,
            "title": "Should homework be banned?",
            "description": "K-12 only",
            "side_pros": "Yes",
            "side_cons": "No",
            "rules": { "max_rounds": 5 },
            "status": "approved",
            "created_by": 2,
            "creator_nickname": "Alice",
            "created_at": "Mon, 19 Oct 2026 08:00:00 GMT"
        }))
        .unwrap();

        assert_eq!(topic.status, TopicStatus::Approved);
        assert_eq!(topic.rules["max_rounds"], 5);
    }

    #[test]
    fn test_topic_list_keeps_raw_rules() {
        let list: TopicList = serde_json::from_value(json!({
            "topics": [{
                "topic_id": 1,
                "title": "t",
                "rules": "{\"max_rounds\": 3}",
                "status": "pending"
            }]
        }))
        .unwrap();

        let topic = list.topics.first().unwrap();
        assert_eq!(topic.status, TopicStatus::Pending);
        assert!(topic.rules.is_string());
    }

    #[test]
    fn test_unknown_topic_status_is_rejected() {
        let result = serde_json::from_value::<Topic>(json!({
            "topic_id": 1,
            "title": "t",
            "status": "archived"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_application_serializes_empty_rules_as_object() {
        let app = TopicApplication {
            title: "t".to_string(),
            description: "d".to_string(),
            side_pros: "p".to_string(),
            side_cons: "c".to_string(),
            rules: Map::new(),
        };
        let value = serde_json::to_value(&app).unwrap();
        assert_eq!(value["rules"], json!({}));
    }
}
