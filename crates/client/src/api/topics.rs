//! `/topics` endpoints.

use debate_platform_core::{
    Topic, TopicApplication, TopicApplied, TopicId, TopicList, TopicStatus,
};

use crate::error::ApiError;
use crate::http::ApiClient;

#[derive(Debug, Clone, Copy)]
pub struct TopicApi<'a> {
    client: &'a ApiClient,
}

impl<'a> TopicApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Topics with the given status, or the configured default
    /// (`approved` unless overridden).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(&self, status: Option<TopicStatus>) -> Result<TopicList, ApiError> {
        let status = status.unwrap_or(self.client.config().default_topic_status);
        self.client.get(&format!("/topics?status={status}")).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get(&self, topic_id: TopicId) -> Result<Topic, ApiError> {
        self.client.get(&format!("/topics/{topic_id}")).await
    }

    /// Submit a topic for moderation. New topics start as `pending`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn apply(&self, application: &TopicApplication) -> Result<TopicApplied, ApiError> {
        self.client.post("/topics/apply", application).await
    }
}
