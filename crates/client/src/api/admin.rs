//! `/admin` endpoints. The server rejects callers without admin rights.

use debate_platform_core::{
    DebateId, ForceEnd, JudgeAssignment, Message, SetAdmin, TopicId, TopicList, UserId,
};
use tracing::instrument;

use crate::error::ApiError;
use crate::http::ApiClient;

#[derive(Debug, Clone, Copy)]
pub struct AdminApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AdminApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Topics awaiting moderation.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn pending_topics(&self) -> Result<TopicList, ApiError> {
        self.client.get("/admin/topics/pending").await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn approve_topic(&self, topic_id: TopicId) -> Result<Message, ApiError> {
        self.client
            .post_empty(&format!("/admin/topics/{topic_id}/approve"))
            .await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn reject_topic(&self, topic_id: TopicId) -> Result<Message, ApiError> {
        self.client
            .post_empty(&format!("/admin/topics/{topic_id}/reject"))
            .await
    }

    /// End a debate immediately. `winner: None` records a draw.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn force_end_debate(
        &self,
        debate_id: DebateId,
        winner: Option<UserId>,
    ) -> Result<Message, ApiError> {
        self.client
            .post(
                &format!("/admin/debates/{debate_id}/force_end"),
                &ForceEnd { winner_id: winner },
            )
            .await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn set_admin(&self, user_id: UserId, is_admin: bool) -> Result<Message, ApiError> {
        self.client
            .post(
                &format!("/admin/users/{user_id}/set_admin"),
                &SetAdmin { is_admin },
            )
            .await
    }

    /// Make a user a judge of a debate. Debaters cannot judge their own debate.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn assign_judge(
        &self,
        debate_id: DebateId,
        user_id: UserId,
    ) -> Result<Message, ApiError> {
        self.client
            .post(
                "/admin/judges/assign",
                &JudgeAssignment { debate_id, user_id },
            )
            .await
    }
}
