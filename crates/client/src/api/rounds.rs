//! `/rounds` endpoints.

use debate_platform_core::{Message, Round, RoundId, RoundSubmission};
use tracing::instrument;

use crate::error::ApiError;
use crate::http::ApiClient;

/// Round detail and the six submission steps.
///
/// Which side may submit, and when, is enforced by the server.
#[derive(Debug, Clone, Copy)]
pub struct RoundApi<'a> {
    client: &'a ApiClient,
}

impl<'a> RoundApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get(&self, round_id: RoundId) -> Result<Round, ApiError> {
        self.client.get(&format!("/rounds/{round_id}")).await
    }

    /// Post `submission` to `/rounds/{id}/{step}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, submission), fields(step = %submission.step()))]
    pub async fn submit(
        &self,
        round_id: RoundId,
        submission: &RoundSubmission,
    ) -> Result<Message, ApiError> {
        let endpoint = format!("/rounds/{round_id}/{}", submission.step());
        self.client.post(&endpoint, &submission.body()).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn submit_pros_statement(
        &self,
        round_id: RoundId,
        statement: impl Into<String>,
    ) -> Result<Message, ApiError> {
        self.submit(round_id, &RoundSubmission::ProsStatement(statement.into()))
            .await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn submit_cons_questions(
        &self,
        round_id: RoundId,
        questions: Vec<String>,
    ) -> Result<Message, ApiError> {
        self.submit(round_id, &RoundSubmission::ConsQuestions(questions))
            .await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn submit_pros_reply(
        &self,
        round_id: RoundId,
        reply: impl Into<String>,
    ) -> Result<Message, ApiError> {
        self.submit(round_id, &RoundSubmission::ProsReply(reply.into()))
            .await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn submit_cons_statement(
        &self,
        round_id: RoundId,
        statement: impl Into<String>,
    ) -> Result<Message, ApiError> {
        self.submit(round_id, &RoundSubmission::ConsStatement(statement.into()))
            .await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn submit_pros_questions(
        &self,
        round_id: RoundId,
        questions: Vec<String>,
    ) -> Result<Message, ApiError> {
        self.submit(round_id, &RoundSubmission::ProsQuestions(questions))
            .await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn submit_cons_reply(
        &self,
        round_id: RoundId,
        reply: impl Into<String>,
    ) -> Result<Message, ApiError> {
        self.submit(round_id, &RoundSubmission::ConsReply(reply.into()))
            .await
    }
}
