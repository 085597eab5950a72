//! `/votes` endpoints.

use debate_platform_core::{Ballot, Message, RoundId, Side, VoteResults, VotingClosed};

use crate::error::ApiError;
use crate::http::ApiClient;

#[derive(Debug, Clone, Copy)]
pub struct VoteApi<'a> {
    client: &'a ApiClient,
}

impl<'a> VoteApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Vote for a side in a round that is in `WAIT_VOTING`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn submit(&self, round_id: RoundId, side: Side) -> Result<Message, ApiError> {
        self.client
            .post(&format!("/votes/{round_id}/vote"), &Ballot { side_voted: side })
            .await
    }

    /// Weighted tally; only available once voting has closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn results(&self, round_id: RoundId) -> Result<VoteResults, ApiError> {
        self.client.get(&format!("/votes/{round_id}/results")).await
    }

    /// Close voting and let the server decide the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn close_voting(&self, round_id: RoundId) -> Result<VotingClosed, ApiError> {
        self.client
            .post_empty(&format!("/votes/{round_id}/close_voting"))
            .await
    }
}
