//! `/ranking` endpoint.

use debate_platform_core::Ranking;

use crate::error::ApiError;
use crate::http::ApiClient;

#[derive(Debug, Clone, Copy)]
pub struct RankingApi<'a> {
    client: &'a ApiClient,
}

impl<'a> RankingApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Leaderboard ordered by rating.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get(&self) -> Result<Ranking, ApiError> {
        self.client.get("/ranking").await
    }
}
