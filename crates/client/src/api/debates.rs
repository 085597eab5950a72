//! `/debates` endpoints.

use debate_platform_core::{
    DebateCreated, DebateDetail, DebateId, DebateList, DebateStatus, NewDebate,
};

use crate::error::ApiError;
use crate::http::ApiClient;

#[derive(Debug, Clone, Copy)]
pub struct DebateApi<'a> {
    client: &'a ApiClient,
}

impl<'a> DebateApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Debates with the given status, or the configured default
    /// (`ONGOING` unless overridden).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(&self, status: Option<DebateStatus>) -> Result<DebateList, ApiError> {
        let status = status.unwrap_or(self.client.config().default_debate_status);
        self.client.get(&format!("/debates?status={status}")).await
    }

    /// A debate with its rounds.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get(&self, debate_id: DebateId) -> Result<DebateDetail, ApiError> {
        self.client.get(&format!("/debates/{debate_id}")).await
    }

    /// Open a debate on an approved topic (admin only).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create(&self, debate: &NewDebate) -> Result<DebateCreated, ApiError> {
        self.client.post("/debates/create", debate).await
    }
}
