//! `/users` endpoints.

use debate_platform_core::{MatchList, UserId, UserProfile};

use crate::error::ApiError;
use crate::http::ApiClient;

#[derive(Debug, Clone, Copy)]
pub struct UserApi<'a> {
    client: &'a ApiClient,
}

impl<'a> UserApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Profile of the token owner. Does not touch the cached profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn me(&self) -> Result<UserProfile, ApiError> {
        self.client.get("/users/me").await
    }

    /// Public profile of any user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get(&self, user_id: UserId) -> Result<UserProfile, ApiError> {
        self.client.get(&format!("/users/{user_id}")).await
    }

    /// Finished debates of a user, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn matches(&self, user_id: UserId) -> Result<MatchList, ApiError> {
        self.client.get(&format!("/users/{user_id}/matches")).await
    }
}
