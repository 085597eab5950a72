//! Endpoint facades, one per resource domain.
//!
//! Each facade borrows the [`ApiClient`] and maps every method to exactly
//! one HTTP call. There are no retries, no pagination and no client-side
//! validation of identifiers; the server rejects bad input.
//!
//! ```rust,no_run
//! # async fn demo() -> Result<(), debate_platform_client::ApiError> {
//! use debate_platform_client::{ApiClient, ClientConfig, Session};
//!
//! let client = ApiClient::new(ClientConfig::default(), Session::in_memory());
//! let topics = client.topics().list(None).await?;
//! # Ok(())
//! # }
//! ```

mod admin;
mod auth;
mod debates;
mod ranking;
mod rounds;
mod topics;
mod users;
mod votes;

pub use admin::AdminApi;
pub use auth::{AuthApi, LoginError};
pub use debates::DebateApi;
pub use ranking::RankingApi;
pub use rounds::RoundApi;
pub use topics::TopicApi;
pub use users::UserApi;
pub use votes::VoteApi;

use crate::http::ApiClient;

impl ApiClient {
    #[must_use]
    pub const fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    #[must_use]
    pub const fn users(&self) -> UserApi<'_> {
        UserApi::new(self)
    }

    #[must_use]
    pub const fn topics(&self) -> TopicApi<'_> {
        TopicApi::new(self)
    }

    #[must_use]
    pub const fn debates(&self) -> DebateApi<'_> {
        DebateApi::new(self)
    }

    #[must_use]
    pub const fn rounds(&self) -> RoundApi<'_> {
        RoundApi::new(self)
    }

    #[must_use]
    pub const fn votes(&self) -> VoteApi<'_> {
        VoteApi::new(self)
    }

    #[must_use]
    pub const fn ranking(&self) -> RankingApi<'_> {
        RankingApi::new(self)
    }

    #[must_use]
    pub const fn admin(&self) -> AdminApi<'_> {
        AdminApi::new(self)
    }
}
