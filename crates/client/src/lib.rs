//! Debate platform client library.
//!
//! - [`ApiClient`] performs authenticated JSON calls against the backend
//!   and exposes one facade per resource (`client.topics()`,
//!   `client.rounds()`, ...).
//! - [`Session`] persists the bearer token and cached user profile.
//! - [`view`] formats timestamps and statuses and renders the navbar,
//!   toasts and loading overlay into an in-memory [`view::Page`].
//!
//! ```rust,no_run
//! use debate_platform_client::{ApiClient, ClientConfig, Session};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::from_env()?;
//! let session = Session::file(&config.session_file);
//! let client = ApiClient::new(config, session);
//!
//! let topics = client.topics().list(None).await?;
//! # let _ = topics;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod navigation;
pub mod session;
pub mod view;

pub use api::{
    AdminApi, AuthApi, DebateApi, LoginError, RankingApi, RoundApi, TopicApi, UserApi, VoteApi,
};
pub use config::{ClientConfig, ConfigError};
pub use error::ApiError;
pub use http::{ApiClient, RequestOptions};
pub use navigation::Navigator;
pub use session::{FileBackend, MemoryBackend, Session, SessionBackend, SessionError};
