//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional:
//! - `DEBATE_API_BASE_URL` - Backend API root (default: `http://localhost:5000/api`)
//! - `DEBATE_SESSION_FILE` - Session file used by the CLI (default: `.debate-session.json`)
//! - `DEBATE_DEFAULT_TOPIC_STATUS` - Topic list filter when none is given (default: `approved`)
//! - `DEBATE_DEFAULT_DEBATE_STATUS` - Debate list filter when none is given (default: `ONGOING`)
//! - `DEBATE_FALLBACK_ERROR` - Error message when the server sends none (default: `Request failed`)
//! - `DEBATE_LOGIN_PAGE` - Navigation target on logout (default: `/pages/login.html`)

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::LazyLock;

use debate_platform_core::{DebateStatus, TopicStatus, UnknownStatus};
use thiserror::Error;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_SESSION_FILE: &str = ".debate-session.json";
pub const DEFAULT_FALLBACK_ERROR: &str = "Request failed";
pub const DEFAULT_LOGIN_PAGE: &str = "/pages/login.html";

static DEFAULT_URL: LazyLock<Url> =
    LazyLock::new(|| Url::parse(DEFAULT_BASE_URL).expect("Invalid default base URL"));

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Debate platform client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root; endpoint paths are appended to it verbatim
    pub base_url: Url,
    /// Where the file-backed session is persisted
    pub session_file: PathBuf,
    /// Filter used by `TopicApi::list` when the caller passes none
    pub default_topic_status: TopicStatus,
    /// Filter used by `DebateApi::list` when the caller passes none
    pub default_debate_status: DebateStatus,
    /// Error message for failed responses without an `error` field
    pub fallback_error_message: String,
    /// Navigation target after logout or a failed auth check
    pub login_page: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_URL.clone(),
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
            default_topic_status: TopicStatus::Approved,
            default_debate_status: DebateStatus::Ongoing,
            fallback_error_message: DEFAULT_FALLBACK_ERROR.to_string(),
            login_page: DEFAULT_LOGIN_PAGE.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let base_url = parse_base_url(&get("DEBATE_API_BASE_URL", DEFAULT_BASE_URL))?;
        let session_file = PathBuf::from(get("DEBATE_SESSION_FILE", DEFAULT_SESSION_FILE));

        let default_topic_status = parse_status(
            "DEBATE_DEFAULT_TOPIC_STATUS",
            &get("DEBATE_DEFAULT_TOPIC_STATUS", TopicStatus::Approved.as_str()),
        )?;
        let default_debate_status = parse_status(
            "DEBATE_DEFAULT_DEBATE_STATUS",
            &get("DEBATE_DEFAULT_DEBATE_STATUS", DebateStatus::Ongoing.as_str()),
        )?;

        let fallback_error_message = get("DEBATE_FALLBACK_ERROR", DEFAULT_FALLBACK_ERROR);
        if fallback_error_message.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "DEBATE_FALLBACK_ERROR".to_string(),
                "must not be empty".to_string(),
            ));
        }

        Ok(Self {
            base_url,
            session_file,
            default_topic_status,
            default_debate_status,
            fallback_error_message,
            login_page: get("DEBATE_LOGIN_PAGE", DEFAULT_LOGIN_PAGE),
        })
    }

    /// Full URL for an endpoint path such as `/topics?status=approved`.
    #[must_use]
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url.as_str().trim_end_matches('/'))
    }
}

fn parse_status<T>(var: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr<Err = UnknownStatus>,
{
    raw.parse()
        .map_err(|e: UnknownStatus| ConfigError::InvalidEnvVar(var.to_string(), e.to_string()))
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw)
        .map_err(|e| ConfigError::InvalidEnvVar("DEBATE_API_BASE_URL".to_string(), e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            "DEBATE_API_BASE_URL".to_string(),
            format!("unsupported scheme: {}", url.scheme()),
        ));
    }

    Ok(url)
}
