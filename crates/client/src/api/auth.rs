//! Authentication: identity-provider login, token verification, logout.

use debate_platform_core::{LoginUrl, UserId, UserProfile, Verification};
use thiserror::Error;
use tracing::{info, instrument, warn};
use url::Url;

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::navigation::Navigator;
use crate::session::{Session, SessionError};

/// Errors completing a login redirect.
#[derive(Debug, Error)]
pub enum LoginError {
    /// The callback address could not be parsed.
    #[error("invalid callback URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The callback carried no `token` parameter.
    #[error("login callback did not contain a token")]
    MissingToken,

    /// The server answered but declared the token invalid.
    #[error("token was rejected by the server")]
    Rejected,

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// `/auth` endpoints plus the local session lifecycle.
#[derive(Debug, Clone, Copy)]
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Fetch the identity provider's authorization URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn login_url(&self) -> Result<LoginUrl, ApiError> {
        self.client.get("/auth/login").await
    }

    /// Check the stored token and cache the returned profile when valid.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the profile cannot be cached.
    #[instrument(skip(self))]
    pub async fn verify(&self) -> Result<Verification, ApiError> {
        let verification: Verification = self.client.get("/auth/verify").await?;
        if verification.valid {
            self.client.session().set_current_user(&verification.user)?;
        }
        Ok(verification)
    }

    /// Finish a login from the redirect the backend sends after the identity
    /// provider callback (`...login.html?token=...&user_id=...&nickname=...`).
    ///
    /// Stores the token, caches a provisional profile from the query
    /// parameters, then replaces it with the verified profile. On any
    /// failure after the token was stored, the session is cleared again.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError`] if the URL has no token, verification fails,
    /// or the session cannot be written.
    #[instrument(skip_all)]
    pub async fn complete_login(&self, callback_url: &str) -> Result<UserProfile, LoginError> {
        let callback = parse_callback(callback_url)?;
        let session = self.client.session();

        session.set_token(&callback.token)?;
        if let Some(user) = callback.provisional_user() {
            session.set_current_user(&user)?;
        }

        match self.verify().await {
            Ok(verification) if verification.valid => {
                info!(user_id = %verification.user.user_id, "Login completed");
                Ok(verification.user)
            }
            Ok(_) => {
                warn!("Server rejected login token");
                discard_session(session);
                Err(LoginError::Rejected)
            }
            Err(e) => {
                discard_session(session);
                Err(e.into())
            }
        }
    }

    /// Drop the local session and navigate to the login page.
    ///
    /// No request is sent. Navigation happens exactly once, even if clearing
    /// the session fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the session could not be cleared.
    #[instrument(skip_all)]
    pub fn logout(&self, navigator: &dyn Navigator) -> Result<(), SessionError> {
        let cleared = self.client.session().clear();
        navigator.navigate(&self.client.config().login_page);
        info!("Logged out");
        cleared
    }

    /// Return `true` if a token is stored; otherwise navigate to the login
    /// page and return `false`.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be read.
    pub fn require_auth(&self, navigator: &dyn Navigator) -> Result<bool, SessionError> {
        if self.client.session().is_logged_in()? {
            return Ok(true);
        }
        navigator.navigate(&self.client.config().login_page);
        Ok(false)
    }
}

#[derive(Debug, PartialEq, Eq)]
struct LoginCallback {
    token: String,
    user_id: Option<UserId>,
    nickname: Option<String>,
    avatar: Option<String>,
}

impl LoginCallback {
    fn provisional_user(&self) -> Option<UserProfile> {
        Some(UserProfile {
            user_id: self.user_id?,
            nickname: self.nickname.clone().unwrap_or_default(),
            avatar: self.avatar.clone().filter(|a| !a.is_empty()),
            rating: 0,
            wins: None,
            losses: None,
            draws: None,
            is_admin: false,
        })
    }
}

/// Clear a half-finished login. A storage failure is logged, not returned,
/// so the caller keeps the error that ended the login.
fn discard_session(session: &Session) {
    if let Err(e) = session.clear() {
        warn!(error = %e, "Failed to clear session after login failure");
    }
}

/// Accepts absolute URLs and site-relative paths.
fn parse_callback(raw: &str) -> Result<LoginCallback, LoginError> {
    let url = Url::parse("http://localhost/")?.join(raw)?;

    let mut token = None;
    let mut user_id = None;
    let mut nickname = None;
    let mut avatar = None;
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "token" => token = Some(value.into_owned()),
            "user_id" => user_id = value.parse().ok(),
            "nickname" => nickname = Some(value.into_owned()),
            "avatar" => avatar = Some(value.into_owned()),
            _ => {}
        }
    }

    let token = token.filter(|t| !t.is_empty()).ok_or(LoginError::MissingToken)?;
    Ok(LoginCallback {
        token,
        user_id,
        nickname,
        avatar,
    })
}
