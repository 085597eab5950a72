//! HTTP request layer.
//!
//! [`ApiClient::request`] turns a [`RequestOptions`] descriptor into one
//! HTTP call, attaching headers only when they apply:
//! - `Content-Type: application/json` only when a body is present
//! - `Authorization: Bearer <token>` only when the session holds a token
//!
//! The response body is always parsed as JSON. A non-success status becomes
//! [`ApiError::Server`] carrying the server's `error` field, or the
//! configured fallback message.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, instrument, warn};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::session::Session;

/// What to send: method (default `GET`) and an optional pre-serialized
/// JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<String>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::get()
    }
}

impl RequestOptions {
    #[must_use]
    pub fn get() -> Self {
        Self {
            method: Method::GET,
            body: None,
        }
    }

    /// A `POST` without a body.
    #[must_use]
    pub fn post() -> Self {
        Self {
            method: Method::POST,
            body: None,
        }
    }

    /// A `POST` whose body is `payload` serialized as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if `payload` cannot be serialized.
    pub fn post_json<B: Serialize + ?Sized>(payload: &B) -> Result<Self, ApiError> {
        let body = serde_json::to_string(payload).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(Self {
            method: Method::POST,
            body: Some(body),
        })
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Debate platform API client.
///
/// Cheap to clone; clones share the connection pool and the session.
#[derive(Clone, Debug)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

#[derive(Debug)]
struct ApiClientInner {
    client: reqwest::Client,
    config: ClientConfig,
    session: Session,
}

impl ApiClient {
    /// Create a client with a default `reqwest` connection pool.
    #[must_use]
    pub fn new(config: ClientConfig, session: Session) -> Self {
        Self::with_http_client(reqwest::Client::new(), config, session)
    }

    #[must_use]
    pub fn with_http_client(
        client: reqwest::Client,
        config: ClientConfig,
        session: Session,
    ) -> Self {
        Self {
            inner: Arc::new(ApiClientInner {
                client,
                config,
                session,
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.inner.session
    }

    /// Perform one call and return the parsed JSON body as-is.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the exchange fails,
    /// [`ApiError::Decode`] if the body is not JSON, and
    /// [`ApiError::Server`] for non-success statuses.
    #[instrument(skip(self, options), fields(method = %options.method))]
    pub async fn request(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Value, ApiError> {
        let url = self.inner.config.endpoint_url(endpoint);
        let body = options.body.filter(|b| !b.is_empty());
        let token = self.inner.session.token()?;
        let headers = build_headers(token.as_ref(), body.is_some())?;

        debug!(
            method = %options.method,
            url = %url,
            headers = ?header_names(&headers),
            "API request"
        );

        let mut builder = self
            .inner
            .client
            .request(options.method.clone(), &url)
            .headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let result = self.execute(builder).await;
        if let Err(e) = &result {
            error!(method = %options.method, url = %url, error = %e, "API request failed");
        }
        result
    }

    /// Like [`request`](Self::request), then decode the JSON into `T`.
    ///
    /// # Errors
    ///
    /// Everything [`request`](Self::request) returns, plus
    /// [`ApiError::UnexpectedResponse`] if the JSON does not match `T`.
    pub async fn request_as<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let value = self.request(endpoint, options).await?;
        decode(endpoint, value)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.request_as(endpoint, RequestOptions::get()).await
    }

    pub(crate) async fn post<T, B>(&self, endpoint: &str, payload: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized + Sync,
    {
        self.request_as(endpoint, RequestOptions::post_json(payload)?)
            .await
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(
        &self,
        endpoint: &str,
    ) -> Result<T, ApiError> {
        self.request_as(endpoint, RequestOptions::post()).await
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<Value, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        let data: Value = serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode {
            status: status.as_u16(),
            message: e.to_string(),
        })?;

        if !status.is_success() {
            error!(status = status.as_u16(), response = %data, "API error response");
            return Err(ApiError::Server {
                status: status.as_u16(),
                message: error_message(&data, &self.inner.config.fallback_error_message),
            });
        }

        debug!(status = status.as_u16(), response = %data, "API success");
        Ok(data)
    }
}

/// Headers for one request. Nothing is added unless it applies.
///
/// # Errors
///
/// Returns [`ApiError::InvalidHeader`] if the token contains characters not
/// allowed in a header value.
pub fn build_headers(token: Option<&SecretString>, has_body: bool) -> Result<HeaderMap, ApiError> {
    let mut headers = HeaderMap::new();

    if has_body {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }

    if let Some(token) = token {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
            .map_err(|e| ApiError::InvalidHeader(e.to_string()))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    Ok(headers)
}

/// The server's `error` string, or `fallback` when it is absent or empty.
#[must_use]
pub fn error_message(body: &Value, fallback: &str) -> String {
    body.get("error")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

fn header_names(headers: &HeaderMap) -> Vec<&str> {
    headers.keys().map(reqwest::header::HeaderName::as_str).collect()
}

fn decode<T: DeserializeOwned>(endpoint: &str, value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| {
        warn!(endpoint = %endpoint, error = %e, "Unexpected response shape");
        ApiError::UnexpectedResponse(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_headers_without_body_or_token() {
        let headers = build_headers(None, false).unwrap();
        assert!(headers.is_empty());
    }

    #[test]
    fn test_content_type_only_with_body() {
        let headers = build_headers(None, true).unwrap();
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_authorization_only_with_token() {
        let token = SecretString::from("abc.def.ghi".to_string());
        let headers = build_headers(Some(&token), false).unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer abc.def.ghi");
        assert!(headers.get(AUTHORIZATION).unwrap().is_sensitive());
        assert!(headers.get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn test_invalid_token_characters() {
        let token = SecretString::from("bad\ntoken".to_string());
        assert!(matches!(
            build_headers(Some(&token), false),
            Err(ApiError::InvalidHeader(_))
        ));
    }

    #[test]
    fn test_error_message_prefers_server_field() {
        let body = json!({ "error": "Permission denied" });
        assert_eq!(error_message(&body, "Request failed"), "Permission denied");
    }

    #[test]
    fn test_error_message_fallback() {
        assert_eq!(error_message(&json!({}), "Request failed"), "Request failed");
        assert_eq!(error_message(&json!({ "error": "" }), "Request failed"), "Request failed");
        assert_eq!(error_message(&json!({ "error": 5 }), "Request failed"), "Request failed");
        assert_eq!(error_message(&json!([1, 2]), "Request failed"), "Request failed");
    }

    #[test]
    fn test_post_json_options() {
        let options = RequestOptions::post_json(&json!({ "reply": "ok" })).unwrap();
        assert_eq!(options.method, Method::POST);
        assert_eq!(options.body.as_deref(), Some(r#"{"reply":"ok"}"#));
    }

    #[test]
    fn test_default_options_are_get_without_body() {
        let options = RequestOptions::default();
        assert_eq!(options.method, Method::GET);
        assert!(options.body.is_none());
    }

    #[test]
    fn test_decode_mismatch() {
        let result: Result<debate_platform_core::TopicList, _> =
            decode("/topics", json!({ "items": [] }));
        assert!(matches!(result, Err(ApiError::UnexpectedResponse(_))));
    }
}
