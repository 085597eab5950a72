//! Errors surfaced by the API client.

use thiserror::Error;

use crate::session::SessionError;

/// Any failure of an API call.
///
/// Every variant displays a human-readable message suitable for a
/// notification; [`ApiError::Server`] displays exactly the server-provided
/// message (or the configured fallback).
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP exchange itself failed (DNS, connection refused, body read).
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not JSON.
    #[error("invalid JSON response (HTTP {status}): {message}")]
    Decode {
        /// HTTP status of the response.
        status: u16,
        /// Parser error.
        message: String,
    },

    /// The server answered with a non-success status.
    #[error("{message}")]
    Server {
        /// HTTP status of the response.
        status: u16,
        /// The server's `error` field, or the fallback message.
        message: String,
    },

    /// The JSON did not have the shape expected for this endpoint.
    #[error("unexpected response shape: {0}")]
    UnexpectedResponse(String),

    /// The request body could not be encoded.
    #[error("failed to encode request body: {0}")]
    Encode(String),

    /// The stored token cannot be sent as a header.
    #[error("invalid header value: {0}")]
    InvalidHeader(String),

    /// Reading or writing the session failed.
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl ApiError {
    /// HTTP status code, when a response was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Decode { status, .. } | Self::Server { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the server rejected the credentials (HTTP 401).
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}
