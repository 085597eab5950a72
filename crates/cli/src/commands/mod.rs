//! Command implementations shared by `main`.

pub mod auth;
pub mod rounds;

use debate_platform_client::Navigator;
use debate_platform_core::{RoundStatus, RoundStep};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

/// Errors raised by the CLI itself rather than the client library.
#[derive(Debug, Error)]
pub enum CliError {
    /// No token is stored.
    #[error("Not logged in; run `dp-cli login-url` first")]
    NotLoggedIn,

    /// The token was refused by the server.
    #[error("Stored token is no longer valid")]
    InvalidToken,

    #[error("Step {0} needs --text")]
    MissingText(RoundStep),

    #[error("Step {0} needs at least one --question")]
    MissingQuestions(RoundStep),

    /// The round is not waiting for this step.
    #[error("Round is at {status}; step {step} is not open")]
    OutOfTurn { step: RoundStep, status: RoundStatus },

    #[error("Rules must be a JSON object: {0}")]
    InvalidRules(serde_json::Error),
}

/// Navigation for a terminal: there is no page to move to, so the target
/// is reported instead.
#[derive(Debug, Default)]
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, location: &str) {
        info!(location = %location, "Navigate");
    }
}

/// Print `value` as pretty JSON on stdout.
///
/// # Errors
///
/// Returns an error if `value` cannot be serialized.
#[allow(clippy::print_stdout)]
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
