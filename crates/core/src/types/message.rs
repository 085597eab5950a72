//! Acknowledgement payloads.

use serde::{Deserialize, Serialize};

/// Plain `{ "message": ... }` acknowledgement returned by most mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}
