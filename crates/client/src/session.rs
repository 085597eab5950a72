//! Session store for the bearer token and the cached user profile.
//!
//! [`Session`] is the handle every component receives; it delegates to a
//! pluggable [`SessionBackend`] string store. Two backends ship with the
//! crate:
//! - [`MemoryBackend`] - process-local, used by tests and embedders
//! - [`FileBackend`] - a JSON object on disk that survives restarts
//!
//! Each backend call is atomic on its own; there are no cross-call
//! transactions.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, RwLock};

use debate_platform_core::UserProfile;
use secrecy::SecretString;
use thiserror::Error;
use tracing::{debug, instrument};

/// Storage keys.
pub mod keys {
    /// Raw bearer token.
    pub const AUTH_TOKEN: &str = "auth_token";

    /// JSON-encoded [`UserProfile`](debate_platform_core::UserProfile).
    pub const CURRENT_USER: &str = "current_user";
}

/// Errors raised by session storage.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The backend could not read or write its storage.
    #[error("session storage error: {0}")]
    Storage(String),

    /// A stored value could not be encoded or decoded.
    #[error("session data error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A string key-value store backing a [`Session`].
pub trait SessionBackend: Send + Sync {
    /// Read a value.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;

    /// Write a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Delete a value. Deleting a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be written.
    fn remove(&self, key: &str) -> Result<(), SessionError>;
}

/// In-memory backend.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> SessionError {
    SessionError::Storage("lock poisoned".to_string())
}

impl SessionBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.entries.read().map_err(poisoned)?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.entries
            .write()
            .map_err(poisoned)?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.entries.write().map_err(poisoned)?.remove(key);
        Ok(())
    }
}

/// File backend storing all keys as one JSON object.
///
/// A missing file reads as an empty store. Writes go to a sibling temporary
/// file which is then renamed over the original.
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileBackend {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<HashMap<String, String>, SessionError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(HashMap::new()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(SessionError::Storage(format!(
                "failed to read {}: {e}",
                self.path.display()
            ))),
        }
    }

    fn store(&self, entries: &HashMap<String, String>) -> Result<(), SessionError> {
        let text = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, text)
            .and_then(|()| std::fs::rename(&tmp, &self.path))
            .map_err(|e| {
                SessionError::Storage(format!("failed to write {}: {e}", self.path.display()))
            })
    }

    fn update<F>(&self, f: F) -> Result<(), SessionError>
    where
        F: FnOnce(&mut HashMap<String, String>),
    {
        let _guard = self.lock.lock().map_err(poisoned)?;
        let mut entries = self.load()?;
        f(&mut entries);
        self.store(&entries)
    }
}

impl SessionBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        let _guard = self.lock.lock().map_err(poisoned)?;
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.update(|entries| {
            entries.remove(key);
        })
    }
}

/// Session context shared by the HTTP client and the view helpers.
///
/// Cheap to clone; clones share the same backend.
#[derive(Clone)]
pub struct Session {
    backend: Arc<dyn SessionBackend>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}

impl Session {
    #[must_use]
    pub fn new(backend: impl SessionBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// A session backed by a fresh [`MemoryBackend`].
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// A session persisted to `path`.
    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::new(FileBackend::new(path))
    }

    /// The stored bearer token. An empty stored string counts as absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    pub fn token(&self) -> Result<Option<SecretString>, SessionError> {
        Ok(self
            .backend
            .get(keys::AUTH_TOKEN)?
            .filter(|t| !t.is_empty())
            .map(SecretString::from))
    }

    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    #[instrument(skip_all)]
    pub fn set_token(&self, token: &str) -> Result<(), SessionError> {
        debug!("Storing auth token");
        self.backend.set(keys::AUTH_TOKEN, token)
    }

    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    pub fn clear_token(&self) -> Result<(), SessionError> {
        self.backend.remove(keys::AUTH_TOKEN)
    }

    /// The cached user profile.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Serialization`] if the stored text is not a
    /// valid profile; the entry is left untouched.
    pub fn current_user(&self) -> Result<Option<UserProfile>, SessionError> {
        self.backend
            .get(keys::CURRENT_USER)?
            .map(|text| serde_json::from_str(&text))
            .transpose()
            .map_err(SessionError::from)
    }

    /// # Errors
    ///
    /// Returns an error if the profile cannot be encoded or stored.
    #[instrument(skip_all, fields(user_id = %user.user_id))]
    pub fn set_current_user(&self, user: &UserProfile) -> Result<(), SessionError> {
        debug!("Caching current user");
        let text = serde_json::to_string(user)?;
        self.backend.set(keys::CURRENT_USER, &text)
    }

    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    pub fn clear_current_user(&self) -> Result<(), SessionError> {
        self.backend.remove(keys::CURRENT_USER)
    }

    /// Remove both the token and the cached profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    pub fn clear(&self) -> Result<(), SessionError> {
        self.clear_token()?;
        self.clear_current_user()
    }

    /// Whether a token is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    pub fn is_logged_in(&self) -> Result<bool, SessionError> {
        Ok(self.token()?.is_some())
    }
}
