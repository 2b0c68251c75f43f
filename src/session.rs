// src/session.rs
// Durable storage for the bearer-token pair. The store is the single
// source of truth for "is this client authenticated": presence of an
// access token is the only discriminator, expiry is discovered by the
// request pipeline when a call 401s.

use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::CONFIG;

/// Access/refresh pair as issued by login, the OAuth callback, or a
/// successful refresh. Always replaced as a unit, never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Storage for the session token pair.
///
/// None of these operations fail: a broken backing store degrades to
/// `None` reads and no-op writes, mirroring how the client behaves when
/// persistent storage is unavailable.
pub trait SessionStore: Send + Sync {
    /// Persist both tokens, replacing any prior pair.
    fn store(&self, pair: TokenPair);

    fn access_token(&self) -> Option<String>;

    fn refresh_token(&self) -> Option<String>;

    /// Remove both tokens. Idempotent.
    fn clear(&self);

    /// Presence check only. An expired-but-present token still counts as
    /// authenticated until a request fails.
    fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }
}

/// In-memory store, used by tests and short-lived embedders.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    tokens: RwLock<Option<TokenPair>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn store(&self, pair: TokenPair) {
        if let Ok(mut guard) = self.tokens.write() {
            *guard = Some(pair);
        }
    }

    fn access_token(&self) -> Option<String> {
        self.tokens
            .read()
            .ok()
            .and_then(|guard| guard.as_ref().map(|pair| pair.access_token.clone()))
    }

    fn refresh_token(&self) -> Option<String> {
        self.tokens
            .read()
            .ok()
            .and_then(|guard| guard.as_ref().map(|pair| pair.refresh_token.clone()))
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.tokens.write() {
            *guard = None;
        }
    }
}

/// File-backed store, one JSON document holding the pair. Survives
/// process restarts the way browser local storage survives page loads.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the session file from `WARUNGIN_SESSION_FILE`, falling back
    /// to the platform data directory.
    pub fn from_env() -> Self {
        let path = CONFIG
            .session_file
            .clone()
            .map(PathBuf::from)
            .or_else(Self::default_path)
            .unwrap_or_else(|| PathBuf::from("warungin-session.json"));
        Self::new(path)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("warungin").join("session.json"))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn read(&self) -> Option<TokenPair> {
        let raw = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&raw).ok()
    }
}

impl SessionStore for FileSessionStore {
    fn store(&self, pair: TokenPair) {
        if let Some(parent) = self.path.parent() {
            if let Err(error) = fs::create_dir_all(parent) {
                warn!("failed to create session directory: {}", error);
                return;
            }
        }
        match serde_json::to_string(&pair) {
            Ok(raw) => {
                if let Err(error) = fs::write(&self.path, raw) {
                    warn!("failed to persist session tokens: {}", error);
                }
            }
            Err(error) => warn!("failed to serialize session tokens: {}", error),
        }
    }

    fn access_token(&self) -> Option<String> {
        self.read().map(|pair| pair.access_token)
    }

    fn refresh_token(&self) -> Option<String> {
        self.read().map(|pair| pair.refresh_token)
    }

    fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {}
            Err(error) => warn!("failed to remove session file: {}", error),
        }
    }
}
