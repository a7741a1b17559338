//! File-backed key-value store: the durable side of the session.
//!
//! One `<key>.json` file per key. Reads are forgiving - a missing or
//! unreadable value is treated as absent - because a corrupt auth record
//! must degrade to "logged out", never to a startup failure.

use crate::{SessionError, SessionResult};

use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Key holding the raw bearer token.
pub const AUTH_TOKEN_KEY: &str = "auth_token";
/// Key holding the raw user record.
pub const AUTH_USER_KEY: &str = "auth_user";
/// Key holding the combined snapshot read by hydration.
pub const AUTH_SESSION_KEY: &str = "taskzilla-auth";

pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    /// Open the store, creating the directory if needed.
    pub fn open(dir: PathBuf) -> SessionResult<Self> {
        if !dir.exists() {
            std::fs::create_dir_all(&dir).map_err(|e| SessionError::Storage {
                path: dir.clone(),
                source: e,
            })?;
        }
        Ok(Self { dir })
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.path_for(key);
        let contents = std::fs::read_to_string(&path).ok()?;

        match serde_json::from_str(&contents) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Discarding corrupt value for {:?}: {e}", key);
                None
            }
        }
    }

    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> SessionResult<()> {
        let path = self.path_for(key);
        let contents = serde_json::to_string_pretty(value).map_err(|e| SessionError::Storage {
            path: path.clone(),
            source: e.into(),
        })?;

        std::fs::write(&path, contents).map_err(|e| SessionError::Storage { path, source: e })
    }

    /// Best-effort removal; a failure is logged, never raised.
    pub fn remove(&self, key: &str) {
        let path = self.path_for(key);
        if let Err(e) = std::fs::remove_file(&path)
            && e.kind() != std::io::ErrorKind::NotFound
        {
            log::warn!("Failed to remove {}: {e}", path.display());
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.path_for(key).exists()
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}
