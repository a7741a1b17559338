use crate::{ConfigError, ConfigErrorResult, DEFAULT_STORAGE_DIR};

use serde::Deserialize;

/// Where the persisted auth record lives, relative to the config dir.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_STORAGE_DIR),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Keep persisted state inside the config dir
        let path = std::path::Path::new(&self.dir);
        if path.is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::storage(
                "storage.dir must be relative and cannot contain '..'",
            ));
        }

        if self.dir.is_empty() {
            return Err(ConfigError::storage("storage.dir cannot be empty"));
        }

        Ok(())
    }
}
