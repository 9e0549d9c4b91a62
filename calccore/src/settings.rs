//! Persisted preferences
//!
//! Stored as pretty JSON at `<config dir>/settings.json`. A missing or
//! unreadable file means defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;

const APP_NAME: &str = "deskcalc";

/// Which keypad the window shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Basic,
    /// Adds the √, x², 1/x row.
    Advanced,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcSettings {
    pub layout: Layout,
    /// Show the expression line above the value.
    pub show_history: bool,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for CalcSettings {
    fn default() -> Self {
        Self {
            layout: Layout::Basic,
            show_history: true,
            log_filter: "info".to_string(),
        }
    }
}

impl CalcSettings {
    pub fn config_path() -> PathBuf {
        config_dir(APP_NAME).join("settings.json")
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Whether a load failure just means there is no file yet.
    pub fn is_missing(err: &StorageError) -> bool {
        matches!(err, StorageError::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }

    /// Save to the default location, logging instead of failing.
    pub fn save(&self) {
        let path = Self::config_path();
        match self.save_to(&path) {
            Ok(()) => debug!(path = %path.display(), "settings saved"),
            Err(e) => warn!(path = %path.display(), error = %e, "could not save settings"),
        }
    }
}

/// Per-user config directory for `app_name`.
pub fn config_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("co", "slowcomputer", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
