//! Application configuration.
//!
//! Collaborator endpoints and the session token live in a TOML file under the
//! platform config directory; the database file lives under the platform data
//! directory unless the config overrides it.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthSettings {
    pub base_url: String,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            base_url: "https://auth.example.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub base_url: String,
    pub bucket: String,
    pub api_key: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            base_url: "https://project.supabase.co".to_string(),
            bucket: "file-docs".to_string(),
            api_key: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Overrides the default database location when set.
    pub database_path: Option<PathBuf>,
    /// Token from the last sign-in, exchanged for a session at startup.
    pub session_token: Option<String>,
    pub auth: AuthSettings,
    pub storage: StorageSettings,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "docu-calendar", "docu-calendar")
}

fn config_file_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
}

impl AppConfig {
    /// Load the config file, or defaults when it does not exist yet.
    pub fn load() -> Result<AppConfig> {
        let Some(path) = config_file_path() else {
            log::warn!("No config directory available; using default configuration");
            return Ok(AppConfig::default());
        };

        if !path.exists() {
            return Ok(AppConfig::default());
        }

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Where the SQLite database lives: the configured override, or the
    /// platform data directory (created on demand).
    pub fn resolve_database_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.database_path {
            return Ok(path.clone());
        }

        let dirs = project_dirs().context("No data directory available on this platform")?;
        let data_dir = dirs.data_dir();
        fs::create_dir_all(data_dir)
            .with_context(|| format!("Failed to create {}", data_dir.display()))?;
        Ok(data_dir.join("docu-calendar.db"))
    }
}
