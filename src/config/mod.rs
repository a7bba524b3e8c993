// SPDX-License-Identifier: MPL-2.0
//! Persisted locale preference.
//!
//! The last successfully switched-to locale code is stored in a
//! `settings.toml` under the platform config directory, read once at
//! detection time and overwritten on every successful switch. Absence of
//! the file, or of the `language` field, simply means no preference yet.
//!
//! # Examples
//!
//! ```no_run
//! use locale_lens::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.language = Some("en-US".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "LocaleLens";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Locale code of the user's explicit choice (e.g. "en-US").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// A malformed file degrades to the default config instead of erroring;
/// the preference is best-effort state, not critical data.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

/// Where the detector reads the stored preference from and where a winning
/// switch writes it to.
pub trait PreferenceStore {
    fn stored_language(&self) -> Option<String>;
    fn store_language(&mut self, code: &str) -> Result<()>;
}

/// Preference backed by the `settings.toml` file, at the platform default
/// location or an explicit path (tests, portable deployments).
#[derive(Debug, Clone, Default)]
pub struct FilePreferences {
    path: Option<PathBuf>,
}

impl FilePreferences {
    pub fn at_default_location() -> Self {
        Self { path: None }
    }

    pub fn at_path(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    fn load(&self) -> Result<Config> {
        match &self.path {
            Some(path) if path.exists() => load_from_path(path),
            Some(_) => Ok(Config::default()),
            None => load(),
        }
    }

    fn save(&self, config: &Config) -> Result<()> {
        match &self.path {
            Some(path) => save_to_path(config, path),
            None => save(config),
        }
    }
}

impl PreferenceStore for FilePreferences {
    fn stored_language(&self) -> Option<String> {
        self.load().ok().and_then(|config| config.language)
    }

    fn store_language(&mut self, code: &str) -> Result<()> {
        let mut config = self.load().unwrap_or_default();
        config.language = Some(code.to_string());
        self.save(&config)
    }
}

/// In-memory preference for embedders without a filesystem and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    language: Option<String>,
}

impl MemoryPreferences {
    pub fn with_language(code: &str) -> Self {
        Self {
            language: Some(code.to_string()),
        }
    }
}

impl PreferenceStore for MemoryPreferences {
    fn stored_language(&self) -> Option<String> {
        self.language.clone()
    }

    fn store_language(&mut self, code: &str) -> Result<()> {
        self.language = Some(code.to_string());
        Ok(())
    }
}
