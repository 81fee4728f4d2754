// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Persisted settings
//!
//! Settings are a small JSON record kept in the per-user config directory.
//! Missing fields take their defaults; a file that cannot be read or parsed
//! is replaced by defaults with a warning rather than failing the command.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tagdelta_report::ReportOptions;
use tagdelta_report::error::ReportError;
use tagdelta_report::group::KNOWN_PREFIXES;
use tagdelta_report::options::{DEFAULT_COMMIT_LIMIT, DEFAULT_TAGS_PER_GROUP};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Overrides;

/// Settings file name inside the tagdelta config directory
pub const SETTINGS_FILE_NAME: &str = "config.json";

/// Settings errors
#[derive(Debug, Error)]
pub enum SettingsError {
    /// No repository configured
    #[error("No repository configured. Pass --repo or run 'tagdelta config set --repo <PATH>'.")]
    MissingRepository,

    /// A setting is out of range
    #[error("Invalid settings: {0}")]
    Invalid(#[from] ReportError),

    /// Settings could not be serialized
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Settings could not be written
    #[error("Failed to write settings to {path}: {source}")]
    Write {
        /// Settings file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Repository to report on; empty until configured
    #[serde(alias = "projectPath")]
    pub repository_path: String,
    /// Maximum tags shown per group
    pub tags_per_group: usize,
    /// 0 selects range mode, anything else fixed-count mode
    pub commits_per_tag: usize,
    /// Range-mode cap
    pub commit_limit: usize,
    /// Group prefixes in configured order
    #[serde(alias = "tagGroups")]
    pub group_prefixes: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            repository_path: String::new(),
            tags_per_group: DEFAULT_TAGS_PER_GROUP,
            commits_per_tag: 0,
            commit_limit: DEFAULT_COMMIT_LIMIT,
            group_prefixes: KNOWN_PREFIXES.iter().map(|p| (*p).to_string()).collect(),
        }
    }
}

/// Default settings location
///
/// Platform-specific:
/// - macOS: ~/Library/Application Support/tagdelta/config.json
/// - Linux: ~/.config/tagdelta/config.json
/// - Windows: %APPDATA%\tagdelta\config.json
#[must_use]
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tagdelta")
        .join(SETTINGS_FILE_NAME)
}

impl Settings {
    /// Load settings, substituting defaults for anything missing or unreadable
    #[must_use]
    pub fn load(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No settings file; using defaults");
                return Self::default();
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read settings; using defaults");
                return Self::default();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Malformed settings; using defaults");
                Self::default()
            }
        }
    }

    /// Save settings as pretty-printed JSON, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::Write` if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| SettingsError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(path, json).map_err(|source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), "Saved settings");
        Ok(())
    }

    /// Apply command-line overrides
    ///
    /// A non-empty group list replaces the saved list.
    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(repo) = &overrides.repo {
            self.repository_path = repo.display().to_string();
        }
        if let Some(tags_per_group) = overrides.tags_per_group {
            self.tags_per_group = tags_per_group;
        }
        if let Some(commits_per_tag) = overrides.commits_per_tag {
            self.commits_per_tag = commits_per_tag;
        }
        if let Some(commit_limit) = overrides.commit_limit {
            self.commit_limit = commit_limit;
        }
        if !overrides.groups.is_empty() {
            self.group_prefixes.clone_from(&overrides.groups);
        }
    }

    /// Report options derived from these settings
    #[must_use]
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            tags_per_group: self.tags_per_group,
            commits_per_tag: self.commits_per_tag,
            commit_limit: self.commit_limit,
            group_prefixes: self.group_prefixes.clone(),
        }
    }

    /// Validate the report options
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::Invalid` for out-of-range counts or a bad
    /// prefix list.
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.report_options().validate()?;
        Ok(())
    }

    /// The configured repository
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::MissingRepository` if no path is set.
    pub fn repository(&self) -> Result<&Path, SettingsError> {
        let path = self.repository_path.trim();
        if path.is_empty() {
            return Err(SettingsError::MissingRepository);
        }
        Ok(Path::new(path))
    }
}
