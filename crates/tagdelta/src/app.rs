// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Application context and command handlers
//!
//! [`App`] is built once at startup from the settings file and handed to
//! each command handler, which returns the message printed on success.

use std::path::{Path, PathBuf};
use std::process::Command as ProcessCommand;

use chrono::Utc;
use serde::Serialize;
use tagdelta_git::{GitError, GitRepo, RefreshSummary, resync_all_tags};
use tagdelta_report::render::{RenderMeta, render_html, render_json};
use tagdelta_report::{RenderError, ReportError, build_report};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{Command, ConfigAction, GenerateArgs, OutputFormat, Overrides};
use crate::settings::{Settings, SettingsError};

// ============================================================================
// Error Types
// ============================================================================

/// Command errors
#[derive(Debug, Error)]
pub enum AppError {
    /// Settings could not be validated or saved
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// Repository could not be opened or refreshed
    #[error(transparent)]
    Git(#[from] GitError),

    /// Report could not be built
    #[error(transparent)]
    Report(#[from] ReportError),

    /// Report could not be rendered
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Path is not a git repository
    #[error("Not a git repository: {path}. Ensure the path exists and contains a .git directory.")]
    NotARepository {
        /// The path checked
        path: PathBuf,
    },

    /// Report could not be written
    #[error("Failed to write report to {path}: {source}")]
    WriteReport {
        /// Output path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

// ============================================================================
// Summaries
// ============================================================================

/// Outcome of a `generate` run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSummary {
    /// Where the report was written
    pub output: PathBuf,
    /// Groups in the report
    pub groups: usize,
    /// Tags in the report
    pub tags: usize,
    /// Commit rows in the report
    pub commits: usize,
    /// Refresh outcome, when one was requested
    pub refresh: Option<RefreshSummary>,
}

impl GenerateSummary {
    fn message(&self) -> String {
        let mut message = format!(
            "Wrote report to {} ({} groups, {} tags, {} commits)",
            self.output.display(),
            self.groups,
            self.tags,
            self.commits
        );
        if self.groups == 0 {
            message.push_str(". No tags matched the configured groups");
        }
        message
    }
}

fn refresh_message(path: &Path, summary: &RefreshSummary) -> String {
    let mut message = format!(
        "Refreshed tags in {}: removed {} local tags and pulled from the remote",
        path.display(),
        summary.tags_deleted
    );
    if !summary.tags_skipped.is_empty() {
        message.push_str(&format!(
            " ({} could not be removed: {})",
            summary.tags_skipped.len(),
            summary.tags_skipped.join(", ")
        ));
    }
    message
}

// ============================================================================
// Application context
// ============================================================================

/// Settings location and the settings loaded from it
#[derive(Debug, Clone)]
pub struct App {
    settings_path: PathBuf,
    settings: Settings,
}

impl App {
    /// Create an application context
    #[must_use]
    pub fn new(settings_path: PathBuf, settings: Settings) -> Self {
        Self {
            settings_path,
            settings,
        }
    }

    /// Create an application context from the settings file at `settings_path`
    #[must_use]
    pub fn load(settings_path: PathBuf) -> Self {
        let settings = Settings::load(&settings_path);
        Self::new(settings_path, settings)
    }

    /// Current settings
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Settings file location
    #[must_use]
    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// Run a command, returning the message to print on success
    ///
    /// # Errors
    ///
    /// Returns the first error the command hits.
    pub fn run(&mut self, command: &Command) -> Result<String, AppError> {
        debug!(command = command.name(), "Running command");

        match command {
            Command::Generate(args) => Ok(self.generate(args)?.message()),
            Command::Refresh { repo } => {
                let path = self.repository_or(repo.as_deref())?;
                let summary = self.refresh(&path)?;
                Ok(refresh_message(&path, &summary))
            }
            Command::Validate { repo } => {
                let path = self.validate_repository(repo.as_deref())?;
                Ok(format!("{} is a git repository", path.display()))
            }
            Command::Config { action } => self.config(action),
        }
    }

    /// Build, render and write a report
    ///
    /// Overrides are applied to the current settings, which are validated
    /// and saved before the repository is touched. A requested refresh runs
    /// to completion before the report is built.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid, the refresh or report
    /// build fails, or the report cannot be written.
    pub fn generate(&mut self, args: &GenerateArgs) -> Result<GenerateSummary, AppError> {
        let mut settings = self.settings.clone();
        settings.apply(&args.overrides);
        settings.validate()?;
        let repo_path = settings.repository()?.to_path_buf();

        settings.save(&self.settings_path)?;
        self.settings = settings;

        let refresh = if args.refresh {
            Some(self.refresh(&repo_path)?)
        } else {
            None
        };

        let repo = GitRepo::open(&repo_path)?;
        let report = build_report(&repo, &self.settings.report_options())?;

        let rendered = match args.format {
            OutputFormat::Html => render_html(
                &report,
                &RenderMeta {
                    repository: repo_path.display().to_string(),
                    generated_at: Utc::now(),
                },
            )?,
            OutputFormat::Json => render_json(&report)?,
        };

        let output = args.output_path();
        write_report(&output, &rendered)?;
        info!(path = %output.display(), "Report written");

        if args.open {
            open_in_viewer(&output);
        }

        Ok(GenerateSummary {
            output,
            groups: report.groups.len(),
            tags: report.tag_count(),
            commits: report.commit_count(),
            refresh,
        })
    }

    /// Delete local tags and pull them again
    ///
    /// # Errors
    ///
    /// Returns `AppError::Git` if the repository cannot be opened or the
    /// pull fails.
    pub fn refresh(&self, path: &Path) -> Result<RefreshSummary, AppError> {
        info!(path = %path.display(), "Refreshing tags");
        let summary = resync_all_tags(path)?;
        for tag in &summary.tags_skipped {
            warn!(tag = %tag, "Tag was not removed before pulling");
        }
        Ok(summary)
    }

    /// Check that `repo` (or the saved repository) is a git repository
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotARepository` if it is not, or
    /// `SettingsError::MissingRepository` if no path is known.
    pub fn validate_repository(&self, repo: Option<&Path>) -> Result<PathBuf, AppError> {
        let path = self.repository_or(repo)?;
        if GitRepo::is_repository(&path) {
            Ok(path)
        } else {
            Err(AppError::NotARepository { path })
        }
    }

    /// Handle a `config` action
    ///
    /// # Errors
    ///
    /// Returns `AppError::Settings` if settings are invalid or cannot be saved.
    pub fn config(&mut self, action: &ConfigAction) -> Result<String, AppError> {
        match action {
            ConfigAction::Show => serde_json::to_string_pretty(&self.settings)
                .map_err(|e| AppError::Settings(e.into())),
            ConfigAction::Path => Ok(self.settings_path.display().to_string()),
            ConfigAction::Set { overrides } => {
                self.update(overrides)?;
                Ok(format!("Saved settings to {}", self.settings_path.display()))
            }
            ConfigAction::Reset => {
                let settings = Settings::default();
                settings.save(&self.settings_path)?;
                self.settings = settings;
                Ok(format!("Restored default settings in {}", self.settings_path.display()))
            }
        }
    }

    /// Apply overrides, validate, and save
    ///
    /// # Errors
    ///
    /// Returns `AppError::Settings` if the result is invalid or cannot be
    /// saved; current settings are left unchanged.
    pub fn update(&mut self, overrides: &Overrides) -> Result<(), AppError> {
        let mut settings = self.settings.clone();
        settings.apply(overrides);
        settings.validate()?;
        settings.save(&self.settings_path)?;
        self.settings = settings;
        Ok(())
    }

    fn repository_or(&self, repo: Option<&Path>) -> Result<PathBuf, AppError> {
        match repo {
            Some(path) => Ok(path.to_path_buf()),
            None => Ok(self.settings.repository()?.to_path_buf()),
        }
    }
}

fn write_report(path: &Path, contents: &str) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| AppError::WriteReport {
            path: path.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, contents).map_err(|source| AppError::WriteReport {
        path: path.to_path_buf(),
        source,
    })
}

/// Hand the report to the platform's default viewer
///
/// The report is already written, so failure here only warns.
fn open_in_viewer(path: &Path) {
    let result = if cfg!(target_os = "windows") {
        ProcessCommand::new("cmd")
            .args(["/C", "start", ""])
            .arg(path)
            .spawn()
    } else if cfg!(target_os = "macos") {
        ProcessCommand::new("open").arg(path).spawn()
    } else {
        ProcessCommand::new("xdg-open").arg(path).spawn()
    };

    match result {
        Ok(_) => debug!(path = %path.display(), "Opened report"),
        Err(e) => warn!(path = %path.display(), error = %e, "Failed to open report"),
    }
}
