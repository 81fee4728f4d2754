//! Command-line configuration for tagdelta
//!
//! This module defines the command-line surface: global flags, subcommands,
//! and the setting overrides shared by `generate` and `config set`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::settings;

/// Default file stem for generated reports
pub const DEFAULT_REPORT_STEM: &str = "tagdelta-report";

/// tagdelta - commit reports for release tags, grouped by prefix
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "tagdelta")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Subcommand to run (defaults to `generate` with saved settings)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the settings file
    ///
    /// Defaults to tagdelta/config.json under the platform config
    /// directory.
    #[arg(short, long, env = "TAGDELTA_SETTINGS", global = true)]
    pub settings: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so report output on stdout stays clean.
    #[arg(short, long, default_value = "false", global = true)]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false", global = true)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build a report for the configured repository
    ///
    /// Overrides are applied to the saved settings, which are then saved
    /// back before the report is built.
    ///
    /// Example:
    ///   tagdelta generate --repo ~/src/app --group prd-v --group uat-v --open
    Generate(GenerateArgs),

    /// Delete all local tags and pull them again from the remote
    Refresh {
        /// Repository to refresh (defaults to the saved repository)
        #[arg(short, long)]
        repo: Option<PathBuf>,
    },

    /// Check that a path is a git repository
    Validate {
        /// Path to check (defaults to the saved repository)
        #[arg(short, long)]
        repo: Option<PathBuf>,
    },

    /// Inspect or change saved settings
    Config {
        /// Settings action
        #[command(subcommand)]
        action: ConfigAction,
    },
}

impl Default for Command {
    fn default() -> Self {
        Self::Generate(GenerateArgs::default())
    }
}

impl Command {
    /// Subcommand name, for messages
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Generate(_) => "generate",
            Self::Refresh { .. } => "refresh",
            Self::Validate { .. } => "validate",
            Self::Config { .. } => "config",
        }
    }
}

/// Arguments for `generate`
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Setting overrides
    #[command(flatten)]
    pub overrides: Overrides,

    /// Refresh tags from the remote before building the report
    #[arg(long)]
    pub refresh: bool,

    /// Where to write the report
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Open the report with the system viewer once written
    #[arg(long)]
    pub open: bool,
}

impl GenerateArgs {
    /// The output path, defaulting to `tagdelta-report.<ext>`
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            PathBuf::from(format!("{DEFAULT_REPORT_STEM}.{}", self.format.extension()))
        })
    }
}

/// Settings actions
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Print the effective settings as JSON
    Show,
    /// Print the settings file location
    Path,
    /// Validate and save setting overrides
    Set {
        /// Setting overrides
        #[command(flatten)]
        overrides: Overrides,
    },
    /// Restore default settings
    Reset,
}

/// Overrides for saved settings
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Repository to report on
    #[arg(short, long)]
    pub repo: Option<PathBuf>,

    /// Maximum tags shown per group
    #[arg(long)]
    pub tags_per_group: Option<usize>,

    /// Commits shown per tag; 0 shows commits since the previous tag
    #[arg(long)]
    pub commits_per_tag: Option<usize>,

    /// Maximum commits shown between two tags
    #[arg(long)]
    pub commit_limit: Option<usize>,

    /// Tag prefix to group by (repeatable; replaces the saved list)
    #[arg(short, long = "group", value_name = "PREFIX")]
    pub groups: Vec<String>,
}

/// Report output format
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Self-contained HTML page
    #[default]
    Html,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// File extension for this format
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Json => "json",
        }
    }
}

impl Config {
    /// Get the settings path, using the per-user default if not specified
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.settings.clone().unwrap_or_else(settings::default_path)
    }

    /// The subcommand to run
    #[must_use]
    pub fn effective_command(&self) -> Command {
        self.command.clone().unwrap_or_default()
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}
