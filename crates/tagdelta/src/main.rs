//! tagdelta: grouped release-tag commit reports
//!
//! This binary crate reads a repository's tags, groups them by configured
//! prefix, and writes a report of the commits each tag introduced.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use tagdelta::app::App;
use tagdelta::config::Config;

fn main() -> ExitCode {
    let config = Config::parse();

    // Logs go to stderr; stdout carries the command's result
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    match run(&config) {
        Ok(message) => {
            println!("{message}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> anyhow::Result<String> {
    let settings_path = config.settings_path();
    debug!(path = %settings_path.display(), "Loading settings");

    let mut app = App::load(settings_path);
    let command = config.effective_command();
    app.run(&command)
        .with_context(|| format!("{} failed", command.name()))
}
