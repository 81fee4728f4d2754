// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! CLI tests for the --verbose / -v and --quiet / -q flags
//!
//! These tests verify the logging level configuration behavior,
//! including flag placement and level determination.

use clap::Parser;
use tagdelta::config::Config;
use tracing::Level;

// ============================================================================
// --verbose flag tests
// ============================================================================

#[test]
fn test_verbose_short_flag_v() {
    let config = Config::try_parse_from(["tagdelta", "-v"]).expect("parse should succeed");
    assert!(config.verbose);
    assert!(!config.quiet);
}

#[test]
fn test_verbose_long_flag() {
    let config = Config::try_parse_from(["tagdelta", "--verbose"]).expect("parse should succeed");
    assert!(config.verbose);
}

#[test]
fn test_verbose_after_subcommand() {
    let config = Config::try_parse_from(["tagdelta", "config", "show", "--verbose"])
        .expect("parse should succeed");
    assert!(config.verbose);
}

#[test]
fn test_verbose_sets_debug_log_level() {
    let config = Config {
        verbose: true,
        quiet: false,
        ..Default::default()
    };
    assert_eq!(config.log_level(), Level::DEBUG);
}

#[test]
fn test_verbose_flag_value_syntax_not_supported() {
    // Boolean flags are toggled by presence only
    let result = Config::try_parse_from(["tagdelta", "--verbose=true"]);
    assert!(result.is_err(), "Boolean flags don't support =value syntax");
}

// ============================================================================
// --quiet flag tests
// ============================================================================

#[test]
fn test_quiet_short_flag_q() {
    let config = Config::try_parse_from(["tagdelta", "-q"]).expect("parse should succeed");
    assert!(config.quiet);
    assert!(!config.verbose);
}

#[test]
fn test_quiet_long_flag() {
    let config = Config::try_parse_from(["tagdelta", "--quiet"]).expect("parse should succeed");
    assert!(config.quiet);
}

#[test]
fn test_quiet_sets_warn_log_level() {
    let config = Config {
        quiet: true,
        ..Default::default()
    };
    assert_eq!(config.log_level(), Level::WARN);
}

// ============================================================================
// Flag interaction tests
// ============================================================================

#[test]
fn test_verbose_takes_precedence_over_quiet() {
    let config =
        Config::try_parse_from(["tagdelta", "-v", "-q"]).expect("parse should succeed");
    assert_eq!(config.log_level(), Level::DEBUG);
}

#[test]
fn test_default_log_level_is_info() {
    let config = Config::try_parse_from(["tagdelta", "validate"]).expect("parse should succeed");
    assert_eq!(config.log_level(), Level::INFO);
}
