//! tagdelta library
//!
//! This module exports the command-line configuration, persisted settings
//! and command handlers of tagdelta for use in integration tests and as a
//! library.

pub mod app;
pub mod config;
pub mod settings;
