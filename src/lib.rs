//! `herd-check` library crate.
//!
//! The binary (`herd`) is a thin wrapper around this library so that:
//!
//! - the registry and rule engine are testable without a terminal
//! - the TUI and the CLI share one session controller

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod registry;
pub mod report;
pub mod rules;
pub mod tui;
