//! CLI command handlers for the Student Grade Analyzer.
//!
//! Each command is implemented in its own submodule.

pub mod config;
pub mod session;
