//! Sitewire CLI - build-configuration assembly for static sites.
//!
//! This crate provides the command-line interface for sitewire, exposing
//! the configuration model from `sitewire-config` through a small CLI
//! with clear error messages.
//!
//! # Architecture
//!
//! - [`cli`] - Argument parsing with clap
//! - [`commands`] - Individual command implementations
//! - [`error`] - CLI error types and miette conversion
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Terminal status messages and color handling

// Public modules
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

// Re-export commonly used types
pub use error::{CliError, Result};
