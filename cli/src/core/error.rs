//! # Shrinkwrap Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types and error handling mechanisms used
//! throughout the shrinkwrap application. It provides a consistent approach
//! to error management with detailed error information and context.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `ShrinkwrapError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover the domains this tool touches:
//! - Configuration errors (missing or invalid environment variables)
//! - Filesystem errors (missing sources, uncreatable destinations)
//! - Missing external archive tools
//! - External command execution failures
//!
//! ## Examples
//!
//! Using the error system:
//!
//! ```rust,ignore
//! // Return a specific error type
//! if !path.exists() {
//!     return Err(ShrinkwrapError::FileSystem(format!("Path not found: {}", path.display())))?;
//! }
//!
//! // Add context to errors using anyhow
//! let file = OpenOptions::new().append(true).open(&path)
//!     .with_context(|| format!("Failed to open output sink: {}", path.display()))?;
//! ```
//!
//! Every failure is fatal for this tool: errors propagate up to `main`,
//! which logs them and exits with a non-zero status code.
//!
use thiserror::Error;

/// Custom error type for the shrinkwrap application.
#[derive(Error, Debug)]
pub enum ShrinkwrapError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Required archive tool '{tool}' was not found on PATH")]
    ToolMissing { tool: String },

    #[error("External command failed: {cmd}, Status: {status}, Output:\n{output}")]
    ExternalCommand {
        cmd: String,
        status: String,
        output: String,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;
