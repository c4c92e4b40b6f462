//! # Shrinkwrap Configuration (`core::config`)
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads and validates the tool's configuration. Shrinkwrap is
//! driven entirely by environment variables, the convention for steps running
//! inside automation pipelines, where the surrounding workflow injects
//! parameters into the process environment rather than passing flags.
//!
//! ## Architecture
//!
//! Configuration is read exactly once at startup into an immutable [`Config`]
//! struct, which is then passed by reference through the call chain. The
//! parsing logic is written against a `lookup` closure instead of
//! `std::env::var` directly, so unit tests can feed in variables from a plain
//! map without mutating the process environment. `Config::from_env` is the
//! thin production wrapper over that closure-based parser.
//!
//! Recognized variables:
//!
//! | Variable           | Required | Meaning                                              |
//! |--------------------|----------|------------------------------------------------------|
//! | `COMMAND`          | yes      | `compress` or `decompress`                           |
//! | `SOURCE`           | yes      | Path to compress, or archive to decompress           |
//! | `FORMAT`           | yes      | `zip`, `tar`, `tgz`, or `tbz2`                       |
//! | `INCLUDEROOT`      | no       | Compress only; `true` (default) keeps the root entry |
//! | `DEST`             | no       | Destination directory; defaults to the workspace     |
//! | `GITHUB_WORKSPACE` | no       | Base directory for resolving relative paths          |
//! | `GITHUB_OUTPUT`    | no       | File to append the `file_path=` result line to       |
//!
//! Invalid values for `COMMAND` or `FORMAT` are rejected here, before any
//! path is resolved or any external tool is considered.
//!
use crate::common::archive::format::Format;
use crate::core::error::{Result, ShrinkwrapError};
use std::path::PathBuf;
use tracing::debug;

/// The top-level operation selected by the `COMMAND` environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Compress,
    Decompress,
}

impl Command {
    /// Parses the `COMMAND` value. Anything other than the two supported
    /// operations is a fatal configuration error.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "compress" => Ok(Command::Compress),
            "decompress" => Ok(Command::Decompress),
            other => Err(ShrinkwrapError::Config(format!(
                "Invalid command: '{other}' (expected 'compress' or 'decompress')"
            ))
            .into()),
        }
    }
}

/// # Shrinkwrap Configuration (`Config`)
///
/// The complete, validated configuration for a single invocation. Immutable
/// for the process lifetime; populated once from the environment in `main`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Operation to perform (`COMMAND`).
    pub command: Command,
    /// Raw source path as given (`SOURCE`); resolved against the workspace
    /// base by the command handlers.
    pub source: PathBuf,
    /// Archive format (`FORMAT`).
    pub format: Format,
    /// Whether a compressed directory keeps its root entry (`INCLUDEROOT`).
    /// Ignored for plain files and for decompression.
    pub include_root: bool,
    /// Destination directory override (`DEST`), if any.
    pub dest: Option<PathBuf>,
    /// Workspace root (`GITHUB_WORKSPACE`), the base for relative paths.
    pub workspace: Option<PathBuf>,
    /// Pipeline output sink (`GITHUB_OUTPUT`); `None` means standard output.
    pub output_sink: Option<PathBuf>,
}

impl Config {
    /// Loads the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// # Parse Configuration From a Lookup (`from_lookup`)
    ///
    /// Builds a `Config` from any source of `key -> value` pairs. This is the
    /// actual parser; `from_env` merely plugs in `std::env::var`. Keeping the
    /// parser environment-free makes it directly unit-testable.
    ///
    /// ## Arguments
    ///
    /// * `lookup` - Closure returning the value for a variable name, or `None`
    ///   when the variable is unset.
    ///
    /// ## Returns
    ///
    /// * `Result<Config>` - The validated configuration, or a
    ///   `ShrinkwrapError::Config` describing the first problem found.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Required variables first. Empty strings count as unset so that a
        // workflow passing `SOURCE: ""` fails loudly instead of resolving to
        // the workspace root.
        let command = required(&lookup, "COMMAND")?;
        let command = Command::from_name(&command)?;

        let source = PathBuf::from(required(&lookup, "SOURCE")?);

        let format = Format::from_tag(&required(&lookup, "FORMAT")?)?;

        // INCLUDEROOT defaults to true. Only the literal string "true"
        // (case-insensitive) enables it; any other value disables it.
        let include_root = lookup("INCLUDEROOT")
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(true);

        let dest = lookup("DEST").filter(|v| !v.is_empty()).map(PathBuf::from);
        let workspace = lookup("GITHUB_WORKSPACE")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        let output_sink = lookup("GITHUB_OUTPUT")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let config = Config {
            command,
            source,
            format,
            include_root,
            dest,
            workspace,
            output_sink,
        };
        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }
}

/// Fetches a required variable, treating empty values as unset.
fn required<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ShrinkwrapError::Config(format!("{key} is not set")).into()),
    }
}
