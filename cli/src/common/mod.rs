//! # Shrinkwrap Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! This module serves as the root and organizational entry point for the
//! shared utility modules used throughout the shrinkwrap CLI. It aggregates
//! the cross-cutting concerns: archive command construction, filesystem
//! helpers, external process execution, pipeline output reporting, and
//! console UI.
//!
//! Centralizing these under the `common::` namespace keeps a clear separation
//! between command-specific logic (`commands::`) and core infrastructure
//! (`core::`).
//!
//! ## Architecture
//!
//! Each submodule encapsulates one domain:
//!
//! - **`archive`**: Supported formats and construction of the external
//!   command lines that create or extract archives.
//! - **`fs`**: Path resolution against the workspace root and destination
//!   directory creation.
//! - **`output`**: Appends the machine-readable `file_path=` result line to
//!   the pipeline output sink.
//! - **`process`**: The `CommandPlan` type and the synchronous runner that
//!   spawns the external archive tools.
//! - **`ui`**: Decorated console output (headers, sections, success/error
//!   lines).
//!
pub mod archive;
pub mod fs;
pub mod output;
pub mod process;
pub mod ui;
