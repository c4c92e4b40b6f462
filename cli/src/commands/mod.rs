//! # Shrinkwrap Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the two operations the tool performs. It serves as
//! the central point for importing the handlers so they are accessible from
//! the main entry point (`main.rs`).
//!
//! ## Architecture
//!
//! Each operation lives in its own module and exposes a single `handle_*`
//! function taking the validated configuration:
//!
//! - `compress`: packs a file or directory into an archive
//! - `decompress`: unpacks an archive into a directory
//!
/// Packs the configured source into an archive and reports its path.
pub mod compress;
/// Unpacks the configured archive into the destination directory.
pub mod decompress;
