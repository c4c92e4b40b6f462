//! # Shrinkwrap Archive Utilities (`common::archive`)
//!
//! File: cli/src/common/archive/mod.rs
//!
//! ## Overview
//!
//! Everything archive-specific lives here: the supported formats and the
//! construction of the external command lines that create or extract them.
//! The actual compression work is delegated to the system's `zip`, `unzip`,
//! and `tar` tools; this crate never implements an archive codec itself.
//!
//! ## Architecture
//!
//! - **`format`**: The [`format::Format`] enum with per-format extensions and
//!   tool names. `FORMAT` tags are parsed into it at the configuration
//!   boundary.
//! - **`command`**: Builds `CommandPlan`s from the per-format flag tables and
//!   decides the compression root; also preflights that the required tool is
//!   on PATH.
//!
pub mod command;
pub mod format;
