//! # Shrinkwrap Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Foundational filesystem helpers for the archive workflow: resolving
//! possibly-relative paths against the workspace root, and making sure the
//! destination directory exists before an archive tool writes into it.
//!
//! ## Architecture
//!
//! Path resolution is deliberately dumb: an absolute path passes through
//! untouched, a relative path is joined onto a caller-supplied base. There is
//! no `..` normalization beyond what `Path::join` does, and no existence
//! check here. Callers decide separately whether the resolved path must
//! exist (the source must, the destination is created on demand).
//!
//! The base itself comes from [`resolution_base`]: the pipeline's workspace
//! root when configured, otherwise the process's current directory.
//!
use crate::core::error::{Result, ShrinkwrapError};
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// # Resolve a Path Against a Base (`resolve_path`)
///
/// Converts a possibly-relative path into an absolute one.
///
/// ## Arguments
///
/// * `path` - The path to resolve. Returned unchanged if already absolute.
/// * `base` - The directory relative paths are joined onto.
///
/// ## Returns
///
/// * `PathBuf` - The resolved path. Never fails; no filesystem access occurs.
pub fn resolve_path(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Determines the base directory for resolving relative paths: the workspace
/// root when one is configured, otherwise the current working directory.
pub fn resolution_base(workspace: Option<&Path>) -> Result<PathBuf> {
    match workspace {
        Some(ws) => Ok(ws.to_path_buf()),
        None => std::env::current_dir().context("Failed to determine current directory"),
    }
}

/// Ensures that a directory exists at the specified path.
///
/// If the path does not exist, it is created recursively (like `mkdir -p`).
/// If the path exists but is not a directory, a `ShrinkwrapError::FileSystem`
/// is returned.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(ShrinkwrapError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_path_absolute_passthrough() {
        let resolved = resolve_path(Path::new("/var/data/build"), Path::new("/tmp/ws"));
        assert_eq!(resolved, PathBuf::from("/var/data/build"));
    }

    #[test]
    fn test_resolve_path_relative_joins_base() {
        let resolved = resolve_path(Path::new("artifacts/build"), Path::new("/tmp/ws"));
        assert_eq!(resolved, PathBuf::from("/tmp/ws/artifacts/build"));
    }

    #[test]
    fn test_resolution_base_prefers_workspace() -> Result<()> {
        let base = resolution_base(Some(Path::new("/tmp/ws")))?;
        assert_eq!(base, PathBuf::from("/tmp/ws"));
        let fallback = resolution_base(None)?;
        assert_eq!(fallback, std::env::current_dir()?);
        Ok(())
    }

    #[test]
    fn test_ensure_dir_exists_creates_new() -> Result<()> {
        let temp = tempdir()?;
        let nested = temp.path().join("a/b/c");
        ensure_dir_exists(&nested)?;
        assert!(nested.is_dir());
        // Second call is a no-op.
        ensure_dir_exists(&nested)?;
        Ok(())
    }

    #[test]
    fn test_ensure_dir_exists_rejects_file() -> Result<()> {
        let temp = tempdir()?;
        let file = temp.path().join("occupied");
        fs::write(&file, "not a directory")?;
        assert!(ensure_dir_exists(&file).is_err());
        Ok(())
    }
}
