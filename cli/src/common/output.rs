//! # Shrinkwrap Output Reporter (`common::output`)
//!
//! File: cli/src/common/output.rs
//!
//! ## Overview
//!
//! Reports the resulting artifact path back to the automation pipeline. After
//! a successful compress or decompress, exactly one line of the form
//! `file_path=<path>` is appended to the pipeline's output sink. This is the
//! sole machine-readable result the tool produces; everything else on the
//! console is human-oriented logging.
//!
//! ## Architecture
//!
//! The sink is a file path taken from `GITHUB_OUTPUT`. The file is opened in
//! append mode (created if absent) because the pipeline accumulates outputs
//! from multiple steps in the same file. When no sink is configured, the line
//! goes to standard output instead.
//!
use crate::core::error::Result;
use anyhow::Context;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// # Report the Result Path (`report_file_path`)
///
/// Appends `file_path=<path>` to the output sink.
///
/// ## Arguments
///
/// * `sink` - Path of the pipeline output file; `None` writes to stdout.
/// * `path` - The artifact path to report (the created archive for compress,
///   the destination directory for decompress).
///
/// ## Returns
///
/// * `Result<()>` - `Ok(())` once the line is written.
pub fn report_file_path(sink: Option<&Path>, path: &Path) -> Result<()> {
    let line = format!("file_path={}\n", path.display());
    match sink {
        Some(sink_path) => {
            debug!("Appending result to output sink: {}", sink_path.display());
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(sink_path)
                .with_context(|| {
                    format!("Failed to open output sink '{}'", sink_path.display())
                })?;
            file.write_all(line.as_bytes()).with_context(|| {
                format!("Failed to write to output sink '{}'", sink_path.display())
            })?;
        }
        None => {
            print!("{line}");
        }
    }
    Ok(())
}
