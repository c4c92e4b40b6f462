//! # Shrinkwrap Decompress Handler
//!
//! File: cli/src/commands/decompress.rs
//!
//! ## Overview
//!
//! Implements the `decompress` operation: unpacks the configured archive into
//! the destination directory and reports that directory to the pipeline
//! output sink.
//!
//! ## Architecture
//!
//! The flow mirrors the compress handler minus the include-root concern
//! (extraction always lands inside the destination directory, which the
//! per-format `-d` / `-C` flags pin to an absolute path):
//!
//! 1. Resolve the source archive against the workspace root and validate it
//!    exists.
//! 2. Resolve the destination directory (`DEST`, falling back to the
//!    workspace, then the current directory) and create it if absent.
//! 3. Build the external command plan, check the required tool is on PATH,
//!    and run it.
//! 4. Append `file_path=<destination directory>` to the output sink.
//!
use crate::common::{archive, fs, output, process, ui};
use crate::core::config::Config;
use crate::core::error::{Result, ShrinkwrapError};
use tracing::{debug, info};

/// # Handle Decompress Command (`handle_decompress`)
///
/// Runs the full decompression flow described in the module docs.
///
/// ## Arguments
///
/// * `config` - The validated configuration for this invocation.
///
/// ## Returns
///
/// * `Result<()>` - `Ok(())` after the archive is extracted and the
///   destination directory is reported.
pub fn handle_decompress(config: &Config) -> Result<()> {
    ui::print_header("Decompression Process Started");

    let base = fs::resolution_base(config.workspace.as_deref())?;
    let source = fs::resolve_path(&config.source, &base);
    debug!("Adjusted source path: {}", source.display());

    if !source.exists() {
        ui::print_error(&format!(
            "Source file '{}' does not exist",
            source.display()
        ));
        return Err(ShrinkwrapError::FileSystem(format!(
            "Source file '{}' does not exist",
            source.display()
        ))
        .into());
    }

    let dest_dir = match &config.dest {
        Some(dest) => fs::resolve_path(dest, &base),
        None => base.clone(),
    };
    fs::ensure_dir_exists(&dest_dir)?;

    ui::print_section("Configuration");
    ui::print_item("Source", &source.display().to_string());
    ui::print_item("Format", &config.format.to_string());
    ui::print_item("Destination", &dest_dir.display().to_string());
    info!(
        "Decompressing {} to {}",
        source.display(),
        dest_dir.display()
    );

    let plan = archive::command::decompress_plan(config.format, &source, &dest_dir);
    archive::command::ensure_tool(plan.program)?;
    process::run(&plan)?;

    ui::print_success("Decompression completed successfully");
    ui::print_footer();

    output::report_file_path(config.output_sink.as_deref(), &dest_dir)?;
    Ok(())
}
