//! # Shrinkwrap Compress Handler
//!
//! File: cli/src/commands/compress.rs
//!
//! ## Overview
//!
//! Implements the `compress` operation: packs the configured source file or
//! directory into an archive of the configured format and reports the
//! resulting archive path to the pipeline output sink.
//!
//! ## Architecture
//!
//! The handler is a linear sequence of steps:
//!
//! 1. Resolve the source path against the workspace root.
//! 2. Validate that the resolved source exists (fatal if not; no tool is
//!    invoked).
//! 3. Resolve the destination directory (`DEST`, falling back to the
//!    workspace, then the current directory) and create it if absent.
//! 4. Compute the full destination path: destination directory + source base
//!    name + format extension.
//! 5. Build the external command plan, check the required tool is on PATH,
//!    and run it.
//! 6. Append `file_path=<archive path>` to the output sink.
//!
//! Any failure propagates as an error; `main` turns it into a non-zero exit.
//! No partial outputs are cleaned up.
//!
use crate::common::{archive, fs, output, process, ui};
use crate::core::config::Config;
use crate::core::error::{Result, ShrinkwrapError};
use tracing::{debug, info};

/// # Handle Compress Command (`handle_compress`)
///
/// Runs the full compression flow described in the module docs.
///
/// ## Arguments
///
/// * `config` - The validated configuration for this invocation.
///
/// ## Returns
///
/// * `Result<()>` - `Ok(())` after the archive is created and reported.
pub fn handle_compress(config: &Config) -> Result<()> {
    ui::print_header("Compression Process Started");

    let base = fs::resolution_base(config.workspace.as_deref())?;
    let source = fs::resolve_path(&config.source, &base);
    debug!("Adjusted source path: {}", source.display());

    if !source.exists() {
        ui::print_error(&format!(
            "Source path '{}' does not exist",
            source.display()
        ));
        return Err(ShrinkwrapError::FileSystem(format!(
            "Source path '{}' does not exist",
            source.display()
        ))
        .into());
    }

    ui::print_section("Configuration");
    ui::print_item("Source", &source.display().to_string());
    ui::print_item("Format", &config.format.to_string());
    ui::print_item("Include Root", &config.include_root.to_string());

    // Destination directory: DEST override, else the workspace base itself.
    let dest_dir = match &config.dest {
        Some(dest) => fs::resolve_path(dest, &base),
        None => base.clone(),
    };
    fs::ensure_dir_exists(&dest_dir)?;

    let base_name = source.file_name().ok_or_else(|| {
        ShrinkwrapError::FileSystem(format!(
            "Source path '{}' has no base name",
            source.display()
        ))
    })?;
    let mut artifact_name = base_name.to_os_string();
    artifact_name.push(config.format.extension());
    let full_dest = dest_dir.join(&artifact_name);
    ui::print_item("Destination Path", &full_dest.display().to_string());
    info!(
        "Compressing {} to {}",
        source.display(),
        full_dest.display()
    );

    let plan = archive::command::compress_plan(
        config.format,
        &source,
        &full_dest,
        config.include_root,
    )?;
    archive::command::ensure_tool(plan.program)?;
    process::run(&plan)?;

    ui::print_success(&format!("Compression completed: {}", full_dest.display()));
    ui::print_footer();

    output::report_file_path(config.output_sink.as_deref(), &full_dest)?;
    Ok(())
}
