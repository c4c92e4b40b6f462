//! # Shrinkwrap Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the shrinkwrap CLI. It
//! handles:
//! - Command-line argument parsing using Clap (verbosity, version, help)
//! - Setting up the logging system based on verbosity flags
//! - Loading the environment-variable configuration
//! - Routing execution to the compress or decompress handler
//!
//! ## Architecture
//!
//! Shrinkwrap is an archive step for automation pipelines, so its actual
//! parameters arrive as environment variables injected by the surrounding
//! workflow (`COMMAND`, `SOURCE`, `FORMAT`, `INCLUDEROOT`, `DEST`,
//! `GITHUB_WORKSPACE`, `GITHUB_OUTPUT`). The command line only carries
//! operator conveniences: `-v` for log verbosity plus the standard
//! `--help`/`--version`.
//!
//! Processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level (stderr, RUST_LOG honored)
//! 3. Load and validate the configuration from the environment
//! 4. Dispatch to the compress or decompress handler
//! 5. Format and display any error, exiting non-zero
//!
//! ## Examples
//!
//! ```bash
//! # Compress a workspace directory into a gzipped tarball
//! COMMAND=compress SOURCE=build FORMAT=tgz GITHUB_WORKSPACE=/tmp/ws shrinkwrap
//!
//! # Decompress with increased verbosity
//! COMMAND=decompress SOURCE=build.tgz FORMAT=tgz DEST=out shrinkwrap -vv
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

// Declare the top-level modules of the CLI crate.
mod commands; // The compress and decompress handlers.
mod common; // Shared utilities (archive, fs, process, output, ui).
mod core; // Core infrastructure (errors, config).

use crate::core::config::{Command, Config};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "shrinkwrap",
    about = "📦 shrinkwrap: compress/decompress archive step for automation pipelines",
    long_about = "Compresses a file or directory into an archive, or decompresses an archive\n\
                  into a directory, using the system zip/unzip/tar tools. Configured entirely\n\
                  through environment variables (COMMAND, SOURCE, FORMAT, INCLUDEROOT, DEST,\n\
                  GITHUB_WORKSPACE, GITHUB_OUTPUT); reports the result as a file_path= line.",
    version
)]
struct Cli {
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    common::ui::print_header("Compress/Decompress Step");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration loading failed: {:?}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    common::ui::print_section("Environment Configuration");
    common::ui::print_item(
        "Command",
        match config.command {
            Command::Compress => "compress",
            Command::Decompress => "decompress",
        },
    );
    common::ui::print_item("Source", &config.source.display().to_string());
    common::ui::print_item("Format", &config.format.to_string());
    common::ui::print_item("Include Root", &config.include_root.to_string());

    let command_result = match config.command {
        Command::Compress => commands::compress::handle_compress(&config),
        Command::Decompress => commands::decompress::handle_decompress(&config),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
