//! # Shrinkwrap UI Utilities (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Small helpers for the human-facing console output: decorated headers for
//! each operation, section headings, and success/error lines. Pipeline logs
//! are read by people scanning hundreds of lines of CI output, so the
//! decorations exist to make the interesting lines easy to spot.
//!
//! All of this goes to standard output and is purely informational. The only
//! machine-readable output is the `file_path=` line written by
//! `common::output`, and diagnostics go through `tracing` to stderr.
//!
/// Prints a decorated top-level header for an operation.
pub fn print_header(title: &str) {
    println!("\n{}", "=".repeat(50));
    println!("🚀 {title}");
    println!("{}\n", "=".repeat(50));
}

/// Prints a section heading.
pub fn print_section(title: &str) {
    println!("\n📋 {title}:");
}

/// Prints one labeled item under a section heading.
pub fn print_item(label: &str, value: &str) {
    println!("  • {label}: {value}");
}

/// Prints a success line.
pub fn print_success(message: &str) {
    println!("✅ {message}");
}

/// Prints an error line. The accompanying detail goes to the log.
pub fn print_error(message: &str) {
    println!("❌ {message}");
}

/// Prints the closing bar after an operation completes.
pub fn print_footer() {
    println!("\n{}", "=".repeat(50));
}
