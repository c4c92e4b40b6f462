//! # Shrinkwrap Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! This module executes the external archive tools. It provides
//! [`CommandPlan`], a fully-assembled description of one invocation (program,
//! ordered argument vector, optional working directory), and [`run`], which
//! spawns the plan synchronously and interprets the result.
//!
//! ## Architecture
//!
//! Two decisions shape this module:
//!
//! - **Argument vectors, not shell strings.** A plan is handed straight to
//!   `std::process::Command`; no shell is ever involved, so paths containing
//!   spaces or metacharacters cannot change the meaning of a command.
//! - **The working directory is part of the plan.** Archive tools produce
//!   entry names relative to their working directory, so controlling that
//!   directory controls whether an archive carries a root folder entry. The
//!   plan's `current_dir` is applied to the child process only; the parent's
//!   working directory is never touched, on any code path.
//!
//! Output handling follows the tool's exit status: on success, captured
//! stdout is logged at info and stderr at warn (archive tools routinely
//! chatter on stderr even when they succeed); on failure, stderr is logged at
//! error and a fatal `ExternalCommand` error is returned. There are no
//! retries and no cleanup of partial outputs.
//!
use crate::common::ui;
use crate::core::error::{Result, ShrinkwrapError};
use anyhow::Context;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::PathBuf;
use std::process::Command;
use tracing::{error, info, warn};

/// # Command Plan (`CommandPlan`)
///
/// One external tool invocation, fully assembled and ready to spawn:
/// the program name, its ordered arguments, and the working directory the
/// child process should run in (when the archive's entry names depend on it).
#[derive(Debug, Clone)]
pub struct CommandPlan {
    /// Program name, resolved via PATH at spawn time.
    pub program: &'static str,
    /// Ordered argument vector, passed through without shell interpretation.
    pub args: Vec<OsString>,
    /// Working directory for the child process; `None` inherits the parent's.
    pub current_dir: Option<PathBuf>,
}

impl CommandPlan {
    /// Starts a plan for the given program.
    pub fn new(program: &'static str) -> Self {
        CommandPlan {
            program,
            args: Vec::new(),
            current_dir: None,
        }
    }

    /// Appends one argument (builder style).
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    /// Sets the child process's working directory (builder style).
    pub fn current_dir(mut self, dir: PathBuf) -> Self {
        self.current_dir = Some(dir);
        self
    }
}

impl fmt::Display for CommandPlan {
    /// Human-readable rendering for logs: program followed by its arguments.
    /// Display only; the plan is never re-parsed from this string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// # Run a Command Plan (`run`)
///
/// Spawns the plan synchronously with captured stdout/stderr and waits for
/// it to exit.
///
/// ## Workflow:
/// 1. Announce the invocation on the console and in the log.
/// 2. Spawn via `std::process::Command`, applying the plan's working
///    directory to the child only.
/// 3. Zero exit: log stdout at info, stderr (if any) at warn, report success.
/// 4. Non-zero exit: log stderr at error and return a fatal
///    `ShrinkwrapError::ExternalCommand` carrying the command line, exit
///    status, and captured error stream.
///
/// ## Arguments
///
/// * `plan` - The fully-assembled invocation to execute.
///
/// ## Returns
///
/// * `Result<()>` - `Ok(())` when the tool exited with status zero.
pub fn run(plan: &CommandPlan) -> Result<()> {
    println!("⚙️  Executing: {plan}");
    info!("Executing external command: {plan}");

    let mut command = Command::new(plan.program);
    command.args(&plan.args);
    if let Some(dir) = &plan.current_dir {
        info!("Child working directory: {}", dir.display());
        command.current_dir(dir);
    }

    let output = command
        .output()
        .with_context(|| format!("Failed to spawn '{}'", plan.program))?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    if output.status.success() {
        if !stdout.trim().is_empty() {
            info!("Command output:\n{}", stdout.trim());
        }
        // Archive tools emit informational noise on stderr even on success.
        if !stderr.trim().is_empty() {
            warn!("Command stderr:\n{}", stderr.trim());
        }
        ui::print_success("Command executed successfully");
        Ok(())
    } else {
        error!("Error output:\n{}", stderr.trim());
        ui::print_error(&format!("Command failed: {plan}"));
        Err(ShrinkwrapError::ExternalCommand {
            cmd: plan.to_string(),
            status: output.status.to_string(),
            output: stderr.into_owned(),
        }
        .into())
    }
}
