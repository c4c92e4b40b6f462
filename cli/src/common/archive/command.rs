//! # Shrinkwrap Archive Command Builder (`common::archive::command`)
//!
//! File: cli/src/common/archive/command.rs
//!
//! ## Overview
//!
//! Translates an archive request into the exact external command line to
//! run, as a [`CommandPlan`]. This is where the per-format flag tables live
//! and where the compression root is decided.
//!
//! ## Architecture
//!
//! The compression root (the child process's working directory) controls
//! what entry names end up inside the archive:
//!
//! - **Directory, include-root on**: root is the directory's parent, the
//!   compress target is its base name, so the archive carries the folder as
//!   its top-level entry.
//! - **Directory, include-root off**: root is the directory itself, the
//!   target is `.`, so the archive's top-level entries are the directory's
//!   immediate contents.
//! - **Plain file**: the include-root flag is irrelevant; root is the file's
//!   parent and the target is its base name.
//!
//! The destination is always an absolute path, so the compression root never
//! affects where the artifact lands.
//!
//! Command tables (compress / decompress):
//!
//! | format | compress                                  | decompress                                    |
//! |--------|-------------------------------------------|-----------------------------------------------|
//! | zip    | `zip -r <dest> <target>`                  | `unzip -d <destDir> <source>`                 |
//! | tar    | `tar --absolute-names -cvf <dest> <target>` | `tar --absolute-names -xvf <source> -C <destDir>` |
//! | tgz    | `tar -P -czvf <dest> <target>`            | `tar -P -xzvf <source> -C <destDir>`          |
//! | tbz2   | `tar -P -cjvf <dest> <target>`            | `tar -P -xjvf <source> -C <destDir>`          |
//!
use crate::common::archive::format::Format;
use crate::common::process::CommandPlan;
use crate::core::error::{Result, ShrinkwrapError};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// # Build a Compression Plan (`compress_plan`)
///
/// Produces the external command that packs `source` into `dest_file`.
///
/// ## Arguments
///
/// * `format` - Archive format to produce.
/// * `source` - Absolute path of the file or directory to compress.
/// * `dest_file` - Absolute path of the archive to create.
/// * `include_root` - For directories, whether the archive keeps the
///   directory itself as its top-level entry. Ignored for plain files.
///
/// ## Returns
///
/// * `Result<CommandPlan>` - The plan, with the compression root set as the
///   child's working directory. Fails only when `source` has no usable base
///   name or parent (e.g. the filesystem root).
pub fn compress_plan(
    format: Format,
    source: &Path,
    dest_file: &Path,
    include_root: bool,
) -> Result<CommandPlan> {
    let base_name = base_name_of(source)?;

    // Decide the compression root and the target name the tool sees.
    let (root, target): (PathBuf, OsString) = if source.is_dir() {
        if include_root {
            (parent_of(source)?, base_name)
        } else {
            (source.to_path_buf(), OsString::from("."))
        }
    } else {
        (parent_of(source)?, base_name)
    };

    let plan = match format {
        Format::Zip => CommandPlan::new("zip").arg("-r").arg(dest_file).arg(&target),
        Format::Tar => CommandPlan::new("tar")
            .arg("--absolute-names")
            .arg("-cvf")
            .arg(dest_file)
            .arg(&target),
        Format::Tgz => CommandPlan::new("tar")
            .arg("-P")
            .arg("-czvf")
            .arg(dest_file)
            .arg(&target),
        Format::Tbz2 => CommandPlan::new("tar")
            .arg("-P")
            .arg("-cjvf")
            .arg(dest_file)
            .arg(&target),
    };
    Ok(plan.current_dir(root))
}

/// # Build a Decompression Plan (`decompress_plan`)
///
/// Produces the external command that unpacks `source` into `dest_dir`.
/// Both paths are absolute, so no working directory needs to be pinned.
pub fn decompress_plan(format: Format, source: &Path, dest_dir: &Path) -> CommandPlan {
    match format {
        Format::Zip => CommandPlan::new("unzip").arg("-d").arg(dest_dir).arg(source),
        Format::Tar => CommandPlan::new("tar")
            .arg("--absolute-names")
            .arg("-xvf")
            .arg(source)
            .arg("-C")
            .arg(dest_dir),
        Format::Tgz => CommandPlan::new("tar")
            .arg("-P")
            .arg("-xzvf")
            .arg(source)
            .arg("-C")
            .arg(dest_dir),
        Format::Tbz2 => CommandPlan::new("tar")
            .arg("-P")
            .arg("-xjvf")
            .arg(source)
            .arg("-C")
            .arg(dest_dir),
    }
}

/// Verifies that the plan's program exists on PATH, so a missing tool fails
/// with a clear error instead of a raw spawn failure.
pub fn ensure_tool(program: &'static str) -> Result<()> {
    which::which(program)
        .map(|_| ())
        .map_err(|_| ShrinkwrapError::ToolMissing {
            tool: program.to_string(),
        }
        .into())
}

/// Base name of a path, as an owned `OsString`.
fn base_name_of(path: &Path) -> Result<OsString> {
    path.file_name()
        .map(|name| name.to_os_string())
        .ok_or_else(|| {
            ShrinkwrapError::FileSystem(format!(
                "Source path '{}' has no base name",
                path.display()
            ))
            .into()
        })
}

/// Parent directory of a path, as an owned `PathBuf`.
fn parent_of(path: &Path) -> Result<PathBuf> {
    path.parent().map(Path::to_path_buf).ok_or_else(|| {
        ShrinkwrapError::FileSystem(format!(
            "Source path '{}' has no parent directory",
            path.display()
        ))
        .into()
    })
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn args_of(plan: &CommandPlan) -> Vec<String> {
        plan.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_compress_directory_include_root() -> Result<()> {
        let temp = tempdir()?;
        let source = temp.path().join("payload");
        fs::create_dir(&source)?;
        let dest = temp.path().join("payload.tar");

        let plan = compress_plan(Format::Tar, &source, &dest, true)?;
        assert_eq!(plan.program, "tar");
        assert_eq!(
            args_of(&plan),
            vec![
                "--absolute-names".to_string(),
                "-cvf".to_string(),
                dest.display().to_string(),
                "payload".to_string(),
            ]
        );
        // Root is the parent, so the archive gains a 'payload/' entry.
        assert_eq!(plan.current_dir.as_deref(), Some(temp.path()));
        Ok(())
    }

    #[test]
    fn test_compress_directory_without_root() -> Result<()> {
        let temp = tempdir()?;
        let source = temp.path().join("payload");
        fs::create_dir(&source)?;
        let dest = temp.path().join("payload.zip");

        let plan = compress_plan(Format::Zip, &source, &dest, false)?;
        assert_eq!(plan.program, "zip");
        assert_eq!(
            args_of(&plan),
            vec![
                "-r".to_string(),
                dest.display().to_string(),
                ".".to_string(),
            ]
        );
        // Root is the directory itself, so only its contents are archived.
        assert_eq!(plan.current_dir.as_deref(), Some(source.as_path()));
        Ok(())
    }

    #[test]
    fn test_compress_plain_file_ignores_include_root() -> Result<()> {
        let temp = tempdir()?;
        let source = temp.path().join("report.txt");
        fs::write(&source, "data")?;
        let dest = temp.path().join("report.txt.tgz");

        // include_root makes no difference for a plain file.
        for include_root in [true, false] {
            let plan = compress_plan(Format::Tgz, &source, &dest, include_root)?;
            assert_eq!(plan.program, "tar");
            assert_eq!(
                args_of(&plan),
                vec![
                    "-P".to_string(),
                    "-czvf".to_string(),
                    dest.display().to_string(),
                    "report.txt".to_string(),
                ]
            );
            assert_eq!(plan.current_dir.as_deref(), Some(temp.path()));
        }
        Ok(())
    }

    #[test]
    fn test_compress_tbz2_flags() -> Result<()> {
        let temp = tempdir()?;
        let source = temp.path().join("payload");
        fs::create_dir(&source)?;
        let dest = temp.path().join("payload.tbz2");

        let plan = compress_plan(Format::Tbz2, &source, &dest, true)?;
        assert_eq!(args_of(&plan)[..2], ["-P".to_string(), "-cjvf".to_string()]);
        Ok(())
    }

    #[test]
    fn test_decompress_plans_per_format() {
        let source = Path::new("/ws/build.archive");
        let dest = Path::new("/ws/extracted");

        let zip = decompress_plan(Format::Zip, source, dest);
        assert_eq!(zip.program, "unzip");
        assert_eq!(
            args_of(&zip),
            vec!["-d", "/ws/extracted", "/ws/build.archive"]
        );

        let tar = decompress_plan(Format::Tar, source, dest);
        assert_eq!(tar.program, "tar");
        assert_eq!(
            args_of(&tar),
            vec![
                "--absolute-names",
                "-xvf",
                "/ws/build.archive",
                "-C",
                "/ws/extracted"
            ]
        );

        let tgz = decompress_plan(Format::Tgz, source, dest);
        assert_eq!(args_of(&tgz)[..2], ["-P".to_string(), "-xzvf".to_string()]);

        let tbz2 = decompress_plan(Format::Tbz2, source, dest);
        assert_eq!(args_of(&tbz2)[..2], ["-P".to_string(), "-xjvf".to_string()]);

        // Decompression never pins a working directory.
        assert!(zip.current_dir.is_none());
        assert!(tar.current_dir.is_none());
    }

    #[test]
    fn test_filesystem_root_rejected() {
        let dest = Path::new("/tmp/out.tar");
        assert!(compress_plan(Format::Tar, Path::new("/"), dest, true).is_err());
    }

    #[test]
    fn test_ensure_tool_missing() {
        let err = ensure_tool("definitely-not-an-archiver").unwrap_err();
        assert!(err.to_string().contains("was not found on PATH"));
    }

    #[test]
    fn test_ensure_tool_present() -> Result<()> {
        // `sh` exists on any platform these tests run on.
        ensure_tool("sh")
    }
}
