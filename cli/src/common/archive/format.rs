//! # Shrinkwrap Archive Formats (`common::archive::format`)
//!
//! File: cli/src/common/archive/format.rs
//!
//! ## Overview
//!
//! Defines the [`Format`] enum covering the four supported archive formats
//! and the per-format facts the rest of the tool needs: the file extension
//! appended to compressed artifacts and which external tool handles each
//! direction.
//!
//! ## Architecture
//!
//! The raw `FORMAT` tag is parsed into this enum at the configuration
//! boundary. Downstream code never sees an unrecognized format: an unknown
//! tag fails in [`Format::from_tag`] before any path is resolved or any
//! command line is assembled.
//!
use crate::core::error::{Result, ShrinkwrapError};
use std::fmt;

/// Supported archive formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// PKZIP archive, handled by `zip` / `unzip`.
    Zip,
    /// Plain (uncompressed) tarball.
    Tar,
    /// Gzip-compressed tarball.
    Tgz,
    /// Bzip2-compressed tarball.
    Tbz2,
}

impl Format {
    /// Parses a `FORMAT` tag. Unsupported tags are a fatal configuration
    /// error, raised before any external tool is invoked.
    pub fn from_tag(tag: &str) -> Result<Self> {
        match tag {
            "zip" => Ok(Format::Zip),
            "tar" => Ok(Format::Tar),
            "tgz" => Ok(Format::Tgz),
            "tbz2" => Ok(Format::Tbz2),
            other => Err(ShrinkwrapError::Config(format!(
                "Unsupported format: '{other}' (expected 'zip', 'tar', 'tgz', or 'tbz2')"
            ))
            .into()),
        }
    }

    /// File extension appended to the destination artifact, dot included.
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Zip => ".zip",
            Format::Tar => ".tar",
            Format::Tgz => ".tgz",
            Format::Tbz2 => ".tbz2",
        }
    }

    /// External program used to create an archive in this format.
    pub fn compress_tool(&self) -> &'static str {
        match self {
            Format::Zip => "zip",
            Format::Tar | Format::Tgz | Format::Tbz2 => "tar",
        }
    }

    /// External program used to extract an archive in this format.
    pub fn decompress_tool(&self) -> &'static str {
        match self {
            Format::Zip => "unzip",
            Format::Tar | Format::Tgz | Format::Tbz2 => "tar",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Format::Zip => "zip",
            Format::Tar => "tar",
            Format::Tgz => "tgz",
            Format::Tbz2 => "tbz2",
        };
        write!(f, "{tag}")
    }
}
