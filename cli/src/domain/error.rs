//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, or `std::fs`. All error types implement
//! `thiserror::Error` and convert to `anyhow::Error` via the `?` operator.

use std::path::PathBuf;

use thiserror::Error;

// ── Install errors ────────────────────────────────────────────────────────────

/// Failures of the install workflow. Each wraps the underlying OS error.
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("cannot create directory {}", path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write module file {}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no staged image at {}", path.display())]
    ImageNotFound { path: PathBuf },

    #[error("cannot move image {} to {}", from.display(), to.display())]
    ImageMove {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl InstallError {
    /// Stable machine-readable code used in JSON error output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::DirectoryCreation { .. } => "directory_creation",
            Self::FileWrite { .. } => "file_write",
            Self::ImageNotFound { .. } => "image_not_found",
            Self::ImageMove { .. } => "image_move",
        }
    }
}

// ── Package errors ────────────────────────────────────────────────────────────

/// Errors related to package identity.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PackageError {
    #[error("Package name must not be empty.")]
    EmptyName,

    #[error("Package version must not be empty.")]
    EmptyVersion,
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid configuration: {key} must not be empty")]
    EmptyRoot { key: &'static str },
}
