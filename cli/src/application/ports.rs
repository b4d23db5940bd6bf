//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::domain::InstallConfig;

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// The filesystem effects an install needs.
///
/// Methods return raw `io::Result` so the orchestrator decides which
/// `InstallError` variant a failure maps to.
pub trait InstallFs {
    /// Create `path` and all missing ancestors. Succeeds if it already exists
    /// as a directory.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
    /// Create or truncate `path` and write `contents`.
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
    /// Whether anything (file, directory, dangling symlink) exists at `path`.
    fn exists(&self, path: &Path) -> bool;
    /// Rename `from` to `to`, replacing an existing file at `to`.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
    /// Copy the file contents of `from` to `to`.
    fn copy(&self, from: &Path, to: &Path) -> io::Result<u64>;
    /// Remove the file at `path`.
    fn remove_file(&self, path: &Path) -> io::Result<()>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts loading of the install configuration.
pub trait ConfigStore {
    /// Load the configuration, falling back to defaults when none is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if a stored configuration cannot be read or parsed.
    fn load(&self) -> Result<InstallConfig>;
    /// Location the configuration is read from.
    ///
    /// # Errors
    ///
    /// Returns an error if the location cannot be determined.
    fn path(&self) -> Result<PathBuf>;
}
