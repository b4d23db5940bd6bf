//! Application service — package install use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through the injected `InstallFs`.

use std::io;
use std::path::Path;

use serde::Serialize;

use crate::application::ports::{InstallFs, ProgressReporter};
use crate::domain::{
    InstallConfig, InstallError, InstallationPaths, ModulefileParams, PackageIdentity,
    render_modulefile,
};

/// Outcome of a completed install.
#[derive(Debug, Clone, Serialize)]
pub struct InstallReport {
    pub package: PackageIdentity,
    pub paths: InstallationPaths,
    /// `true` when the image crossed filesystems via copy + remove.
    pub copied: bool,
}

/// What an install would do, computed without touching the filesystem.
#[derive(Debug, Clone, Serialize)]
pub struct InstallPlan {
    pub package: PackageIdentity,
    pub paths: InstallationPaths,
    pub modulefile: String,
    pub staged_image_present: bool,
}

/// Creates the install directory, writes the module file, and moves the
/// staged image into place.
///
/// Steps run in a fixed order and stop at the first failure. Nothing is
/// rolled back: a failed image move leaves the module file behind.
pub struct InstallationOrchestrator<'a, F: InstallFs> {
    config: &'a InstallConfig,
    fs: &'a F,
}

impl<'a, F: InstallFs> InstallationOrchestrator<'a, F> {
    #[must_use]
    pub fn new(config: &'a InstallConfig, fs: &'a F) -> Self {
        Self { config, fs }
    }

    /// Derive every path the install touches.
    #[must_use]
    pub fn plan(&self, identity: &PackageIdentity) -> InstallationPaths {
        InstallationPaths::derive(&self.config.roots, identity)
    }

    /// Run the full install for `identity`.
    ///
    /// # Errors
    ///
    /// Returns the first `InstallError` hit; earlier steps stay applied.
    pub fn install(
        &self,
        identity: &PackageIdentity,
        reporter: &impl ProgressReporter,
    ) -> Result<InstallReport, InstallError> {
        let paths = self.plan(identity);

        reporter.step(&format!("Creating {}", paths.install_dir.display()));
        self.ensure_directory(&paths.install_dir)?;

        reporter.step(&format!("Writing {}", paths.module_file.display()));
        let text = self.render_module_descriptor(identity, &paths);
        self.write_module_file(&paths, &text)?;

        reporter.step(&format!(
            "Moving {} to {}",
            paths.staged_image.display(),
            paths.installed_image.display()
        ));
        let copied = self.move_image(&paths)?;
        if copied {
            reporter.warn("Image crossed filesystems; copied and removed the staged file");
        }

        reporter.success(&format!("Installed {identity}"));
        Ok(InstallReport {
            package: identity.clone(),
            paths,
            copied,
        })
    }

    /// Compute the install without side effects.
    #[must_use]
    pub fn dry_run(&self, identity: &PackageIdentity) -> InstallPlan {
        let paths = self.plan(identity);
        let modulefile = self.render_module_descriptor(identity, &paths);
        let staged_image_present = self.fs.exists(&paths.staged_image);
        InstallPlan {
            package: identity.clone(),
            paths,
            modulefile,
            staged_image_present,
        }
    }

    /// Create `path` and any missing ancestors. An existing directory is fine.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryCreation` for any other failure.
    pub fn ensure_directory(&self, path: &Path) -> Result<(), InstallError> {
        tracing::debug!(path = %path.display(), "ensuring directory");
        self.fs
            .create_dir_all(path)
            .map_err(|source| InstallError::DirectoryCreation {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Render the module file text for `identity` installed at `paths`.
    #[must_use]
    pub fn render_module_descriptor(
        &self,
        identity: &PackageIdentity,
        paths: &InstallationPaths,
    ) -> String {
        render_modulefile(&ModulefileParams {
            name: identity.name(),
            version: identity.version(),
            path: paths.program_path(),
            installed_by: &self.config.modulefile.installed_by,
            provenance: &self.config.modulefile.provenance,
        })
    }

    /// Write `text` to the module file, overwriting any previous version.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryCreation` if the module directory cannot be created,
    /// `FileWrite` if the file cannot be written.
    pub fn write_module_file(
        &self,
        paths: &InstallationPaths,
        text: &str,
    ) -> Result<(), InstallError> {
        self.ensure_directory(&paths.module_dir)?;
        tracing::debug!(path = %paths.module_file.display(), bytes = text.len(), "writing module file");
        self.fs
            .write(&paths.module_file, text)
            .map_err(|source| InstallError::FileWrite {
                path: paths.module_file.clone(),
                source,
            })
    }

    /// Move the staged image into the install directory.
    ///
    /// Returns `true` when the cross-device copy fallback was used.
    ///
    /// # Errors
    ///
    /// Returns `ImageNotFound` if nothing is staged (checked before the rename
    /// and again when the rename reports `NotFound`), `ImageMove` if the
    /// rename (or the copy fallback) fails.
    pub fn move_image(&self, paths: &InstallationPaths) -> Result<bool, InstallError> {
        let from = &paths.staged_image;
        let to = &paths.installed_image;
        if !self.fs.exists(from) {
            return Err(InstallError::ImageNotFound { path: from.clone() });
        }

        tracing::debug!(from = %from.display(), to = %to.display(), "moving image");
        match self.fs.rename(from, to) {
            Ok(()) => Ok(false),
            Err(e)
                if e.kind() == io::ErrorKind::CrossesDevices
                    && self.config.image.copy_across_devices =>
            {
                tracing::warn!(from = %from.display(), to = %to.display(), "rename crosses devices, copying");
                self.copy_then_remove(from, to)
                    .map(|()| true)
                    .map_err(|source| InstallError::ImageMove {
                        from: from.clone(),
                        to: to.clone(),
                        source,
                    })
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound && !self.fs.exists(from) => {
                Err(InstallError::ImageNotFound { path: from.clone() })
            }
            Err(source) => Err(InstallError::ImageMove {
                from: from.clone(),
                to: to.clone(),
                source,
            }),
        }
    }

    fn copy_then_remove(&self, from: &Path, to: &Path) -> io::Result<()> {
        let bytes = self.fs.copy(from, to)?;
        tracing::debug!(bytes, "image copied");
        self.fs.remove_file(from)
    }
}
