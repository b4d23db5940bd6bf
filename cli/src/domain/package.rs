//! Package identity and the install paths derived from it.
//!
//! Pure path arithmetic; nothing here touches the filesystem.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::config::RootsConfig;
use crate::domain::error::PackageError;

/// Extension of generated Lmod module files.
pub const MODULEFILE_EXTENSION: &str = "lua";

/// Name and version of the package being installed.
///
/// Both fields are used verbatim as path segments. Separators or other
/// path-unsafe characters are not escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageIdentity {
    name: String,
    version: String,
}

impl PackageIdentity {
    /// Build an identity from caller-supplied strings.
    ///
    /// # Errors
    ///
    /// Returns an error if either field is empty.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Result<Self, PackageError> {
        let name = name.into();
        let version = version.into();
        if name.is_empty() {
            return Err(PackageError::EmptyName);
        }
        if version.is_empty() {
            return Err(PackageError::EmptyVersion);
        }
        Ok(Self { name, version })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }
}

impl std::fmt::Display for PackageIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.name, self.version)
    }
}

/// Every location an install touches, derived from the roots and an identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallationPaths {
    /// `software_root/name/version`
    pub install_dir: PathBuf,
    /// `module_root/name`
    pub module_dir: PathBuf,
    /// `module_root/name/version.lua`
    pub module_file: PathBuf,
    /// `staging_root/name`
    pub staged_image: PathBuf,
    /// `software_root/name/version/name`
    pub installed_image: PathBuf,
}

impl InstallationPaths {
    #[must_use]
    pub fn derive(roots: &RootsConfig, identity: &PackageIdentity) -> Self {
        let install_dir = roots.software.join(identity.name()).join(identity.version());
        let module_dir = roots.modules.join(identity.name());
        let module_file = module_dir.join(modulefile_name(identity.version()));
        let staged_image = roots.staging.join(identity.name());
        let installed_image = install_dir.join(identity.name());
        Self {
            install_dir,
            module_dir,
            module_file,
            staged_image,
            installed_image,
        }
    }

    /// The directory prepended to `PATH` by the module file.
    #[must_use]
    pub fn program_path(&self) -> &Path {
        &self.install_dir
    }
}

/// `1.2` -> `1.2.lua`; every dotted component of the version is kept.
fn modulefile_name(version: &str) -> String {
    format!("{version}.{MODULEFILE_EXTENSION}")
}
