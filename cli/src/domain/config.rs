//! Install configuration schema and defaults.
//!
//! Pure types and validation only — loading lives in `crate::infra::config`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Defaults ─────────────────────────────────────────────────────────────────

pub const DEFAULT_SOFTWARE_ROOT: &str = "/jic/software/testing";
pub const DEFAULT_MODULE_ROOT: &str = "/common/modulefiles/Core";
pub const DEFAULT_STAGING_ROOT: &str = "/usr/users/cbu/hartleym/singularity";
pub const DEFAULT_INSTALLED_BY: &str = "Matthew Hartley <Matthew.Hartley@jic.ac.uk>";
pub const DEFAULT_PROVENANCE: &str = "singularity build";

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration, normally stored in `~/.singularity-setup/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct InstallConfig {
    /// Filesystem roots.
    pub roots: RootsConfig,
    /// Module file metadata lines.
    pub modulefile: ModulefileConfig,
    /// Image relocation behaviour.
    pub image: ImageConfig,
}

/// The three roots every install path hangs off.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RootsConfig {
    /// Install tree, `software/name/version/`.
    pub software: PathBuf,
    /// Lmod module tree, `modules/name/version.lua`.
    pub modules: PathBuf,
    /// Where freshly built images wait, keyed by package name.
    pub staging: PathBuf,
}

impl Default for RootsConfig {
    fn default() -> Self {
        Self {
            software: PathBuf::from(DEFAULT_SOFTWARE_ROOT),
            modules: PathBuf::from(DEFAULT_MODULE_ROOT),
            staging: PathBuf::from(DEFAULT_STAGING_ROOT),
        }
    }
}

/// Metadata written into the module file header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ModulefileConfig {
    pub installed_by: String,
    pub provenance: String,
}

impl Default for ModulefileConfig {
    fn default() -> Self {
        Self {
            installed_by: DEFAULT_INSTALLED_BY.to_string(),
            provenance: DEFAULT_PROVENANCE.to_string(),
        }
    }
}

/// Image move options.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ImageConfig {
    /// Fall back to copy + remove when staging and install roots are on
    /// different filesystems. Off by default: a cross-device rename fails.
    pub copy_across_devices: bool,
}

impl InstallConfig {
    /// Check that every root is set.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first empty root.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, root) in [
            ("roots.software", &self.roots.software),
            ("roots.modules", &self.roots.modules),
            ("roots.staging", &self.roots.staging),
        ] {
            if root.as_os_str().is_empty() {
                return Err(ConfigError::EmptyRoot { key });
            }
        }
        Ok(())
    }
}
