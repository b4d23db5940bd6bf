//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `std::fs`, or `std::process`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod modulefile;
pub mod package;

pub use config::InstallConfig;
pub use error::{ConfigError, InstallError, PackageError};
pub use modulefile::{ModulefileParams, render_modulefile};
pub use package::{InstallationPaths, PackageIdentity};
