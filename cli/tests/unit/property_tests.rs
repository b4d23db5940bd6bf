//! Property-based tests for path derivation and module file rendering.
//!
//! Uses `proptest` to verify invariants across many random identities.

#![allow(clippy::expect_used)]

use std::path::PathBuf;

use proptest::prelude::*;

use singularity_setup::application::services::install::InstallationOrchestrator;
use singularity_setup::domain::config::RootsConfig;
use singularity_setup::domain::{
    InstallConfig, InstallationPaths, ModulefileParams, PackageIdentity, render_modulefile,
};
use singularity_setup::infra::fs::LocalFs;

fn roots() -> RootsConfig {
    RootsConfig {
        software: PathBuf::from("/sw"),
        modules: PathBuf::from("/mod"),
        staging: PathBuf::from("/stage"),
    }
}

proptest! {
    /// Every substitution lands on its own line and nothing else changes shape.
    #[test]
    fn prop_render_substitutes_exact_lines(
        name in "[A-Za-z][A-Za-z0-9_-]{0,20}",
        version in "[0-9]{1,3}(\\.[0-9]{1,3}){0,3}",
    ) {
        let path = PathBuf::from("/sw").join(&name).join(&version);
        let text = render_modulefile(&ModulefileParams {
            name: &name,
            version: &version,
            path: &path,
            installed_by: "maintainer",
            provenance: "singularity build",
        });
        let lines: Vec<&str> = text.lines().collect();
        prop_assert_eq!(lines.len(), 14);
        prop_assert_eq!(lines[6], format!("whatis(\"Version: {version}\")"));
        prop_assert_eq!(lines[7], format!("whatis(\"Keywords: {name}\")"));
        prop_assert_eq!(lines[8], format!("whatis(\"Description: {name}\")"));
        prop_assert_eq!(lines[12], format!("prepend_path(\"PATH\", \"{}\")", path.display()));
    }

    /// The installed image is always `<install_dir>/<name>` and the module
    /// file always `<module_dir>/<version>.lua`.
    #[test]
    fn prop_paths_follow_layout(
        name in "[a-z][a-z0-9-]{0,15}",
        version in "[0-9]{1,2}\\.[0-9]{1,2}",
    ) {
        let id = PackageIdentity::new(name.as_str(), version.as_str()).expect("identity");
        let paths = InstallationPaths::derive(&roots(), &id);
        prop_assert_eq!(&paths.installed_image, &paths.install_dir.join(&name));
        prop_assert_eq!(&paths.module_file, &paths.module_dir.join(format!("{version}.lua")));
        prop_assert_eq!(&paths.staged_image, &PathBuf::from("/stage").join(&name));
        prop_assert!(paths.install_dir.starts_with("/sw"));
    }

    /// Creating the same install directory twice always succeeds.
    #[test]
    fn prop_ensure_directory_is_idempotent(
        name in "[a-z]{1,8}",
        version in "[0-9]{1,2}\\.[0-9]{1,2}",
    ) {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let config = InstallConfig {
            roots: RootsConfig {
                software: dir.path().join("sw"),
                modules: dir.path().join("mod"),
                staging: dir.path().join("stage"),
            },
            ..InstallConfig::default()
        };
        let orchestrator = InstallationOrchestrator::new(&config, &LocalFs);
        let id = PackageIdentity::new(name.as_str(), version.as_str()).expect("identity");
        let target = orchestrator.plan(&id).install_dir;
        prop_assert!(orchestrator.ensure_directory(&target).is_ok());
        prop_assert!(orchestrator.ensure_directory(&target).is_ok());
        prop_assert!(target.is_dir());
    }
}
