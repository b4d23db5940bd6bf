//! Lmod module file rendering.
//!
//! Pure functions only — no I/O. The layout is consumed by the cluster's
//! module loader and must stay byte-for-byte stable, blank lines included.

use std::path::Path;

/// Values substituted into the module file template.
#[derive(Debug, Clone, Copy)]
pub struct ModulefileParams<'a> {
    pub name: &'a str,
    pub version: &'a str,
    /// Install directory prepended to `PATH`.
    pub path: &'a Path,
    /// Maintainer line.
    pub installed_by: &'a str,
    /// Provenance line.
    pub provenance: &'a str,
}

/// Render the module file for one package version.
#[must_use]
pub fn render_modulefile(params: &ModulefileParams<'_>) -> String {
    let ModulefileParams {
        name,
        version,
        path,
        installed_by,
        provenance,
    } = *params;
    let path = path.display();
    format!(
        "--- Metadata\n\
         -- Installed by: {installed_by}\n\
         -- From: {provenance}\n\
         -- License: N/A\n\
         -- Test:\n\
         \n\
         whatis(\"Version: {version}\")\n\
         whatis(\"Keywords: {name}\")\n\
         whatis(\"Description: {name}\")\n\
         \n\
         \n\
         -- Set the paths\n\
         prepend_path(\"PATH\", \"{path}\")\n\
         \n"
    )
}
