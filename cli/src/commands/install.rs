//! `singularity-setup <name> <version>` — install a staged image.

use anyhow::{Context, Result};

use crate::application::ports::{ConfigStore, InstallFs};
use crate::application::services::install::InstallationOrchestrator;
use crate::domain::{InstallError, PackageIdentity};
use crate::output::reporter::SilentReporter;
use crate::output::{HumanRenderer, OutputContext, TerminalReporter, json};

/// Parsed install arguments.
pub struct InstallArgs {
    pub name: String,
    pub version: String,
    pub json: bool,
    pub dry_run: bool,
}

/// Run the install.
///
/// # Errors
///
/// Returns an error if the identity is invalid, configuration cannot be
/// loaded, or any install step fails.
pub fn run(
    ctx: &OutputContext,
    args: &InstallArgs,
    store: &impl ConfigStore,
    fs: &impl InstallFs,
) -> Result<()> {
    let identity = PackageIdentity::new(args.name.as_str(), args.version.as_str())?;
    let config = store.load().context("cannot load configuration")?;
    let orchestrator = InstallationOrchestrator::new(&config, fs);
    tracing::info!(package = %identity, dry_run = args.dry_run, "install requested");

    if args.dry_run {
        let plan = orchestrator.dry_run(&identity);
        if args.json {
            println!("{}", json::format_value(&plan)?);
        } else {
            HumanRenderer::new(ctx).render_plan(&plan);
        }
        return Ok(());
    }

    let report = if args.json {
        orchestrator.install(&identity, &SilentReporter)?
    } else {
        orchestrator.install(&identity, &TerminalReporter::new(ctx))?
    };

    if args.json {
        println!("{}", json::format_value(&report)?);
    } else {
        HumanRenderer::new(ctx).render_report(&report);
    }
    Ok(())
}

/// Machine-readable code for a failed run.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<InstallError>())
        .map_or("error", InstallError::code)
}
