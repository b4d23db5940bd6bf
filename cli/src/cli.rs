//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::Parser;

use crate::commands;
use crate::infra::config::YamlConfigStore;
use crate::infra::fs::LocalFs;
use crate::output::OutputContext;

/// Install a staged Singularity image and write its Lmod module file
#[derive(Parser)]
#[command(name = "singularity-setup", version, arg_required_else_help = true)]
pub struct Cli {
    /// Name of program and singularity image
    pub program_name: String,

    /// Version number of program
    pub program_version: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output (also honoured via `NO_COLOR`)
    #[arg(long)]
    pub no_color: bool,

    /// Show what would be done without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Execute the install.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or any install step fails.
    pub fn run(self) -> Result<()> {
        let ctx = OutputContext::new(self.no_color, self.quiet);
        let args = commands::install::InstallArgs {
            name: self.program_name,
            version: self.program_version,
            json: self.json,
            dry_run: self.dry_run,
        };
        commands::install::run(&ctx, &args, &YamlConfigStore, &LocalFs)
    }
}
