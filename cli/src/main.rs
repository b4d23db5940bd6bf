//! singularity-setup - install staged Singularity images as Lmod modules

use clap::Parser;
use tracing_subscriber::EnvFilter;

use singularity_setup::cli::Cli;
use singularity_setup::commands::install::error_code;
use singularity_setup::output::json;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let as_json = cli.json;
    if let Err(e) = cli.run() {
        match json::format_error(&format!("{e:#}"), error_code(&e)) {
            Ok(obj) if as_json => println!("{obj}"),
            _ => eprintln!("Error: {e:#}"),
        }
        std::process::exit(1);
    }
}
