mod cli;

use std::error::Error;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .compact()
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        cli::Command::Diff(args) => cli::diff::handle_diff_command(args)?,
        cli::Command::Patch(args) => cli::patch::handle_patch_command(args)?,
        cli::Command::Unpatch(args) => cli::unpatch::handle_unpatch_command(args)?,
    }

    Ok(())
}
