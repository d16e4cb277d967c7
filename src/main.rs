//! The main entry point for the command line interface.
use agriconnect::cli::run_cli;
use anyhow::Result;
use human_panic::setup_panic;

fn main() -> Result<()> {
    setup_panic!();

    run_cli()
}
