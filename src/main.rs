use clap::Parser;
use std::process::ExitCode;
use stitchkit::cli::{self, Cli};
use stitchkit::init_logging;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.log_json)?;

    cli::run(cli)
}
