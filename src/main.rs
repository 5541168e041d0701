//! CLI entry point for querying tile map files

use clap::Parser;
use tilefield::io::cli::{Cli, CommandRunner};

// Allow print for the query report
#[allow(clippy::print_stdout)]
fn main() -> tilefield::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();
    log::debug!("Starting tilefield v{}", env!("CARGO_PKG_VERSION"));

    let runner = CommandRunner::new(cli);
    let report = runner.run()?;
    println!("{report}");
    Ok(())
}
