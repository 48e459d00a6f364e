//! spritestrip CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, pick the assets to run,
//! process them and print the summary. For programmatic use, prefer the
//! library API (`spritestrip::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
