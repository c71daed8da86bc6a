mod amount_cmd;
mod cli;
mod config;
mod convert;
mod date_cmd;
mod invoice_cmd;
mod logging;
mod search_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::HesabConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = HesabConfig::load(cli.config.as_deref())?;
    match cli.command {
        Command::Date(args) => date_cmd::run(args, &config),
        Command::Now => date_cmd::now(),
        Command::Amount(args) => amount_cmd::run(args, &config),
        Command::Search(args) => search_cmd::run(args, &config),
        Command::Invoice(args) => invoice_cmd::run(args, &config),
    }
}
