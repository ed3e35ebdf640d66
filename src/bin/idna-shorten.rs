//! idna-shorten - Shorten strings by inverting Unicode IDNA mappings
//!
//! Provides CLI utilities and an interactive REPL for shortening strings
//! against the IDNA compatibility mapping table.

use clap::Parser;
use colored::Colorize;
use std::process;

use idna_shorten::cli::{commands, Cli, Commands};
use idna_shorten::repl;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Repl { table } => repl::run(table),
        command => commands::execute(command),
    };

    if let Err(e) = result {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}
