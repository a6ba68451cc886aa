//! Mapsmith command line.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use mapsmith::cli::{self, Cli, Commands};
use mapsmith::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Check => cli::check::check_config(&cli.config),
        Commands::Dump => cli::dump::dump_config(&cli.config),
        Commands::Plan { args } => cli::plan::plan_render(&cli.config, args),
    }
}
