//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Resolve and check map renderer configuration files
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "render.conf", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate the configuration file and print all notes
    #[command(visible_alias = "c")]
    Check,

    /// Print the resolved configuration
    #[command(visible_alias = "d")]
    Dump,

    /// Resolve render behaviors and print the viewer manifest
    #[command(visible_alias = "p")]
    Plan {
        #[command(flatten)]
        args: PlanArgs,
    },
}

/// Render behavior lists, each entry `map` or `map:rotation` (e.g. `day:tl`).
#[derive(clap::Args, Debug, Clone, Default)]
pub struct PlanArgs {
    /// Skip all maps
    #[arg(short = 'r', long = "render-reset")]
    pub skip_all: bool,

    /// Maps or map rotations to skip
    #[arg(short = 's', long = "render-skip", value_name = "MAP[:ROT]", value_delimiter = ',', num_args = 1..)]
    pub skip: Vec<String>,

    /// Maps or map rotations to render incrementally
    #[arg(short = 'a', long = "render-auto", value_name = "MAP[:ROT]", value_delimiter = ',', num_args = 1..)]
    pub auto: Vec<String>,

    /// Maps or map rotations to render completely
    #[arg(short = 'f', long = "render-force", value_name = "MAP[:ROT]", value_delimiter = ',', num_args = 1..)]
    pub force: Vec<String>,

    /// Write the manifest without indentation
    #[arg(long)]
    pub compact: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_and_version_flags() {
        let cli = Cli::parse_from(["mapsmith", "-v", "dump"]);
        assert!(cli.verbose);

        let cli = Cli::parse_from(["mapsmith", "check", "--verbose"]);
        assert!(cli.verbose);

        let err = Cli::try_parse_from(["mapsmith", "-V"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_plan_lists() {
        let cli = Cli::parse_from([
            "mapsmith",
            "-c",
            "maps/render.conf",
            "plan",
            "-r",
            "--render-force",
            "day:tl,night",
            "-a",
            "cave",
        ]);
        assert_eq!(cli.config, PathBuf::from("maps/render.conf"));

        let Commands::Plan { args } = cli.command else {
            panic!("expected plan");
        };
        assert!(args.skip_all);
        assert!(args.skip.is_empty());
        assert_eq!(args.force, vec!["day:tl", "night"]);
        assert_eq!(args.auto, vec!["cave"]);
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["mapsmith", "check"]);
        assert_eq!(cli.config, PathBuf::from("render.conf"));
        assert!(!cli.verbose);
        assert!(matches!(cli.command, Commands::Check));
    }
}
