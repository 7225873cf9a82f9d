//! primer command-line runner.
//!
//! Prints the container and string walkthroughs to standard output.
//!
//! # Quick Start
//!
//! ```bash
//! # Run every walkthrough
//! primer
//!
//! # Run only the text scanner, with debug diagnostics on stderr
//! primer -vv section scan
//!
//! # Inspect the resolved configuration
//! primer config show --format toml
//! ```

mod commands;
mod style;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use primer::Section;
use primer_config::{ConfigLoader, LoggingConfig};
use tracing_subscriber::EnvFilter;

/// primer - walkthroughs of sums, sequences, maps, and string scanning.
#[derive(Parser)]
#[command(name = "primer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Increase diagnostic output on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only report errors on stderr.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Directory searched for primer.toml and primer.local.toml.
    #[arg(long, global = true, default_value = ".")]
    project: PathBuf,

    /// Disable colors on the version and config screens.
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single walkthrough section.
    Section {
        /// Section to run (aggregate, sequence, mapping, scan, prefix).
        section: Section,
    },

    /// Show version information.
    Version,

    /// Configuration commands.
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the resolved configuration.
    Show {
        /// Output format (text, toml, json).
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Validate configuration files in the project directory.
    Validate,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // A broken config must not stop the walkthrough; fall back and report it.
    let loaded = ConfigLoader::new().with_project_dir(&cli.project).load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    init_logging(&config.logging, cli.verbose, cli.quiet);
    style::set_no_color(cli.no_color || !config.output.color);

    if let Err(e) = &loaded {
        tracing::warn!("ignoring configuration: {e:#}");
    }

    match cli.command {
        None => commands::run::all(),
        Some(Commands::Section { section }) => commands::run::section(section),
        Some(Commands::Version) => commands::version::run(),
        Some(Commands::Config(cmd)) => match cmd {
            ConfigCommands::Show { format } => commands::config::show(&cli.project, &format),
            ConfigCommands::Validate => commands::config::validate(&cli.project),
        },
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins over flags and config.
fn init_logging(logging: &LoggingConfig, verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => logging.level.as_str(),
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(logging.ansi)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_runs_everything() {
        let cli = Cli::try_parse_from(["primer"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.project, PathBuf::from("."));
    }

    #[test]
    fn section_argument_parses_names() {
        let cli = Cli::try_parse_from(["primer", "section", "scan"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Section {
                section: Section::Scan
            })
        ));
    }

    #[test]
    fn verbose_counts_repeats() {
        let cli = Cli::try_parse_from(["primer", "-vvv"]).unwrap();
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["primer", "-q", "-v"]).is_err());
    }
}
