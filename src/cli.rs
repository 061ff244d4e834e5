//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::commands;
use artifact_filter::output::OutputMode;

/// artifact-filter - Include/exclude artifact coordinates by pattern
#[derive(Parser, Debug)]
#[command(
    name = "artifact-filter",
    version,
    about = "Include/exclude artifact coordinates by pattern",
    long_about = "Decide which artifact coordinates pass a set of include and exclude patterns.\n\n\
                  Coordinates are written group:id:type[:classifier]:version.\n\
                  Patterns use up to five ':'-separated tokens with '*' and '?' wildcards,\n\
                  a leading '!' to negate, and version ranges such as [1.0,2.0)."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to .artifact-filter.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand; `None` prints a usage hint
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate coordinates against the configured filters
    Check(CheckArgs),

    /// Show the compiled filters
    Describe(PatternArgs),

    /// Show version
    Version,
}

/// Patterns given on the command line, added to the configured ones
#[derive(Args, Debug, Default)]
pub struct PatternArgs {
    /// Include pattern (repeatable)
    #[arg(short, long = "include")]
    pub include: Vec<String>,

    /// Exclude pattern (repeatable)
    #[arg(short, long = "exclude")]
    pub exclude: Vec<String>,

    /// Consult the ancestry trail when a coordinate does not match directly
    #[arg(short, long)]
    pub transitive: bool,
}

/// Arguments of the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Coordinates to check; read from stdin, one per line, when omitted
    pub coordinates: Vec<String>,

    #[command(flatten)]
    pub patterns: PatternArgs,

    /// Ancestry trail entry, root first (repeatable)
    #[arg(long = "trail")]
    pub trail: Vec<String>,

    /// Fail when any pattern never matched
    #[arg(long)]
    pub strict: bool,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let config = cli.config.as_deref();

    match cli.command {
        Some(Command::Check(args)) => commands::check(config, args, output_mode),
        Some(Command::Describe(patterns)) => commands::describe(config, &patterns, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("artifact-filter v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("artifact-filter v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'artifact-filter --help' for usage");
            }
            Ok(())
        },
    }
}
