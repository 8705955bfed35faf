//! vgen CLI: generates the parameterized Verilog standard library.
//!
//! Provides `vgen generate` to write the library file, `vgen check` to
//! verify that an existing file matches what would be generated, and
//! `vgen list` to print the modules the library contains.

#![warn(missing_docs)]

mod check;
mod generate;
mod list;
mod pipeline;

use std::process;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

/// vgen: Verilog standard library generator.
#[derive(Parser, Debug)]
#[command(name = "vgen", version, about = "Verilog standard library generator")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (repeat for more detail).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Path to a `vgen.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the library file.
    Generate(GenerateArgs),
    /// Verify that a library file is up to date.
    Check(CheckArgs),
    /// List the modules the library contains.
    List(ListArgs),
}

/// Arguments for the `vgen generate` subcommand.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Output path (default: `library.output` from the config, else `stdlib.v`).
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for the `vgen check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Library file to verify (default: the configured output path).
    pub path: Option<String>,
}

/// Arguments for the `vgen list` subcommand.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Listing output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// One module per line.
    Text,
    /// Module descriptors as JSON.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Optional path to a config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    let global = GlobalArgs {
        quiet: cli.quiet,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Generate(ref args) => generate::run(args, &global),
        Command::Check(ref args) => check::run(args, &global),
        Command::List(ref args) => list::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides the flags.
fn init_logging(quiet: bool, verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(quiet, verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Maps `--quiet` and the `-v` count to a log level.
fn log_level(quiet: bool, verbose: u8) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
