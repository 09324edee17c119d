//! Tessera CLI: circuit-library checking and pre-configured fabric netlists.
//!
//! Provides `tessera check` to validate a circuit library and
//! `tessera preconfig` to write the pre-configured top-level Verilog module
//! of a fabric for a placed benchmark.

#![warn(missing_docs)]

mod check;
mod pipeline;
mod preconfig;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

/// Tessera: FPGA fabric library checks and netlists.
#[derive(Parser, Debug)]
#[command(name = "tessera", version, about = "Tessera FPGA fabric tools")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Control colored output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a custom `tessera.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a circuit library against the structural rules.
    Check(CheckArgs),
    /// Write the pre-configured top-level module for a placed design.
    Preconfig(PreconfigArgs),
}

/// Arguments for the `tessera check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Circuit library description (JSON).
    pub library: PathBuf,

    /// Output format for diagnostics.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Also require BL and WL ports on SRAM models.
    #[arg(long)]
    pub check_blwl: bool,
}

/// Arguments for the `tessera preconfig` subcommand.
#[derive(Parser, Debug)]
pub struct PreconfigArgs {
    /// Design bundle: circuit library, fabric and placed benchmark (JSON).
    pub design: PathBuf,

    /// Output Verilog file (default: `<design>_top_formal_verification.v`).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format for library diagnostics.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from terminal capabilities.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Diagnostic output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose/debug information.
    pub verbose: bool,
    /// Whether to use colored output.
    pub color: bool,
    /// Optional path to a custom config file.
    pub config: Option<PathBuf>,
}

impl GlobalArgs {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Error
        } else if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let color = match cli.color {
        ColorChoice::Auto => std::io::stderr().is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        color,
        config: cli.config,
    };

    // RUST_LOG still overrides the level picked from the flags.
    env_logger::Builder::new()
        .filter_level(global.log_level())
        .format_timestamp(None)
        .parse_default_env()
        .init();

    let result = match cli.command {
        Command::Check(ref args) => check::run(args, &global),
        Command::Preconfig(ref args) => preconfig::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
