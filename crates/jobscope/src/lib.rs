//! The `jobscope` command line.
//!
//! Parsing lives here so `xtask` can render man pages and completions from the
//! same definition the binary uses; `main.rs` only wires configuration and
//! logging before dispatching to [`commands`].

pub mod commands;
pub mod render;

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG               Log filter (e.g., debug, jobscope_core=trace)
    JOBSCOPE_LOG_PATH      Write logs to this file
    JOBSCOPE_LOG_DIR       Write jobscope.log into this directory
    JOBSCOPE_<KEY>         Any config key; nest with __
                           (e.g. JOBSCOPE_COLUMNS__COMPANY=Employer,
                           JOBSCOPE_TOP__SKILLS=50)
";

/// When to colorize terminal output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    /// Colorize when stdout is a terminal.
    #[default]
    Auto,
    /// Always colorize.
    Always,
    /// Never colorize.
    Never,
}

impl ColorMode {
    /// Install this mode as the process-wide `owo-colors` override.
    pub fn apply(self) {
        match self {
            Self::Auto => owo_colors::unset_override(),
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

/// Dashboards for job-listing spreadsheets.
#[derive(Debug, Parser)]
#[command(name = "jobscope", version, about, long_about = None)]
#[command(arg_required_else_help = true, after_long_help = ENV_HELP)]
pub struct Cli {
    /// What to do.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print the bare version number and exit
    #[arg(long)]
    pub version_only: bool,

    /// Options shared by every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Flags accepted before or after any subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Load this config file on top of the discovered ones
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Change to DIR before doing anything else
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub chdir: Option<PathBuf>,

    /// Log errors only
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorMode,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build the dashboard for a job-listing spreadsheet
    Report(commands::report::ReportArgs),

    /// List a spreadsheet's columns and the default role bindings
    Columns(commands::columns::ColumnsArgs),

    /// Print the JSON Schema of the dashboard payload
    Schema(commands::schema::SchemaArgs),

    /// Show version and effective configuration
    Info(commands::info::InfoArgs),
}

/// The clap command tree, for man pages and shell completions.
pub fn command() -> clap::Command {
    Cli::command()
}
