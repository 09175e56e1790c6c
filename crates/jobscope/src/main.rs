//! `jobscope` binary entry point.
#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use jobscope::{Cli, Commands, GlobalArgs, commands};
use jobscope_core::{Config, ConfigLoader, ConfigSources};

mod observability;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let global = cli.global;
    global.color.apply();

    if cli.version_only {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let Some(command) = cli.command else {
        // arg_required_else_help already printed usage
        return Ok(());
    };

    if let Some(ref dir) = global.chdir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("cannot change directory to {}", dir.display()))?;
    }

    let (config, sources) = load_config(&global)?;

    let log_dir = config.log_dir.as_ref().map(|dir| dir.as_std_path().to_path_buf());
    let _guard = observability::init_observability(
        &observability::ObservabilityConfig::from_env_with_overrides(log_dir),
        observability::console_filter(global.quiet, global.verbose),
        observability::file_filter(config.log_level.as_str()),
    )
    .context("failed to initialize logging")?;
    tracing::debug!(?global, config_file = ?sources.primary_file(), "starting");

    let result = run(command, &global, &config, &sources);
    if let Err(ref err) = result {
        tracing::error!(error = %err, "command failed");
    }
    result
}

fn run(
    command: Commands,
    global: &GlobalArgs,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    match command {
        Commands::Report(args) => {
            commands::report::cmd_report(args, global.json, global.quiet, config)
        }
        Commands::Columns(args) => commands::columns::cmd_columns(args, global.json, config),
        Commands::Schema(args) => commands::schema::cmd_schema(args),
        Commands::Info(args) => commands::info::cmd_info(args, global.json, config, sources),
    }
}

/// Discover project and user config from the working directory, then layer
/// `--config` on top.
fn load_config(global: &GlobalArgs) -> anyhow::Result<(Config, ConfigSources)> {
    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    let mut loader = ConfigLoader::new().with_project_search(&utf8(cwd)?);
    if let Some(ref file) = global.config {
        loader = loader.with_file(&utf8(file.clone())?);
    }
    loader.load().context("failed to load configuration")
}

fn utf8(path: PathBuf) -> anyhow::Result<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path)
        .map_err(|path| anyhow::anyhow!("path is not valid UTF-8: {}", path.display()))
}
