//! Report command — build the dashboard for a spreadsheet.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde_json::json;
use tracing::{debug, info, instrument};

use jobscope_core::session::WAITING_MESSAGE;
use jobscope_core::{ColumnSelection, Config, DashboardPayload, Session, SessionView};

use crate::render;

/// Arguments for the `report` subcommand.
#[derive(Args, Debug, Default)]
pub struct ReportArgs {
    /// Spreadsheet of job listings (xlsx, xlsm, xlsb, xls, ods, csv, tsv).
    pub file: Option<Utf8PathBuf>,

    /// Column holding the hiring company (default: 2nd column).
    #[arg(long, value_name = "COLUMN")]
    pub company: Option<String>,

    /// Column holding the job location (default: 5th column).
    #[arg(long, value_name = "COLUMN")]
    pub location: Option<String>,

    /// Column holding the delimited skills list (default: 7th column).
    #[arg(long, value_name = "COLUMN")]
    pub skills: Option<String>,

    /// Column holding the job description (default: 8th column).
    #[arg(long, value_name = "COLUMN")]
    pub description: Option<String>,

    /// Also write the renderer payloads to this JSON file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<Utf8PathBuf>,
}

impl ReportArgs {
    fn selection(&self) -> ColumnSelection {
        ColumnSelection {
            company: self.company.clone(),
            location: self.location.clone(),
            skills: self.skills.clone(),
            description: self.description.clone(),
        }
    }
}

/// Build every dashboard projection for a spreadsheet and hand the payloads
/// to the chosen output.
#[instrument(name = "cmd_report", skip_all, fields(file = ?args.file))]
pub fn cmd_report(
    args: ReportArgs,
    global_json: bool,
    quiet: bool,
    config: &Config,
) -> anyhow::Result<()> {
    debug!(file = ?args.file, output = ?args.output, "executing report command");

    let mut session = Session::new(config.report_options());

    if let Some(ref file) = args.file {
        let records = super::load_records(file, config.input_limit(), !global_json && !quiet)?;
        let selection = config.columns.clone().overridden_by(args.selection());
        session
            .load(records, &selection)
            .with_context(|| format!("failed to build report for {file}"))?;
    }

    let report = match session.view() {
        SessionView::Waiting => {
            if global_json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({
                        "status": "waiting",
                        "message": WAITING_MESSAGE,
                    }))?
                );
            } else {
                println!("{} {}", "i".cyan().bold(), WAITING_MESSAGE);
            }
            return Ok(());
        }
        SessionView::Ready(report) => report,
    };

    let payload = DashboardPayload::from_report(report);

    if let Some(ref output) = args.output {
        let body = serde_json::to_string_pretty(&payload)?;
        std::fs::write(output.as_std_path(), body)
            .with_context(|| format!("failed to write {output}"))?;
        info!(output = %output, "payloads written");
    }

    if global_json {
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        let title = args.file.as_ref().map_or("", |f| f.as_str());
        render::print_dashboard(title, &payload);
        if let Some(ref output) = args.output {
            println!("\n{} {}", "Payloads written to".dimmed(), output.cyan());
        }
    }

    Ok(())
}
