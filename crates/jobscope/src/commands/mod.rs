//! Command implementations.

use std::time::Duration;

use anyhow::Context;
use camino::Utf8Path;
use indicatif::{ProgressBar, ProgressStyle};
use jobscope_core::RecordSet;

pub mod columns;
pub mod info;
pub mod report;
pub mod schema;

/// Load a spreadsheet, showing a spinner on stderr while it is read.
///
/// The spinner is suppressed for scripted output and hides itself when
/// stderr is not a terminal.
pub fn load_records(
    path: &Utf8Path,
    max_bytes: Option<u64>,
    show_progress: bool,
) -> anyhow::Result<RecordSet> {
    let spinner = if show_progress {
        ProgressBar::new_spinner()
    } else {
        ProgressBar::hidden()
    };
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Reading {path}"));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let records = RecordSet::from_path(path, max_bytes);
    spinner.finish_and_clear();
    records.with_context(|| format!("failed to load {path}"))
}
