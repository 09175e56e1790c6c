//! Columns command — list the columns a spreadsheet offers for role binding.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use jobscope_core::{Config, RecordSet, Role};

/// Arguments for the `columns` subcommand.
#[derive(Args, Debug)]
pub struct ColumnsArgs {
    /// Spreadsheet to inspect.
    pub file: Utf8PathBuf,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct ColumnInfo {
    index: usize,
    name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    default_for: Vec<Role>,
    missing: usize,
}

#[derive(Debug, Serialize)]
struct ColumnsListing {
    rows: usize,
    columns: Vec<ColumnInfo>,
}

impl ColumnsListing {
    fn from_records(records: &RecordSet) -> Self {
        let columns = records
            .columns()
            .iter()
            .enumerate()
            .map(|(index, name)| ColumnInfo {
                index,
                name: name.clone(),
                default_for: Role::ALL
                    .into_iter()
                    .filter(|role| role.default_index() == index)
                    .collect(),
                missing: records.column(index).filter(|c| c.is_missing()).count(),
            })
            .collect();
        Self {
            rows: records.len(),
            columns,
        }
    }
}

/// Print the column names, their positions, and which roles bind to them by default.
#[instrument(name = "cmd_columns", skip_all, fields(file = %args.file))]
pub fn cmd_columns(args: ColumnsArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing columns command");

    let records = super::load_records(&args.file, config.input_limit(), !global_json)?;
    let listing = ColumnsListing::from_records(&records);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    println!("{} ({} rows)", args.file.bold(), listing.rows);
    for column in &listing.columns {
        let roles = column
            .default_for
            .iter()
            .copied()
            .map(Role::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        print!("  {:>3}  {}", column.index.dimmed(), column.name);
        if !roles.is_empty() {
            print!("  {}", format!("[default {roles}]").green());
        }
        if column.missing > 0 {
            print!("  {}", format!("{} missing", column.missing).yellow());
        }
        println!();
    }

    Ok(())
}
