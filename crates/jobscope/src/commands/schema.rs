//! Schema command — describe the payload handed to renderers.

use clap::Args;
use tracing::instrument;

use jobscope_core::DashboardPayload;

/// Arguments for the `schema` subcommand.
#[derive(Args, Debug, Default)]
pub struct SchemaArgs {}

/// Print the JSON Schema of [`DashboardPayload`].
#[instrument(name = "cmd_schema", skip_all)]
pub fn cmd_schema(_args: SchemaArgs) -> anyhow::Result<()> {
    let schema = schemars::schema_for!(DashboardPayload);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
