//! Schema command: JSON Schema of machine-readable output.

use clap::{Args, ValueEnum};
use feedback_lens_core::{InputReport, LabeledBatch};
use tracing::{debug, instrument};

/// Which output to describe.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum SchemaTarget {
    /// `batch --json`
    #[default]
    Batch,
    /// `score --json`
    Score,
}

/// Arguments for the `schema` subcommand.
#[derive(Args, Debug, Default)]
pub struct SchemaArgs {
    /// Output to describe.
    #[arg(value_enum, default_value_t)]
    pub target: SchemaTarget,
}

/// Print a JSON Schema document.
#[instrument(name = "cmd_schema", skip_all)]
pub fn cmd_schema(args: SchemaArgs) -> anyhow::Result<()> {
    debug!(target = ?args.target, "executing schema command");
    println!("{}", serde_json::to_string_pretty(&schema_for(args.target))?);
    Ok(())
}

fn schema_for(target: SchemaTarget) -> schemars::Schema {
    match target {
        SchemaTarget::Batch => schemars::schema_for!(LabeledBatch),
        SchemaTarget::Score => schemars::schema_for!(InputReport),
    }
}
