use anyhow::Context;
use salp_core::schema::{SchemaKind, json_schema};

use crate::cli::root_commands::SchemaArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output;

/// Handle `salp schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let kind = SchemaKind::from(args.target);
    let schema = json_schema(kind)
        .with_context(|| format!("failed to generate {} schema", kind.as_str()))?;

    // A schema is a document, not a record; table output falls back to JSON.
    let format = match flags.format {
        OutputFormat::Raw => OutputFormat::Raw,
        OutputFormat::Json | OutputFormat::Table => OutputFormat::Json,
    };
    output::output(&schema, format)
}
