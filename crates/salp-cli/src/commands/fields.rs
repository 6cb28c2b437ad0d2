use salp_core::{FieldKind, catalog};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::{self, table};
use crate::render;

/// Handle `salp fields`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    match flags.format {
        OutputFormat::Table => {
            println!("{}", fields_table(output::table_options()));
            Ok(())
        }
        format => output::output(&catalog(), format),
    }
}

fn fields_table(options: table::TableOptions) -> String {
    let rows = catalog()
        .iter()
        .map(|descriptor| {
            let kind = match descriptor.kind {
                FieldKind::Numeric { .. } => "numeric",
                FieldKind::Categorical { .. } => "categorical",
            };
            vec![
                descriptor.id.position().to_string(),
                descriptor.id.key().to_string(),
                descriptor.label.to_string(),
                kind.to_string(),
                render::constraint_hint(&descriptor.kind),
            ]
        })
        .collect::<Vec<_>>();
    table::render_table(&["#", "key", "label", "kind", "allowed"], &rows, options)
}
