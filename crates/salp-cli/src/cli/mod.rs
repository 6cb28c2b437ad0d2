use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{ColorMode, GlobalFlags, OutputFormat, ProgressMode};
pub use root_commands::Commands;

/// Top-level CLI parser for the `salp` binary.
#[derive(Debug, Parser)]
#[command(
    name = "salp",
    version,
    about = "salp - salary category predictions from the terminal"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Prediction endpoint URL (overrides `backend.endpoint`)
    #[arg(short, long, global = true)]
    pub endpoint: Option<String>,

    /// Color output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Spinners: auto, on, off
    #[arg(long, global = true, default_value = "auto")]
    pub progress: ProgressMode,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            endpoint: self.endpoint.clone(),
            color: self.color,
            progress: self.progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;
    use salp_core::FieldId;

    use super::root_commands::SchemaTarget;
    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["salp", "--format", "json", "--verbose", "fields"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Fields));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["salp", "fields", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn output_format_defaults_to_table() {
        let cli = Cli::try_parse_from(["salp", "fields"]).expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Table);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["salp", "--format", "xml", "fields"]).is_err());
    }

    #[test]
    fn endpoint_flag_is_carried_into_global_flags() {
        let cli = Cli::try_parse_from([
            "salp",
            "predict",
            "--endpoint",
            "http://127.0.0.1:9000/predict",
        ])
        .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.endpoint.as_deref(), Some("http://127.0.0.1:9000/predict"));
    }

    #[test]
    fn predict_collects_field_flags_in_catalog_order() {
        let cli = Cli::try_parse_from([
            "salp",
            "predict",
            "--race",
            "Black",
            "--education-num",
            "9",
            "--marital-status",
            "Divorced",
            "--age",
            "41",
        ])
        .expect("cli should parse");
        let Commands::Predict(args) = cli.command else {
            panic!("expected predict");
        };
        assert_eq!(
            args.assignments(),
            vec![
                (FieldId::Age, "41"),
                (FieldId::EducationNum, "9"),
                (FieldId::MaritalStatus, "Divorced"),
                (FieldId::Race, "Black"),
            ]
        );
    }

    #[test]
    fn schema_requires_a_target() {
        assert!(Cli::try_parse_from(["salp", "schema"]).is_err());
        let cli = Cli::try_parse_from(["salp", "schema", "response"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Schema(ref args) if args.target == SchemaTarget::Response
        ));
    }

    #[test]
    fn serve_accepts_addr() {
        let cli = Cli::try_parse_from(["salp", "serve", "--addr", "0.0.0.0:9000"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Serve(ref args) if args.addr.as_deref() == Some("0.0.0.0:9000")
        ));
    }
}
