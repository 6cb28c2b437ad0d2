use anyhow::Context;
use salp_core::InputRecord;
use serde_json::json;

use crate::cli::root_commands::PredictArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::form::FormState;
use crate::output;
use crate::progress::Progress;
use crate::render;
use crate::session::{Session, View};
use crate::ui;

/// Handle `salp predict`.
pub async fn handle(args: &PredictArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut form = FormState::new(InputRecord::default(), ctx.numeric_policy(args.strict));
    let record = build_record(args, &mut form)?;

    let mut session = Session::new(ctx.client.clone());
    let spinner = Progress::spinner(render::LOADING_MESSAGE);
    session.submit(record).await?;
    spinner.finish_clear();

    emit(session.view(), flags.format)
}

/// Apply the command-line fields on top of the defaults and validate.
fn build_record(args: &PredictArgs, form: &mut FormState) -> anyhow::Result<InputRecord> {
    for (field, raw) in args.assignments() {
        let update = form
            .update(field, raw)
            .with_context(|| format!("invalid --{}", field.snake_key().replace('_', "-")))?;
        if update.coerced {
            tracing::warn!(%field, raw, "value is not a number; using 0");
        }
    }
    let record = form.submit();
    record.validate()?;
    Ok(record)
}

fn emit(view: View<'_>, format: OutputFormat) -> anyhow::Result<()> {
    match (view, format) {
        (View::Result(result), OutputFormat::Table) => {
            print!("{}", render::result_panel(result, ui::prefs().color));
            Ok(())
        }
        (View::Result(result), _) => output::output(result, format),
        (View::Error(message), OutputFormat::Table) => {
            print!("{}", render::error_panel(message, ui::prefs().color));
            anyhow::bail!("prediction failed")
        }
        (View::Error(message), _) => {
            output::output(&json!({ "error": message }), format)?;
            anyhow::bail!("prediction failed")
        }
        (View::Form | View::Loading, _) => anyhow::bail!("prediction did not complete"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use salp_config::NumericPolicy;
    use salp_core::vocab::Relationship;

    use super::*;

    fn form(policy: NumericPolicy) -> FormState {
        FormState::new(InputRecord::default(), policy)
    }

    #[test]
    fn unspecified_fields_keep_defaults() {
        let args = PredictArgs {
            relationship: Some("Husband".into()),
            ..PredictArgs::default()
        };
        let record = build_record(&args, &mut form(NumericPolicy::Zero)).unwrap();
        assert_eq!(
            record,
            InputRecord {
                relationship: Relationship::Husband,
                ..InputRecord::default()
            }
        );
    }

    #[test]
    fn unknown_option_names_the_flag() {
        let args = PredictArgs {
            marital_status: Some("Married".into()),
            ..PredictArgs::default()
        };
        let err = build_record(&args, &mut form(NumericPolicy::Zero)).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.starts_with("invalid --marital-status"), "{message}");
        assert!(message.contains("Married-civ-spouse"), "{message}");
    }

    #[test]
    fn coerced_value_still_has_to_pass_validation() {
        let args = PredictArgs {
            age: Some("old".into()),
            ..PredictArgs::default()
        };
        let err = build_record(&args, &mut form(NumericPolicy::Zero)).unwrap_err();
        assert!(err.to_string().contains("Age must be"), "{err}");
    }

    #[test]
    fn strict_policy_rejects_unparseable_numbers() {
        let args = PredictArgs {
            fnlwgt: Some("n/a".into()),
            ..PredictArgs::default()
        };
        let err = build_record(&args, &mut form(NumericPolicy::Reject)).unwrap_err();
        assert!(format!("{err:#}").contains("fnlwgt expects a number"));
    }

    #[test]
    fn error_view_fails_the_command() {
        assert!(emit(View::Error("boom"), OutputFormat::Raw).is_err());
    }

    #[test]
    fn result_view_succeeds() {
        let result = salp_core::PredictionResult {
            salary_category: salp_core::SalaryCategory::AboveThreshold,
            explanation: String::new(),
        };
        assert!(emit(View::Result(&result), OutputFormat::Json).is_ok());
    }
}
