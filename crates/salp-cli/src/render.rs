//! Plain-text rendering of the form and of each session view.

use std::fmt::Write as _;

use salp_core::{FieldKind, FieldValue, PredictionResult, SalaryCategory, catalog};

use crate::form::FormState;
use crate::session::View;

pub const LOADING_MESSAGE: &str = "Getting prediction from your model...";
pub const ERROR_HEADING: &str = "Prediction Error";
pub const ERROR_HINT: &str = "Ensure your prediction backend server is running and accessible.";
pub const RESULT_HEADING: &str = "Prediction Result";
pub const COERCED_MARKER: &str = "(coerced from invalid input)";

const RESET: &str = "\u{1b}[0m";
const BOLD: &str = "\u{1b}[1m";
const RED: &str = "\u{1b}[1;31m";
const GREEN: &str = "\u{1b}[1;32m";
const AMBER: &str = "\u{1b}[1;33m";
const DIM: &str = "\u{1b}[2m";

fn paint(text: &str, code: &str, color: bool) -> String {
    if color {
        format!("{code}{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// One line per field: index, label, key, value, constraints or options.
#[must_use]
pub fn form_lines(form: &FormState, color: bool) -> String {
    let record = form.draft();
    let mut out = String::new();
    for descriptor in catalog() {
        let id = descriptor.id;
        let value = match record.get(id) {
            FieldValue::Number(number) => number.to_string(),
            FieldValue::Choice(literal) => literal.to_string(),
        };
        let _ = write!(
            out,
            "{:>2}. {} ({}): {}",
            id.position(),
            descriptor.label,
            id.key(),
            paint(&value, BOLD, color)
        );
        if form.is_coerced(id) {
            let _ = write!(out, " {}", paint(COERCED_MARKER, AMBER, color));
        }
        let hint = constraint_hint(&descriptor.kind);
        if !hint.is_empty() {
            let _ = write!(out, "  {}", paint(&hint, DIM, color));
        }
        out.push('\n');
    }
    out
}

/// Bounds of a numeric field or the literals of a categorical one.
#[must_use]
pub fn constraint_hint(kind: &FieldKind) -> String {
    match kind {
        FieldKind::Numeric { min, max, step, .. } => {
            let parts: Vec<String> = [("min", min), ("max", max), ("step", step)]
                .into_iter()
                .filter_map(|(name, bound)| bound.map(|bound| format!("{name} {bound}")))
                .collect();
            if parts.is_empty() {
                String::new()
            } else {
                format!("[{}]", parts.join(", "))
            }
        }
        FieldKind::Categorical { options } => {
            let values: Vec<&str> = options.iter().map(|option| option.value).collect();
            format!("options: {}", values.join(", "))
        }
    }
}

#[must_use]
pub fn error_panel(message: &str, color: bool) -> String {
    format!(
        "{}\n  {message}\n  {ERROR_HINT}\n",
        paint(ERROR_HEADING, RED, color)
    )
}

#[must_use]
pub fn category_badge(category: SalaryCategory, color: bool) -> String {
    let code = if category.is_high_income() { GREEN } else { AMBER };
    paint(category.as_str(), code, color)
}

#[must_use]
pub fn result_panel(result: &PredictionResult, color: bool) -> String {
    format!(
        "{}\n  Salary category: {}\n\n  Explanation:\n  {}\n",
        paint(RESULT_HEADING, BOLD, color),
        category_badge(result.salary_category, color),
        result.explanation
    )
}

/// Render whichever view the session selected.
#[must_use]
pub fn view(view: View<'_>, form: &FormState, color: bool) -> String {
    match view {
        View::Form => form_lines(form, color),
        View::Loading => format!("{LOADING_MESSAGE}\n"),
        View::Error(message) => error_panel(message, color),
        View::Result(result) => result_panel(result, color),
    }
}
