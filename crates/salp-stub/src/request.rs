//! Request body validation for `POST /predict`.
//!
//! Mirrors the request model of the production backend: all nine keys are
//! required, categorical values must be vocabulary members, and the three
//! numbers are non-negative whole numbers with `educationNum <= 16`.

use salp_core::InputRecord;
use serde_json::Value;

/// Parse and validate a request body.
///
/// # Errors
///
/// Returns a human-readable reason, used as the 422 `detail`.
pub fn parse_request(body: &str) -> Result<InputRecord, String> {
    let value: Value =
        serde_json::from_str(body).map_err(|error| format!("Malformed JSON body: {error}"))?;
    if !value.is_object() {
        return Err("Request body must be a JSON object".to_string());
    }

    let record: InputRecord =
        serde_json::from_value(value).map_err(|error| format!("Invalid request: {error}"))?;

    let violations: Vec<String> = [
        ("age", record.age, None),
        ("fnlwgt", record.fnlwgt, None),
        ("educationNum", record.education_num, Some(16.0)),
    ]
    .into_iter()
    .filter_map(|(key, value, max)| check_whole(key, value, max))
    .collect();

    if violations.is_empty() {
        Ok(record)
    } else {
        Err(violations.join("; "))
    }
}

fn check_whole(key: &str, value: f64, max: Option<f64>) -> Option<String> {
    if value.fract() != 0.0 {
        return Some(format!("{key}: must be a whole number (got {value})"));
    }
    if value < 0.0 {
        return Some(format!("{key}: must be greater than or equal to 0 (got {value})"));
    }
    max.filter(|max| value > *max)
        .map(|max| format!("{key}: must be less than or equal to {max} (got {value})"))
}
