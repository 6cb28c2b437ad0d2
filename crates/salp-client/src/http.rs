//! Response classification helpers.
//!
//! Centralizes the status check (non-success -> [`PredictError::Http`] with
//! a best-effort detail message) and success-body validation so the client
//! itself stays focused on sending the request.

use salp_core::{PredictionResult, SalaryCategory};
use serde_json::Value;

use crate::error::PredictError;

/// Detail used when the error body yields nothing readable.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Check an HTTP response status.
///
/// Returns the response unchanged on success. A non-success status is turned
/// into [`PredictError::Http`], consuming the body to build its detail.
pub async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, PredictError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    Err(PredictError::Http {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or_default().to_string(),
        detail: extract_detail(&body),
    })
}

/// Pull a human-readable message out of an error body.
///
/// Tries, in order: a non-blank string `detail` field, a non-string `detail`
/// value as compact JSON, the whole JSON body, the raw text, and finally
/// [`UNKNOWN_ERROR`]. The result is never empty.
#[must_use]
pub fn extract_detail(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => {
            let from_field = match map.get("detail") {
                Some(Value::String(detail)) if !detail.trim().is_empty() => Some(detail.clone()),
                Some(detail) if !detail.is_null() && !detail.is_string() => Some(detail.to_string()),
                _ => None,
            };
            from_field.unwrap_or_else(|| Value::Object(map).to_string())
        }
        Ok(Value::Null) => UNKNOWN_ERROR.to_string(),
        Ok(other) => other.to_string(),
        Err(_) if !body.trim().is_empty() => body.trim().to_string(),
        Err(_) => UNKNOWN_ERROR.to_string(),
    }
}

/// Validate a success body and convert it into a [`PredictionResult`].
///
/// # Errors
///
/// Returns [`PredictError::Schema`] unless the body is a JSON object with a
/// string `salaryCategory` and a string `explanation`, then
/// [`PredictError::InvalidCategory`] if the category is not a known literal.
pub fn parse_prediction(body: &str) -> Result<PredictionResult, PredictError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|error| PredictError::Schema(format!("body is not JSON ({error})")))?;
    let Value::Object(map) = value else {
        return Err(PredictError::Schema("expected a JSON object".into()));
    };

    let string_field = |key: &str| {
        map.get(key)
            .and_then(Value::as_str)
            .ok_or_else(|| PredictError::Schema(format!("missing string field '{key}'")))
    };
    let category = string_field("salaryCategory")?;
    let explanation = string_field("explanation")?;

    let salary_category = category
        .parse::<SalaryCategory>()
        .map_err(|_| PredictError::InvalidCategory(category.to_string()))?;

    Ok(PredictionResult {
        salary_category,
        explanation: explanation.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[test]
    fn detail_prefers_string_field() {
        assert_eq!(extract_detail(r#"{"detail":"Model not loaded"}"#), "Model not loaded");
    }

    #[test]
    fn detail_serializes_structured_field() {
        let body = r#"{"detail":[{"loc":["body","age"],"msg":"field required"}]}"#;
        assert_eq!(
            extract_detail(body),
            r#"[{"loc":["body","age"],"msg":"field required"}]"#
        );
    }

    #[test]
    fn detail_falls_back_to_whole_json() {
        assert_eq!(extract_detail(r#"{"error":"boom"}"#), r#"{"error":"boom"}"#);
        assert_eq!(extract_detail(r#"{"detail":""}"#), r#"{"detail":""}"#);
    }

    #[test]
    fn detail_falls_back_to_raw_text() {
        assert_eq!(extract_detail("  Bad Gateway\n"), "Bad Gateway");
    }

    #[test]
    fn detail_falls_back_to_unknown_error() {
        assert_eq!(extract_detail(""), UNKNOWN_ERROR);
        assert_eq!(extract_detail("   "), UNKNOWN_ERROR);
        assert_eq!(extract_detail("null"), UNKNOWN_ERROR);
    }

    #[test]
    fn detail_is_never_empty() {
        for body in ["", "{}", "[]", "\"\"", "0", "null", "{\"detail\":null}", "<html></html>"] {
            assert!(!extract_detail(body).is_empty(), "empty detail for {body:?}");
        }
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn check_response_http_error_with_detail() {
        let resp = mock_response(500, r#"{"detail":"Prediction error: boom"}"#);
        let err = check_response(resp).await.unwrap_err();
        match err {
            PredictError::Http {
                status,
                status_text,
                detail,
            } => {
                assert_eq!(status, 500);
                assert_eq!(status_text, "Internal Server Error");
                assert_eq!(detail, "Prediction error: boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn check_response_http_error_without_body() {
        let resp = mock_response(503, "");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(err, PredictError::Http { status: 503, ref detail, .. } if detail == UNKNOWN_ERROR));
        assert!(err.to_string().contains("503 Service Unavailable"));
    }

    #[test]
    fn parses_valid_prediction() {
        let result =
            parse_prediction(r#"{"salaryCategory":"<=50K","explanation":"","extra":1}"#).unwrap();
        assert_eq!(result.salary_category, SalaryCategory::AtOrBelowThreshold);
        assert_eq!(result.explanation, "");
    }

    #[test]
    fn schema_errors_for_malformed_bodies() {
        for body in [
            "not json",
            "[]",
            "null",
            r#"{"explanation":"x"}"#,
            r#"{"salaryCategory":">50K"}"#,
            r#"{"salaryCategory":1,"explanation":"x"}"#,
            r#"{"salaryCategory":">50K","explanation":null}"#,
            r#"{"salaryCategory":">50K","explanation":["x"]}"#,
        ] {
            let err = parse_prediction(body).unwrap_err();
            assert!(matches!(err, PredictError::Schema(_)), "{body}: {err:?}");
        }
    }

    #[test]
    fn invalid_category_names_the_value() {
        let err = parse_prediction(r#"{"salaryCategory":"50K","explanation":"x"}"#).unwrap_err();
        assert!(matches!(err, PredictError::InvalidCategory(ref v) if v == "50K"));
        assert!(err.to_string().contains("50K"));
    }

    #[test]
    fn shape_is_checked_before_category() {
        let err = parse_prediction(r#"{"salaryCategory":"50K"}"#).unwrap_err();
        assert!(matches!(err, PredictError::Schema(_)));
    }
}
