//! Prediction client error types.

use thiserror::Error;

/// Ways a prediction request can fail.
///
/// The variants are mutually exclusive and ordered by how far the request
/// got: no response at all, a failing status, an unusable success body, or a
/// well-formed body carrying an unknown category.
#[derive(Debug, Error)]
pub enum PredictError {
    /// No response was obtained (refused connection, DNS, timeout, proxy).
    #[error(
        "Could not connect to the prediction backend at {endpoint}. Please ensure the server \
         is running, accessible, and that no proxy or CORS policy is blocking the request."
    )]
    Connectivity {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status.
    #[error("Prediction server returned an error: {status} {status_text}. Details: {detail}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Canonical reason phrase for the status.
        status_text: String,
        /// Message extracted from the body; never empty.
        detail: String,
    },

    /// A success response whose body is not `{salaryCategory, explanation}`.
    #[error("Invalid JSON structure received from prediction backend: {0}")]
    Schema(String),

    /// A well-formed body with a category other than `>50K` / `<=50K`.
    #[error("Invalid salaryCategory value from prediction backend: {0}. Must be '>50K' or '<=50K'.")]
    InvalidCategory(String),
}

impl PredictError {
    /// Short machine-readable tag for logs and JSON output.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Connectivity { .. } => "connectivity",
            Self::Http { .. } => "http",
            Self::Schema(_) => "schema",
            Self::InvalidCategory(_) => "invalid_category",
        }
    }
}
