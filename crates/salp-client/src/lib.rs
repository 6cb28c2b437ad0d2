//! # salp-client
//!
//! HTTP client for the salary prediction endpoint.
//!
//! Sends one [`InputRecord`] as a JSON `POST` and classifies the outcome:
//! - no response obtained -> [`PredictError::Connectivity`]
//! - non-success status -> [`PredictError::Http`]
//! - malformed success body -> [`PredictError::Schema`]
//! - unknown category literal -> [`PredictError::InvalidCategory`]
//!
//! There is no retry, no batching and no caching: every call is independent.

mod error;
pub mod http;

pub use error::PredictError;

use std::future::Future;
use std::time::Duration;

use salp_config::BackendConfig;
use salp_core::{InputRecord, PredictionResult};

use crate::http::{check_response, parse_prediction};

// ── Seam ───────────────────────────────────────────────────────────

/// Anything that can turn an input record into a prediction.
pub trait Predictor {
    fn predict(
        &self,
        record: &InputRecord,
    ) -> impl Future<Output = Result<PredictionResult, PredictError>> + Send;
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client bound to a single prediction endpoint.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    http: reqwest::Client,
    endpoint: String,
}

impl Default for PredictionClient {
    fn default() -> Self {
        Self::from_config(&BackendConfig::default())
    }
}

impl PredictionClient {
    /// Create a client for `endpoint` with default settings.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::from_config(&BackendConfig {
            endpoint: endpoint.into(),
            ..BackendConfig::default()
        })
    }

    /// Create a client from backend configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build, which
    /// cannot happen for a config that passed `SalpConfig::validate`.
    #[must_use]
    pub fn from_config(config: &BackendConfig) -> Self {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Self {
            http: builder.build().expect("reqwest client should build"),
            endpoint: config.endpoint.trim().to_string(),
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Request a prediction for `record`.
    ///
    /// Every failure is logged before it is returned.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError`] classified by how far the request got.
    pub async fn predict(&self, record: &InputRecord) -> Result<PredictionResult, PredictError> {
        let result = self.send(record).await;
        match &result {
            Ok(prediction) => tracing::debug!(
                endpoint = %self.endpoint,
                category = %prediction.salary_category,
                "prediction received"
            ),
            Err(error @ PredictError::Connectivity { source, .. }) => tracing::error!(
                endpoint = %self.endpoint,
                %source,
                "{error}"
            ),
            Err(error) => tracing::warn!(
                endpoint = %self.endpoint,
                kind = error.kind(),
                %error,
                "prediction request failed"
            ),
        }
        result
    }

    async fn send(&self, record: &InputRecord) -> Result<PredictionResult, PredictError> {
        tracing::debug!(endpoint = %self.endpoint, "sending prediction request");
        let response = self
            .http
            .post(&self.endpoint)
            .json(record)
            .send()
            .await
            .map_err(|source| PredictError::Connectivity {
                endpoint: self.endpoint.clone(),
                source,
            })?;

        let response = check_response(response).await?;
        let body = response
            .text()
            .await
            .map_err(|error| PredictError::Schema(format!("could not read body ({error})")))?;
        parse_prediction(&body)
    }
}

impl Predictor for PredictionClient {
    async fn predict(&self, record: &InputRecord) -> Result<PredictionResult, PredictError> {
        Self::predict(self, record).await
    }
}
