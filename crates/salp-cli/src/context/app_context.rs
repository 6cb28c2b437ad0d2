use salp_client::PredictionClient;
use salp_config::{NumericPolicy, SalpConfig};

/// Shared resources built once at startup.
pub struct AppContext {
    pub config: SalpConfig,
    pub client: PredictionClient,
}

impl AppContext {
    #[must_use]
    pub fn new(config: SalpConfig) -> Self {
        let client = PredictionClient::from_config(&config.backend);
        tracing::debug!(endpoint = client.endpoint(), "prediction client ready");
        Self { config, client }
    }

    /// Numeric policy for form edits; `strict` forces `reject`.
    #[must_use]
    pub const fn numeric_policy(&self, strict: bool) -> NumericPolicy {
        if strict {
            NumericPolicy::Reject
        } else {
            self.config.form.numeric_policy
        }
    }
}
