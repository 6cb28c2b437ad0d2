//! Form input settings.

use serde::{Deserialize, Serialize};

/// What the form does with numeric input that does not parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericPolicy {
    /// Store `0` and flag the field as coerced.
    #[default]
    Zero,
    /// Refuse the edit and keep the previous value.
    Reject,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FormConfig {
    #[serde(default)]
    pub numeric_policy: NumericPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_zero_fallback() {
        assert_eq!(FormConfig::default().numeric_policy, NumericPolicy::Zero);
    }
}
