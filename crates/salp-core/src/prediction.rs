//! Prediction result returned by the backend.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Binary salary category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum SalaryCategory {
    #[serde(rename = ">50K")]
    AboveThreshold,
    #[serde(rename = "<=50K")]
    AtOrBelowThreshold,
}

impl SalaryCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AboveThreshold => ">50K",
            Self::AtOrBelowThreshold => "<=50K",
        }
    }

    #[must_use]
    pub const fn is_high_income(self) -> bool {
        matches!(self, Self::AboveThreshold)
    }
}

impl fmt::Display for SalaryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SalaryCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ">50K" => Ok(Self::AboveThreshold),
            "<=50K" => Ok(Self::AtOrBelowThreshold),
            other => Err(CoreError::InvalidCategory(other.to_string())),
        }
    }
}

/// Category plus free-text explanation, exactly as the backend sent them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub salary_category: SalaryCategory,
    pub explanation: String,
}
