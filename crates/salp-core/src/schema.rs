//! JSON Schemas of the prediction request and response bodies.
//!
//! Generated from the Rust types with [`schemars::schema_for!`], so the
//! vocabularies appear as `enum` constraints of their wire literals.

use schemars::schema_for;
use serde::{Deserialize, Serialize};

use crate::prediction::PredictionResult;
use crate::record::InputRecord;

/// Which wire body to describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaKind {
    Request,
    Response,
}

impl SchemaKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Request => "request",
            Self::Response => "response",
        }
    }
}

/// Build the JSON Schema for `kind`.
///
/// # Errors
///
/// Returns a `serde_json` error if the generated schema cannot be converted
/// to a JSON value.
pub fn json_schema(kind: SchemaKind) -> Result<serde_json::Value, serde_json::Error> {
    match kind {
        SchemaKind::Request => serde_json::to_value(schema_for!(InputRecord)),
        SchemaKind::Response => serde_json::to_value(schema_for!(PredictionResult)),
    }
}
