//! Draft record editing: turns raw strings into typed field updates.

use std::collections::BTreeSet;

use salp_config::NumericPolicy;
use salp_core::{CoreError, FieldId, InputRecord};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("{field} expects a number, got '{raw}'")]
    InvalidNumber { field: FieldId, raw: String },

    #[error("Unknown {field} option '{value}' (expected one of: {})", .allowed.join(", "))]
    UnknownOption {
        field: &'static str,
        value: String,
        allowed: Vec<&'static str>,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result of one accepted edit.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldUpdate {
    pub field: FieldId,
    /// The whole record with exactly `field` replaced.
    pub record: InputRecord,
    /// The raw input did not parse and `0` was stored instead.
    pub coerced: bool,
}

/// Editable copy of the owner's record.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    draft: InputRecord,
    policy: NumericPolicy,
    coerced: BTreeSet<FieldId>,
}

impl FormState {
    #[must_use]
    pub fn new(record: InputRecord, policy: NumericPolicy) -> Self {
        Self {
            draft: record,
            policy,
            coerced: BTreeSet::new(),
        }
    }

    #[must_use]
    pub const fn draft(&self) -> &InputRecord {
        &self.draft
    }

    #[must_use]
    pub fn is_coerced(&self, field: FieldId) -> bool {
        self.coerced.contains(&field)
    }

    /// Apply one raw edit.
    ///
    /// Numbers are parsed from the trimmed input. Categorical values must
    /// match a vocabulary literal exactly (surrounding whitespace aside).
    ///
    /// # Errors
    ///
    /// [`FormError::InvalidNumber`] under [`NumericPolicy::Reject`], or
    /// [`FormError::UnknownOption`] for a non-member. The draft is unchanged
    /// on error.
    pub fn update(&mut self, field: FieldId, raw: &str) -> Result<FieldUpdate, FormError> {
        let raw = raw.trim();
        let (record, coerced) = if field.is_numeric() {
            match raw.parse::<f64>().ok().filter(|value| value.is_finite()) {
                Some(value) => (self.draft.with_number(field, value)?, false),
                None => match self.policy {
                    NumericPolicy::Zero => (self.draft.with_number(field, 0.0)?, true),
                    NumericPolicy::Reject => {
                        return Err(FormError::InvalidNumber {
                            field,
                            raw: raw.to_string(),
                        });
                    }
                },
            }
        } else {
            let record = self.draft.with_choice(field, raw).map_err(|error| match error {
                CoreError::UnknownOption {
                    field,
                    value,
                    allowed,
                } => FormError::UnknownOption {
                    field,
                    value,
                    allowed,
                },
                other => FormError::Core(other),
            })?;
            (record, false)
        };

        if coerced {
            tracing::debug!(%field, raw, "numeric input did not parse; stored 0");
            self.coerced.insert(field);
        } else {
            self.coerced.remove(&field);
        }
        self.draft = record.clone();

        Ok(FieldUpdate {
            field,
            record,
            coerced,
        })
    }

    /// Replace the draft with the owner's canonical record.
    pub fn sync(&mut self, canonical: &InputRecord) {
        if &self.draft != canonical {
            self.draft = canonical.clone();
            self.coerced.clear();
        }
    }

    /// Back to the default record.
    pub fn reset(&mut self) {
        self.sync(&InputRecord::default());
    }

    /// The whole draft, unchanged.
    #[must_use]
    pub fn submit(&self) -> InputRecord {
        self.draft.clone()
    }
}
