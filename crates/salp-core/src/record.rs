//! The nine-field input record submitted for prediction.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize, Serializer};

use crate::descriptor::FieldId;
use crate::errors::CoreError;
use crate::vocab::{
    Education, MaritalStatus, Occupation, Race, Relationship, Vocabulary, Workclass,
};

/// Demographic and employment details sent to the prediction backend.
///
/// Categorical fields are closed enums, so a record can never carry a value
/// outside its vocabulary. Numeric bounds are checked by [`Self::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InputRecord {
    #[serde(serialize_with = "wire_number")]
    pub age: f64,
    pub workclass: Workclass,
    #[serde(serialize_with = "wire_number")]
    pub fnlwgt: f64,
    pub education: Education,
    #[serde(serialize_with = "wire_number")]
    pub education_num: f64,
    pub marital_status: MaritalStatus,
    pub occupation: Occupation,
    pub relationship: Relationship,
    pub race: Race,
}

impl Default for InputRecord {
    fn default() -> Self {
        Self {
            age: 35.0,
            workclass: Workclass::Private,
            fnlwgt: 180_000.0,
            education: Education::Bachelors,
            education_num: 13.0,
            marital_status: MaritalStatus::NeverMarried,
            occupation: Occupation::ProfSpecialty,
            relationship: Relationship::NotInFamily,
            race: Race::White,
        }
    }
}

/// Current value of one field, as shown in a form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Choice(&'static str),
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Choice(value) => f.write_str(value),
        }
    }
}

impl InputRecord {
    #[must_use]
    pub const fn get(&self, field: FieldId) -> FieldValue {
        match field {
            FieldId::Age => FieldValue::Number(self.age),
            FieldId::Fnlwgt => FieldValue::Number(self.fnlwgt),
            FieldId::EducationNum => FieldValue::Number(self.education_num),
            FieldId::Workclass => FieldValue::Choice(self.workclass.as_str()),
            FieldId::Education => FieldValue::Choice(self.education.as_str()),
            FieldId::MaritalStatus => FieldValue::Choice(self.marital_status.as_str()),
            FieldId::Occupation => FieldValue::Choice(self.occupation.as_str()),
            FieldId::Relationship => FieldValue::Choice(self.relationship.as_str()),
            FieldId::Race => FieldValue::Choice(self.race.as_str()),
        }
    }

    /// Copy of this record with one numeric field replaced.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::KindMismatch`] if `field` is categorical.
    pub fn with_number(&self, field: FieldId, value: f64) -> Result<Self, CoreError> {
        let mut next = self.clone();
        match field {
            FieldId::Age => next.age = value,
            FieldId::Fnlwgt => next.fnlwgt = value,
            FieldId::EducationNum => next.education_num = value,
            other => {
                return Err(CoreError::KindMismatch {
                    field: other.key(),
                    expected: "categorical",
                });
            }
        }
        Ok(next)
    }

    /// Copy of this record with one categorical field replaced by the
    /// vocabulary member whose literal is exactly `raw`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownOption`] if `raw` is not a member, or
    /// [`CoreError::KindMismatch`] if `field` is numeric.
    pub fn with_choice(&self, field: FieldId, raw: &str) -> Result<Self, CoreError> {
        let mut next = self.clone();
        match field {
            FieldId::Workclass => next.workclass = Workclass::parse_literal(raw)?,
            FieldId::Education => next.education = Education::parse_literal(raw)?,
            FieldId::MaritalStatus => next.marital_status = MaritalStatus::parse_literal(raw)?,
            FieldId::Occupation => next.occupation = Occupation::parse_literal(raw)?,
            FieldId::Relationship => next.relationship = Relationship::parse_literal(raw)?,
            FieldId::Race => next.race = Race::parse_literal(raw)?,
            other => {
                return Err(CoreError::KindMismatch {
                    field: other.key(),
                    expected: "numeric",
                });
            }
        }
        Ok(next)
    }

    /// Check every numeric field against its descriptor bounds.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] listing every violation.
    pub fn validate(&self) -> Result<(), CoreError> {
        let violations: Vec<String> = FieldId::ALL
            .into_iter()
            .filter_map(|field| match self.get(field) {
                FieldValue::Number(value) => field.descriptor().check_number(value),
                FieldValue::Choice(_) => None,
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(violations))
        }
    }
}

/// Whole numbers go on the wire as JSON integers (`35`, not `35.0`).
#[allow(clippy::float_cmp, clippy::cast_possible_truncation, clippy::trivially_copy_pass_by_ref)]
fn wire_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
