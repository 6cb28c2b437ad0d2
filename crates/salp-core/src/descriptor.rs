//! Static field catalog: how each input field is labelled, rendered, and
//! constrained.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::Serialize;

use crate::errors::CoreError;
use crate::vocab::{
    ChoiceOption, Education, MaritalStatus, Occupation, Race, Relationship, Vocabulary, Workclass,
};

// ---------------------------------------------------------------------------
// FieldId
// ---------------------------------------------------------------------------

/// Identifier of one input field, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    Age,
    Workclass,
    Fnlwgt,
    Education,
    EducationNum,
    MaritalStatus,
    Occupation,
    Relationship,
    Race,
}

impl FieldId {
    pub const ALL: [Self; 9] = [
        Self::Age,
        Self::Workclass,
        Self::Fnlwgt,
        Self::Education,
        Self::EducationNum,
        Self::MaritalStatus,
        Self::Occupation,
        Self::Relationship,
        Self::Race,
    ];

    /// JSON key of the field in the request body.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Workclass => "workclass",
            Self::Fnlwgt => "fnlwgt",
            Self::Education => "education",
            Self::EducationNum => "educationNum",
            Self::MaritalStatus => "maritalStatus",
            Self::Occupation => "occupation",
            Self::Relationship => "relationship",
            Self::Race => "race",
        }
    }

    /// `snake_case` alias accepted on the command line.
    #[must_use]
    pub const fn snake_key(self) -> &'static str {
        match self {
            Self::EducationNum => "education_num",
            Self::MaritalStatus => "marital_status",
            other => other.key(),
        }
    }

    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Age | Self::Fnlwgt | Self::EducationNum)
    }

    /// 1-based position in the catalog.
    #[must_use]
    pub const fn position(self) -> usize {
        self as usize + 1
    }

    #[must_use]
    pub fn descriptor(self) -> &'static FieldDescriptor {
        &catalog()[self as usize]
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FieldId {
    type Err = CoreError;

    /// Accepts the wire key, the `snake_case` alias, or the 1-based position.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(position) = trimmed.parse::<usize>() {
            return position
                .checked_sub(1)
                .and_then(|index| Self::ALL.get(index).copied())
                .ok_or_else(|| CoreError::UnknownField(trimmed.to_string()));
        }
        Self::ALL
            .into_iter()
            .find(|id| id.key() == trimmed || id.snake_key() == trimmed)
            .ok_or_else(|| CoreError::UnknownField(trimmed.to_string()))
    }
}

// ---------------------------------------------------------------------------
// FieldDescriptor
// ---------------------------------------------------------------------------

/// Render kind of a field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    Numeric {
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        step: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        placeholder: Option<&'static str>,
    },
    Categorical {
        options: &'static [ChoiceOption],
    },
}

/// Static description of one input field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDescriptor {
    pub id: FieldId,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    /// Check a numeric value against this field's declared bounds and step.
    ///
    /// Values must lie on the step grid anchored at `min` (or `0`). A field
    /// without a declared step uses a step of `1`.
    ///
    /// Returns a human-readable violation, or `None` when the value is
    /// acceptable. Categorical descriptors never report a violation.
    #[must_use]
    pub fn check_number(&self, value: f64) -> Option<String> {
        let FieldKind::Numeric { min, max, step, .. } = &self.kind else {
            return None;
        };
        if !value.is_finite() {
            return Some(format!("{} must be a finite number", self.label));
        }
        if value < 0.0 {
            return Some(format!("{} must be non-negative (got {value})", self.label));
        }
        if let Some(min) = min.filter(|min| value < *min) {
            return Some(format!("{} must be at least {min} (got {value})", self.label));
        }
        if let Some(max) = max.filter(|max| value > *max) {
            return Some(format!("{} must be at most {max} (got {value})", self.label));
        }
        let base = min.unwrap_or(0.0);
        if (value - base) % step.unwrap_or(1.0) == 0.0 {
            return None;
        }
        Some(match step {
            None => format!("{} must be a whole number (got {value})", self.label),
            Some(step) => format!(
                "{} must be {base} plus a multiple of {step} (got {value})",
                self.label
            ),
        })
    }
}

const fn numeric(
    id: FieldId,
    label: &'static str,
    min: f64,
    max: f64,
    step: Option<f64>,
    placeholder: &'static str,
) -> FieldDescriptor {
    FieldDescriptor {
        id,
        label,
        kind: FieldKind::Numeric {
            min: Some(min),
            max: Some(max),
            step,
            placeholder: Some(placeholder),
        },
    }
}

fn categorical<V: Vocabulary>(id: FieldId, label: &'static str) -> FieldDescriptor {
    FieldDescriptor {
        id,
        label,
        kind: FieldKind::Categorical {
            options: V::options(),
        },
    }
}

static CATALOG: LazyLock<Vec<FieldDescriptor>> = LazyLock::new(|| {
    vec![
        numeric(FieldId::Age, "Age", 17.0, 90.0, None, "e.g., 35"),
        categorical::<Workclass>(FieldId::Workclass, "Work Class"),
        numeric(
            FieldId::Fnlwgt,
            "Final Weight (fnlwgt)",
            10_000.0,
            1_500_000.0,
            Some(1000.0),
            "e.g., 180000",
        ),
        categorical::<Education>(FieldId::Education, "Education Level"),
        numeric(
            FieldId::EducationNum,
            "Education (Years)",
            1.0,
            16.0,
            None,
            "e.g., 13",
        ),
        categorical::<MaritalStatus>(FieldId::MaritalStatus, "Marital Status"),
        categorical::<Occupation>(FieldId::Occupation, "Occupation"),
        categorical::<Relationship>(FieldId::Relationship, "Relationship"),
        categorical::<Race>(FieldId::Race, "Race"),
    ]
});

/// The ordered field catalog, one descriptor per [`FieldId`].
#[must_use]
pub fn catalog() -> &'static [FieldDescriptor] {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn catalog_is_indexed_by_field_id() {
        assert_eq!(catalog().len(), FieldId::ALL.len());
        for id in FieldId::ALL {
            assert_eq!(id.descriptor().id, id);
        }
    }

    #[test]
    fn numeric_flag_matches_descriptor_kind() {
        for descriptor in catalog() {
            let is_numeric = matches!(descriptor.kind, FieldKind::Numeric { .. });
            assert_eq!(descriptor.id.is_numeric(), is_numeric, "{}", descriptor.id);
        }
    }

    #[rstest]
    #[case("age", FieldId::Age)]
    #[case("educationNum", FieldId::EducationNum)]
    #[case("education_num", FieldId::EducationNum)]
    #[case("marital_status", FieldId::MaritalStatus)]
    #[case(" race ", FieldId::Race)]
    #[case("1", FieldId::Age)]
    #[case("9", FieldId::Race)]
    fn parses_field_ids(#[case] raw: &str, #[case] expected: FieldId) {
        assert_eq!(raw.parse::<FieldId>().unwrap(), expected);
    }

    #[rstest]
    #[case("0")]
    #[case("10")]
    #[case("salary")]
    #[case("Age")]
    fn rejects_unknown_field_ids(#[case] raw: &str) {
        assert!(matches!(
            raw.parse::<FieldId>(),
            Err(CoreError::UnknownField(_))
        ));
    }

    #[test]
    fn fnlwgt_declares_step() {
        let FieldKind::Numeric { step, placeholder, .. } = &FieldId::Fnlwgt.descriptor().kind
        else {
            panic!("fnlwgt should be numeric");
        };
        assert_eq!(*step, Some(1000.0));
        assert_eq!(*placeholder, Some("e.g., 180000"));
    }

    #[test]
    fn categorical_descriptor_carries_vocabulary() {
        let FieldKind::Categorical { options } = &FieldId::Race.descriptor().kind else {
            panic!("race should be categorical");
        };
        let values: Vec<&str> = options.iter().map(|o| o.value).collect();
        assert_eq!(
            values,
            vec!["White", "Asian-Pac-Islander", "Amer-Indian-Eskimo", "Other", "Black"]
        );
    }

    #[rstest]
    #[case(FieldId::Age, 35.0, true)]
    #[case(FieldId::Age, 16.0, false)]
    #[case(FieldId::Age, 91.0, false)]
    #[case(FieldId::EducationNum, 0.0, false)]
    #[case(FieldId::EducationNum, 16.0, true)]
    #[case(FieldId::Fnlwgt, -5.0, false)]
    #[case(FieldId::Fnlwgt, f64::NAN, false)]
    #[case(FieldId::Age, 35.5, false)]
    #[case(FieldId::EducationNum, 12.25, false)]
    #[case(FieldId::Fnlwgt, 180_000.0, true)]
    #[case(FieldId::Fnlwgt, 10_000.0, true)]
    #[case(FieldId::Fnlwgt, 77_516.0, false)]
    #[case(FieldId::Fnlwgt, 10_500.0, false)]
    fn checks_numeric_bounds(#[case] id: FieldId, #[case] value: f64, #[case] ok: bool) {
        assert_eq!(id.descriptor().check_number(value).is_none(), ok);
    }

    #[test]
    fn step_violations_explain_the_grid() {
        assert_eq!(
            FieldId::Age.descriptor().check_number(35.5).as_deref(),
            Some("Age must be a whole number (got 35.5)")
        );
        assert_eq!(
            FieldId::Fnlwgt.descriptor().check_number(77_516.0).as_deref(),
            Some("Final Weight (fnlwgt) must be 10000 plus a multiple of 1000 (got 77516)")
        );
    }

    #[test]
    fn serializes_descriptor_for_output() {
        let json = serde_json::to_value(FieldId::Age.descriptor()).unwrap();
        assert_eq!(json["id"], "age");
        assert_eq!(json["kind"]["type"], "numeric");
        assert_eq!(json["kind"]["min"], 17.0);
        assert!(json["kind"].get("step").is_none());
    }
}
