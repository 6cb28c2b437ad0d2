//! Rule-based scoring used by the development backend.

use salp_core::vocab::{MaritalStatus, Occupation};
use salp_core::{InputRecord, PredictionResult, SalaryCategory};

/// Points at which a record is classified as `>50K`.
pub const HIGH_INCOME_THRESHOLD: u32 = 5;

const HIGHER_PAYING_OCCUPATIONS: [Occupation; 3] = [
    Occupation::ExecManagerial,
    Occupation::ProfSpecialty,
    Occupation::TechSupport,
];

/// Which scoring rules a record satisfied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Factors {
    pub higher_education: bool,
    pub higher_paying_occupation: bool,
    pub prime_age: bool,
    pub married_civ_spouse: bool,
}

impl Factors {
    #[must_use]
    pub fn of(record: &InputRecord) -> Self {
        Self {
            higher_education: record.education_num >= 13.0,
            higher_paying_occupation: HIGHER_PAYING_OCCUPATIONS.contains(&record.occupation),
            prime_age: (30.0..=55.0).contains(&record.age),
            married_civ_spouse: record.marital_status == MaritalStatus::MarriedCivSpouse,
        }
    }

    #[must_use]
    pub const fn points(self) -> u32 {
        let mut points = 0;
        if self.higher_education {
            points += 3;
        }
        if self.prime_age {
            points += 2;
        }
        if self.higher_paying_occupation {
            points += 3;
        }
        if self.married_civ_spouse {
            points += 1;
        }
        points
    }

    /// Names of the satisfied rules, in explanation order.
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        [
            (self.higher_education, "education level"),
            (self.higher_paying_occupation, "occupation"),
            (self.prime_age, "age"),
            (self.married_civ_spouse, "marital status"),
        ]
        .into_iter()
        .filter_map(|(hit, name)| hit.then_some(name))
        .collect()
    }
}

/// Confidence percentage for a point total, from 75 (no points) to 95 (all).
#[must_use]
pub const fn confidence(points: u32) -> u32 {
    75 + points * 20 / 9
}

/// Score a record. Deterministic: equal records always get equal results.
#[must_use]
pub fn score(record: &InputRecord) -> PredictionResult {
    let factors = Factors::of(record);
    let points = factors.points();

    let salary_category = if points >= HIGH_INCOME_THRESHOLD {
        SalaryCategory::AboveThreshold
    } else {
        SalaryCategory::AtOrBelowThreshold
    };

    let names = factors.names();
    let basis = if names.is_empty() {
        "available features".to_string()
    } else {
        names.join(", ")
    };

    PredictionResult {
        salary_category,
        explanation: format!(
            "Prediction made with {}% confidence based on: {basis}",
            confidence(points)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn default_record_scores_high() {
        let result = score(&InputRecord::default());
        assert_eq!(result.salary_category, SalaryCategory::AboveThreshold);
        assert_eq!(
            result.explanation,
            "Prediction made with 92% confidence based on: education level, occupation, age"
        );
    }

    #[test]
    fn no_factors_falls_back_to_available_features() {
        let record = InputRecord {
            age: 20.0,
            education_num: 9.0,
            occupation: Occupation::Sales,
            ..InputRecord::default()
        };
        let result = score(&record);
        assert_eq!(result.salary_category, SalaryCategory::AtOrBelowThreshold);
        assert_eq!(
            result.explanation,
            "Prediction made with 75% confidence based on: available features"
        );
    }

    #[rstest]
    #[case(0, 75)]
    #[case(1, 77)]
    #[case(5, 86)]
    #[case(9, 95)]
    fn confidence_scales_with_points(#[case] points: u32, #[case] expected: u32) {
        assert_eq!(confidence(points), expected);
    }

    #[rstest]
    #[case(29.0, false)]
    #[case(30.0, true)]
    #[case(55.0, true)]
    #[case(55.5, false)]
    fn prime_age_bounds_are_inclusive(#[case] age: f64, #[case] expected: bool) {
        let record = InputRecord {
            age,
            ..InputRecord::default()
        };
        assert_eq!(Factors::of(&record).prime_age, expected);
    }

    #[test]
    fn threshold_is_five_points() {
        // education (3) + age (2)
        let record = InputRecord {
            occupation: Occupation::Sales,
            ..InputRecord::default()
        };
        assert_eq!(Factors::of(&record).points(), 5);
        assert_eq!(score(&record).salary_category, SalaryCategory::AboveThreshold);

        // occupation (3) + marriage (1)
        let record = InputRecord {
            age: 22.0,
            education_num: 10.0,
            marital_status: MaritalStatus::MarriedCivSpouse,
            ..InputRecord::default()
        };
        assert_eq!(Factors::of(&record).points(), 4);
        assert_eq!(score(&record).salary_category, SalaryCategory::AtOrBelowThreshold);
    }

    #[test]
    fn scoring_is_deterministic() {
        let record = InputRecord::default();
        assert_eq!(score(&record), score(&record));
    }
}
