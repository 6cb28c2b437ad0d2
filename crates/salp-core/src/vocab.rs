//! Closed vocabularies for the six categorical input fields.
//!
//! Every vocabulary is a fieldless enum whose serde representation is the
//! exact literal the prediction backend expects (`"Self-emp-not-inc"`, `"?"`,
//! ...). Display labels are derived mechanically from the variant names and
//! built once, on first use, into an immutable ordered option list.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// One `(value, label)` pair offered by a categorical field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    /// Wire literal sent to the backend.
    pub value: &'static str,
    /// Human-readable label derived from the variant name.
    pub label: String,
}

/// Common surface of the generated vocabulary enums.
pub trait Vocabulary: Copy + Eq + fmt::Debug + 'static {
    /// Field key of the vocabulary on the wire (e.g. `maritalStatus`).
    const FIELD: &'static str;

    /// All members in declaration order.
    fn all() -> &'static [Self];

    /// Wire literal of this member.
    fn as_str(self) -> &'static str;

    /// Ordered `(value, label)` options, built once.
    fn options() -> &'static [ChoiceOption];

    /// Display label of this member.
    fn label(self) -> &'static str;

    /// Parse an exact wire literal.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownOption`] when `raw` is not a member.
    fn parse_literal(raw: &str) -> Result<Self, CoreError> {
        Self::all()
            .iter()
            .copied()
            .find(|member| member.as_str() == raw)
            .ok_or_else(|| CoreError::UnknownOption {
                field: Self::FIELD,
                value: raw.to_string(),
                allowed: Self::all().iter().map(|m| m.as_str()).collect(),
            })
    }
}

/// Insert a space before every inner capital: `SelfEmpNotInc` -> `Self Emp Not Inc`.
#[must_use]
pub fn humanize_identifier(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    for (index, ch) in ident.chars().enumerate() {
        if index > 0 && ch.is_ascii_uppercase() {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident ($field:literal) {
            $( $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $value, )+
                }
            }
        }

        impl Vocabulary for $name {
            const FIELD: &'static str = $field;

            fn all() -> &'static [Self] {
                &[$( Self::$variant ),+]
            }

            fn as_str(self) -> &'static str {
                $name::as_str(self)
            }

            fn options() -> &'static [ChoiceOption] {
                static OPTIONS: std::sync::LazyLock<Vec<ChoiceOption>> =
                    std::sync::LazyLock::new(|| {
                        [$( (stringify!($variant), $value) ),+]
                            .into_iter()
                            .map(|(ident, value)| ChoiceOption {
                                value,
                                label: humanize_identifier(ident),
                            })
                            .collect()
                    });
                &OPTIONS
            }

            fn label(self) -> &'static str {
                Self::options()[self as usize].label.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as Vocabulary>::parse_literal(s)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Workclass
// ---------------------------------------------------------------------------

vocabulary! {
    /// Employer class.
    Workclass ("workclass") {
        Private => "Private",
        SelfEmpNotInc => "Self-emp-not-inc",
        SelfEmpInc => "Self-emp-inc",
        FederalGov => "Federal-gov",
        LocalGov => "Local-gov",
        StateGov => "State-gov",
        WithoutPay => "Without-pay",
        NeverWorked => "Never-worked",
        Unknown => "?",
    }
}

// ---------------------------------------------------------------------------
// Education
// ---------------------------------------------------------------------------

vocabulary! {
    /// Highest education level reached.
    Education ("education") {
        Bachelors => "Bachelors",
        SomeCollege => "Some-college",
        Eleventh => "11th",
        HSGrad => "HS-grad",
        ProfSchool => "Prof-school",
        AssocAcdm => "Assoc-acdm",
        AssocVoc => "Assoc-voc",
        Ninth => "9th",
        SeventhEighth => "7th-8th",
        Twelfth => "12th",
        Masters => "Masters",
        FirstFourth => "1st-4th",
        Tenth => "10th",
        Doctorate => "Doctorate",
        FifthSixth => "5th-6th",
        Preschool => "Preschool",
    }
}

// ---------------------------------------------------------------------------
// MaritalStatus
// ---------------------------------------------------------------------------

vocabulary! {
    MaritalStatus ("maritalStatus") {
        MarriedCivSpouse => "Married-civ-spouse",
        Divorced => "Divorced",
        NeverMarried => "Never-married",
        Separated => "Separated",
        Widowed => "Widowed",
        MarriedSpouseAbsent => "Married-spouse-absent",
        MarriedAFSpouse => "Married-AF-spouse",
    }
}

// ---------------------------------------------------------------------------
// Occupation
// ---------------------------------------------------------------------------

vocabulary! {
    Occupation ("occupation") {
        TechSupport => "Tech-support",
        CraftRepair => "Craft-repair",
        OtherService => "Other-service",
        Sales => "Sales",
        ExecManagerial => "Exec-managerial",
        ProfSpecialty => "Prof-specialty",
        HandlersCleaners => "Handlers-cleaners",
        MachineOpInspct => "Machine-op-inspct",
        AdmClerical => "Adm-clerical",
        FarmingFishing => "Farming-fishing",
        TransportMoving => "Transport-moving",
        PrivHouseServ => "Priv-house-serv",
        ProtectiveServ => "Protective-serv",
        ArmedForces => "Armed-Forces",
        Unknown => "?",
    }
}

// ---------------------------------------------------------------------------
// Relationship
// ---------------------------------------------------------------------------

vocabulary! {
    /// Relationship to the household head.
    Relationship ("relationship") {
        Wife => "Wife",
        OwnChild => "Own-child",
        Husband => "Husband",
        NotInFamily => "Not-in-family",
        OtherRelative => "Other-relative",
        Unmarried => "Unmarried",
    }
}

// ---------------------------------------------------------------------------
// Race
// ---------------------------------------------------------------------------

vocabulary! {
    Race ("race") {
        White => "White",
        AsianPacIslander => "Asian-Pac-Islander",
        AmerIndianEskimo => "Amer-Indian-Eskimo",
        Other => "Other",
        Black => "Black",
    }
}
