//! The eight clinical measurements the engine understands.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One clinical input. Variant order is the declaration order used for
/// iteration and for indexing fixed-size feature arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Pregnancies,
    Glucose,
    BloodPressure,
    SkinThickness,
    Insulin,
    Bmi,
    DiabetesPedigree,
    Age,
}

impl Feature {
    pub const COUNT: usize = 8;

    pub const ALL: [Feature; Feature::COUNT] = [
        Feature::Pregnancies,
        Feature::Glucose,
        Feature::BloodPressure,
        Feature::SkinThickness,
        Feature::Insulin,
        Feature::Bmi,
        Feature::DiabetesPedigree,
        Feature::Age,
    ];

    /// Position of this feature in [`Feature::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Wire name, as it appears in request payloads and config files.
    pub const fn key(self) -> &'static str {
        match self {
            Feature::Pregnancies => "pregnancies",
            Feature::Glucose => "glucose",
            Feature::BloodPressure => "blood_pressure",
            Feature::SkinThickness => "skin_thickness",
            Feature::Insulin => "insulin",
            Feature::Bmi => "bmi",
            Feature::DiabetesPedigree => "diabetes_pedigree",
            Feature::Age => "age",
        }
    }

    /// Human-readable label: underscores become spaces and the first letter
    /// is upper-cased ("blood_pressure" -> "Blood pressure").
    pub fn display_name(self) -> String {
        humanize_key(self.key())
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

pub fn humanize_key(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
