//! Assessment model
//!
//! The biometric request submitted by a user and the derived assessment built from it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculator;

/// Widget minimums carried over from the input form
pub const MIN_AGE: u32 = 1;
pub const MAX_AGE: u32 = 120;
pub const MIN_WEIGHT_KG: f64 = 1.0;
pub const MIN_HEIGHT_CM: f64 = 1.0;

/// Gender, used only to select the BMR formula branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Resolve a free-text gender.
    ///
    /// Only a case-insensitive "male" selects `Male`. Every other value,
    /// including typos and surrounding whitespace, falls into `Female`.
    pub fn from_label(s: &str) -> Self {
        if s.to_lowercase() == "male" {
            Gender::Male
        } else {
            Gender::Female
        }
    }

    /// Whether the label names a gender rather than falling through to `Female`
    pub fn is_recognized(s: &str) -> bool {
        matches!(s.to_lowercase().as_str(), "male" | "female")
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// Self-reported activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    #[default]
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    SuperActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::SuperActive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly_active",
            ActivityLevel::ModeratelyActive => "moderately_active",
            ActivityLevel::VeryActive => "very_active",
            ActivityLevel::SuperActive => "super_active",
        }
    }

    /// Label shown on the form and printed in reports
    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly active",
            ActivityLevel::ModeratelyActive => "Moderately active",
            ActivityLevel::VeryActive => "Very active",
            ActivityLevel::SuperActive => "Super active",
        }
    }

    /// Exact display label only; anything else is unrecognized
    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.display_name() == s)
    }

    /// Lookup by snake_case identifier
    pub fn from_id(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == s)
    }

    /// Multiplier applied to BMR to estimate daily energy expenditure
    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::SuperActive => 1.9,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::LightlyActive => "Light exercise 1-3 days/week",
            ActivityLevel::ModeratelyActive => "Moderate exercise 3-5 days/week",
            ActivityLevel::VeryActive => "Hard exercise 6-7 days/week",
            ActivityLevel::SuperActive => "Very hard exercise or physical job",
        }
    }
}

/// BMI band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// Half-open BMI range `[low, high)` covered by this band
    pub fn range(&self) -> (f64, f64) {
        match self {
            BmiCategory::Underweight => (0.0, 18.5),
            BmiCategory::Normal => (18.5, 25.0),
            BmiCategory::Overweight => (25.0, 30.0),
            BmiCategory::Obese => (30.0, f64::INFINITY),
        }
    }
}

/// Input rejected by the range checks
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("Age must be between 1 and 120 years, got {0}")]
    AgeOutOfRange(u32),

    #[error("Weight must be at least 1.0 kg, got {0}")]
    WeightTooLow(f64),

    #[error("Height must be at least 1.0 cm, got {0}")]
    HeightTooLow(f64),

    #[error("{0} must be a finite number")]
    NotFinite(&'static str),
}

/// One form submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentInput {
    pub age: u32,
    pub gender: String,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity_level: String,
}

impl AssessmentInput {
    /// Enforce the numeric minimums. Gender and activity level are not checked.
    pub fn validate(&self) -> Result<(), InputError> {
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(InputError::AgeOutOfRange(self.age));
        }
        if !self.weight_kg.is_finite() {
            return Err(InputError::NotFinite("Weight"));
        }
        if !self.height_cm.is_finite() {
            return Err(InputError::NotFinite("Height"));
        }
        if self.weight_kg < MIN_WEIGHT_KG {
            return Err(InputError::WeightTooLow(self.weight_kg));
        }
        if self.height_cm < MIN_HEIGHT_CM {
            return Err(InputError::HeightTooLow(self.height_cm));
        }
        Ok(())
    }
}

/// A computed assessment. Built once per submission and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub age: u32,
    pub gender: Gender,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity_level: ActivityLevel,
    pub bmi: f64,
    pub category: BmiCategory,
    pub bmr: f64,
    pub calories: f64,
}

impl Assessment {
    /// Validate the input and run every calculation on it
    pub fn from_input(input: &AssessmentInput) -> Result<Self, InputError> {
        input.validate()?;

        let gender = Gender::from_label(&input.gender);
        if !Gender::is_recognized(&input.gender) {
            tracing::warn!(gender = %input.gender, "Unrecognized gender, using female BMR formula");
        }

        let activity_level = ActivityLevel::from_label(&input.activity_level).unwrap_or_else(|| {
            tracing::warn!(
                activity_level = %input.activity_level,
                "Unrecognized activity level, using default factor {}",
                calculator::DEFAULT_ACTIVITY_FACTOR
            );
            ActivityLevel::default()
        });

        let bmi = calculator::compute_bmi(input.weight_kg, input.height_cm);
        let bmr = calculator::compute_bmr(input.weight_kg, input.height_cm, input.age, gender);
        let calories = calculator::compute_calories(bmr, &input.activity_level);

        tracing::debug!(bmi, bmr, calories, "Assessment computed");

        Ok(Self {
            age: input.age,
            gender,
            weight_kg: input.weight_kg,
            height_cm: input.height_cm,
            activity_level,
            bmi,
            category: calculator::categorize(bmi),
            bmr,
            calories,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> AssessmentInput {
        AssessmentInput {
            age: 30,
            gender: "Male".to_string(),
            weight_kg: 70.0,
            height_cm: 175.0,
            activity_level: "Sedentary".to_string(),
        }
    }

    #[test]
    fn test_gender_from_label() {
        assert_eq!(Gender::from_label("male"), Gender::Male);
        assert_eq!(Gender::from_label("MALE"), Gender::Male);
        assert_eq!(Gender::from_label("Female"), Gender::Female);
        // Anything that is not "male" takes the female branch
        assert_eq!(Gender::from_label("m"), Gender::Female);
        assert_eq!(Gender::from_label(" male"), Gender::Female);
        assert_eq!(Gender::from_label(""), Gender::Female);
    }

    #[test]
    fn test_activity_level_from_label() {
        assert_eq!(ActivityLevel::from_label("Sedentary"), Some(ActivityLevel::Sedentary));
        assert_eq!(ActivityLevel::from_label("Lightly active"), Some(ActivityLevel::LightlyActive));
        assert_eq!(ActivityLevel::from_label("Moderately active"), Some(ActivityLevel::ModeratelyActive));
        assert_eq!(ActivityLevel::from_label("moderately_active"), None);
        assert_eq!(ActivityLevel::from_label("Super active"), Some(ActivityLevel::SuperActive));
        assert_eq!(ActivityLevel::from_label("very active"), None);
        assert_eq!(ActivityLevel::from_label("unknown-level"), None);
    }

    #[test]
    fn test_activity_level_from_id() {
        assert_eq!(ActivityLevel::from_id("lightly_active"), Some(ActivityLevel::LightlyActive));
        assert_eq!(ActivityLevel::from_id("super_active"), Some(ActivityLevel::SuperActive));
        assert_eq!(ActivityLevel::from_id("Super active"), None);
    }

    #[test]
    fn test_gender_recognition_matches_resolution() {
        for label in ["male", "Male", "FEMALE", "FeMale"] {
            assert!(Gender::is_recognized(label));
        }
        for label in ["femme", " female", "m", ""] {
            assert!(!Gender::is_recognized(label));
            assert_eq!(Gender::from_label(label), Gender::Female);
        }
    }

    #[test]
    fn test_activity_factors() {
        let factors: Vec<f64> = ActivityLevel::ALL.iter().map(|l| l.factor()).collect();
        assert_eq!(factors, vec![1.2, 1.375, 1.55, 1.725, 1.9]);
    }

    #[test]
    fn test_validate_ranges() {
        assert!(sample_input().validate().is_ok());

        let mut input = sample_input();
        input.age = 0;
        assert_eq!(input.validate(), Err(InputError::AgeOutOfRange(0)));
        input.age = 121;
        assert_eq!(input.validate(), Err(InputError::AgeOutOfRange(121)));

        let mut input = sample_input();
        input.weight_kg = 0.5;
        assert_eq!(input.validate(), Err(InputError::WeightTooLow(0.5)));

        let mut input = sample_input();
        input.height_cm = 0.0;
        assert_eq!(input.validate(), Err(InputError::HeightTooLow(0.0)));

        let mut input = sample_input();
        input.height_cm = f64::NAN;
        assert_eq!(input.validate(), Err(InputError::NotFinite("Height")));
    }

    #[test]
    fn test_validate_accepts_minimums() {
        let input = AssessmentInput {
            age: 1,
            gender: "Female".to_string(),
            weight_kg: 1.0,
            height_cm: 1.0,
            activity_level: "Sedentary".to_string(),
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_assessment_from_input() {
        let a = Assessment::from_input(&sample_input()).unwrap();
        assert_eq!(a.gender, Gender::Male);
        assert_eq!(a.activity_level, ActivityLevel::Sedentary);
        assert!((a.bmi - 22.857142857142858).abs() < 1e-9);
        assert_eq!(a.category, BmiCategory::Normal);
        assert_eq!(a.bmr, 1648.75);
        assert!((a.calories - 1978.5).abs() < 1e-9);
    }

    #[test]
    fn test_assessment_unknown_activity_level() {
        let mut input = sample_input();
        input.activity_level = "Couch potato".to_string();
        let a = Assessment::from_input(&input).unwrap();
        assert_eq!(a.activity_level, ActivityLevel::Sedentary);
        assert_eq!(a.calories, a.bmr * 1.2);
    }

    #[test]
    fn test_assessment_rejects_invalid_input() {
        let mut input = sample_input();
        input.weight_kg = 0.0;
        assert!(Assessment::from_input(&input).is_err());
    }
}
