//! Energy expenditure
//!
//! Basal metabolic rate (Mifflin-St Jeor) and activity-adjusted calorie needs.

use crate::models::{ActivityLevel, Gender};

/// Factor used when an activity level label is not recognized
pub const DEFAULT_ACTIVITY_FACTOR: f64 = 1.2;

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn compute_bmr(weight_kg: f64, height_cm: f64, age_years: u32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// BMR for a free-text gender. Anything other than "male" uses the female formula.
pub fn compute_bmr_for_label(weight_kg: f64, height_cm: f64, age_years: u32, gender: &str) -> f64 {
    compute_bmr(weight_kg, height_cm, age_years, Gender::from_label(gender))
}

/// Activity factor for a label, falling back to [`DEFAULT_ACTIVITY_FACTOR`]
pub fn activity_factor(activity_level: &str) -> f64 {
    ActivityLevel::from_label(activity_level)
        .map(|level| level.factor())
        .unwrap_or(DEFAULT_ACTIVITY_FACTOR)
}

/// Daily calorie needs: BMR × activity factor
pub fn compute_calories(bmr: f64, activity_level: &str) -> f64 {
    bmr * activity_factor(activity_level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bmr_male() {
        // 700 + 1093.75 - 150 + 5
        assert_eq!(compute_bmr(70.0, 175.0, 30, Gender::Male), 1648.75);
    }

    #[test]
    fn test_bmr_female() {
        // 600 + 1031.25 - 125 - 161
        assert_eq!(compute_bmr(60.0, 165.0, 25, Gender::Female), 1345.25);
    }

    #[test]
    fn test_bmr_for_label() {
        assert_eq!(compute_bmr_for_label(70.0, 175.0, 30, "male"), 1648.75);
        assert_eq!(compute_bmr_for_label(70.0, 175.0, 30, "Male"), 1648.75);
        assert_eq!(compute_bmr_for_label(60.0, 165.0, 25, "female"), 1345.25);
        // Unrecognized values take the female branch
        assert_eq!(
            compute_bmr_for_label(70.0, 175.0, 30, "other"),
            compute_bmr(70.0, 175.0, 30, Gender::Female)
        );
    }

    #[test]
    fn test_calories_sedentary() {
        assert_eq!(compute_calories(1673.75, "Sedentary"), 2008.5);
    }

    #[test]
    fn test_calories_each_level() {
        let bmr = 1500.0;
        assert_eq!(compute_calories(bmr, "Sedentary"), bmr * 1.2);
        assert_eq!(compute_calories(bmr, "Lightly active"), bmr * 1.375);
        assert_eq!(compute_calories(bmr, "Moderately active"), bmr * 1.55);
        assert_eq!(compute_calories(bmr, "Very active"), bmr * 1.725);
        assert_eq!(compute_calories(bmr, "Super active"), bmr * 1.9);
    }

    #[test]
    fn test_calories_unknown_level_uses_default() {
        assert_eq!(activity_factor("unknown-level"), DEFAULT_ACTIVITY_FACTOR);
        assert_eq!(compute_calories(1234.5, "unknown-level"), 1234.5 * 1.2);
        assert_eq!(compute_calories(1234.5, ""), 1234.5 * 1.2);
    }

    #[test]
    fn test_calories_ids_are_not_labels() {
        assert_eq!(compute_calories(1000.0, "lightly_active"), 1000.0 * 1.2);
        assert_eq!(compute_calories(1000.0, "super_active"), 1000.0 * 1.2);
        assert_eq!(compute_calories(1000.0, "sedentary"), 1000.0 * 1.2);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_male_bmr_exceeds_female_by_166(
            weight in 1.0f64..300.0,
            height in 1.0f64..250.0,
            age in 1u32..=120,
        ) {
            let diff = compute_bmr(weight, height, age, Gender::Male)
                - compute_bmr(weight, height, age, Gender::Female);
            prop_assert!((diff - 166.0).abs() < 1e-9);
        }

        #[test]
        fn prop_unknown_level_is_sedentary(bmr in 0.0f64..5000.0, label in "[a-z ]{0,12}x") {
            prop_assert_eq!(compute_calories(bmr, &label), bmr * 1.2);
        }
    }
}
