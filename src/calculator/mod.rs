//! Calculation module
//!
//! Pure formulas for BMI, BMI category, BMR and daily calorie needs.

pub mod body;
pub mod energy;

pub use body::{categorize, compute_bmi};
pub use energy::{
    activity_factor, compute_bmr, compute_bmr_for_label, compute_calories, DEFAULT_ACTIVITY_FACTOR,
};
