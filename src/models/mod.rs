//! Data models
//!
//! Request and result types for a single assessment.

mod assessment;

pub use assessment::{
    ActivityLevel, Assessment, AssessmentInput, BmiCategory, Gender, InputError,
    MAX_AGE, MIN_AGE, MIN_HEIGHT_CM, MIN_WEIGHT_KG,
};
