//! Pure BMI computation engine.
//!
//! Every function here is a pure, total function over its documented
//! domain: strictly positive, finite weight and height. Callers are
//! responsible for validating input first (see `service::validate`); the
//! engine does not re-check.

use crate::{BmiCategory, UnitSystem};

/// Compute the Body Mass Index for a measurement
///
/// Metric: weight in kg, height in cm — `w / (h/100)^2`.
/// Imperial: weight in lbs, height in inches — `703 * w / h^2`.
pub fn compute_bmi(weight: f64, height: f64, units: UnitSystem) -> f64 {
    match units {
        UnitSystem::Metric => weight / (height / 100.0).powi(2),
        UnitSystem::Imperial => 703.0 * weight / height.powi(2),
    }
}

/// Classify a full-precision BMI into its bucket
///
/// Boundaries are half-open on the lower bound: exactly 18.5 is Normal,
/// exactly 25 is Overweight, exactly 30 is Obese. Always pass the
/// unrounded BMI; rounding first can misclassify values near a boundary.
pub fn categorize(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Reference weight for a medium frame, at a target BMI of 22
///
/// Depends only on height. The result is always kilograms, even for
/// imperial input heights.
pub fn ideal_weight(height: f64, units: UnitSystem) -> f64 {
    let meters = match units {
        UnitSystem::Metric => height / 100.0,
        UnitSystem::Imperial => height * 0.0254,
    };
    22.0 * meters.powi(2)
}

/// Health-risk text for the bucket the BMI falls in
///
/// The strings are user-facing and must stay stable; end-to-end tests
/// assert on them.
pub fn health_risks(bmi: f64) -> &'static str {
    match categorize(bmi) {
        BmiCategory::Underweight => {
            "Your BMI indicates that you are underweight. Health risks may include malnutrition and weakened immune system."
        }
        BmiCategory::Normal => {
            "Your BMI indicates that you are within a healthy weight range. Keep up the good work!"
        }
        BmiCategory::Overweight => {
            "Your BMI indicates that you are overweight. Health risks may include high blood pressure, heart disease, and type 2 diabetes."
        }
        BmiCategory::Obese => {
            "Your BMI indicates that you are obese. Health risks may include coronary artery disease, stroke, and sleep apnea."
        }
    }
}

/// Guidance text for the bucket the BMI falls in
///
/// Same stability requirement as [`health_risks`].
pub fn suggestion(bmi: f64) -> &'static str {
    match categorize(bmi) {
        BmiCategory::Underweight => {
            "Consider consulting with a healthcare professional to ensure you are getting adequate nutrition."
        }
        BmiCategory::Normal => {
            "Continue maintaining a balanced diet and regular exercise routine to stay within a healthy weight range."
        }
        BmiCategory::Overweight => {
            "Focus on adopting healthier eating habits and increasing physical activity to manage your weight."
        }
        BmiCategory::Obese => {
            "It's important to seek medical advice and develop a comprehensive plan to address your weight and overall health."
        }
    }
}
