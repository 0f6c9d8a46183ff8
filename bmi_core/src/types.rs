//! Core domain types for the BMI service.
//!
//! This module defines the fundamental types used throughout the system:
//! - Unit systems and measurements
//! - BMI categories and computed reports
//! - Log records and persistence outcomes

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Measurement Types
// ============================================================================

/// Input convention for weight and height values
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    /// Kilograms and centimeters
    Metric,
    /// Pounds and inches
    Imperial,
}

impl UnitSystem {
    /// Unit label for weights in this system
    pub fn weight_unit(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "kg",
            UnitSystem::Imperial => "lbs",
        }
    }

    /// Unit label for heights in this system
    pub fn height_unit(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "cm",
            UnitSystem::Imperial => "in",
        }
    }
}

/// A validated weight/height pair
///
/// Constructed through `service::validate`; both values are strictly
/// positive and finite by the time one of these exists.
#[derive(Clone, Copy, Debug)]
pub struct Measurement {
    pub weight: f64,
    pub height: f64,
    pub units: UnitSystem,
}

// ============================================================================
// Report Types
// ============================================================================

/// BMI classification buckets
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // User-facing labels; asserted on in end-to-end tests
        let label = match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obesity",
        };
        f.write_str(label)
    }
}

/// Full result bundle for one computation
///
/// `bmi` and `ideal_weight_kg` carry full precision. Rounding happens only
/// at the display boundary so categorization never sees a rounded value.
#[derive(Clone, Debug)]
pub struct BmiReport {
    pub bmi: f64,
    pub category: BmiCategory,
    /// Always kilograms, regardless of the input unit system
    pub ideal_weight_kg: f64,
    pub health_risks: &'static str,
    pub suggestion: &'static str,
}

// ============================================================================
// Log Types
// ============================================================================

/// Outcome of attempting to persist a log record
///
/// Append failures are reported through this value rather than failing the
/// computation that produced the record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SaveOutcome {
    pub success: bool,
    pub message: String,
}

/// One immutable, timestamped record of a single computation
#[derive(Clone, Debug)]
pub struct LogRecord {
    pub recorded_at: DateTime<Utc>,
    pub weight: f64,
    pub height: f64,
    pub units: UnitSystem,
    pub bmi: f64,
}

impl LogRecord {
    /// Render the record as one log line, without the trailing newline
    ///
    /// Format: `<rfc3339> - Weight: <2dp> <unit>, Height: <2dp> <unit>, BMI: <2dp>`
    pub fn to_line(&self) -> String {
        format!(
            "{} - Weight: {:.2} {}, Height: {:.2} {}, BMI: {:.2}",
            self.recorded_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.weight,
            self.units.weight_unit(),
            self.height,
            self.units.height_unit(),
            self.bmi,
        )
    }
}
