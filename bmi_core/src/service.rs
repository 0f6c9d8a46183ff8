//! Request-handling logic shared by every boundary.
//!
//! Validation, engine invocation, log append, and result shaping live here
//! so transport adapters stay thin. The log store is injected through the
//! [`LogStore`] trait; nothing in this module touches the filesystem
//! directly.

use crate::{
    engine, BmiReport, Error, LogRecord, LogStore, Measurement, Result, SaveOutcome, UnitSystem,
};
use chrono::{DateTime, Utc};

/// Fixed user-facing message for rejected input
pub const VALIDATION_MESSAGE: &str = "Please provide valid weight and height values.";

/// Result bundle for one calculation request
#[derive(Clone, Debug)]
pub struct Calculation {
    pub report: BmiReport,
    pub save: SaveOutcome,
}

/// Validate raw weight/height input and build a measurement
///
/// Both values must be present, finite, and strictly positive. Rejected
/// input gets the fixed user-facing message, and neither the engine nor
/// the store is touched for it.
pub fn validate(weight: Option<f64>, height: Option<f64>, units: UnitSystem) -> Result<Measurement> {
    match (weight, height) {
        (Some(w), Some(h)) if w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0 => {
            Ok(Measurement {
                weight: w,
                height: h,
                units,
            })
        }
        _ => Err(Error::Validation(VALIDATION_MESSAGE.to_string())),
    }
}

/// Compute the full report for a validated measurement and log it
///
/// Infallible for validated input: the computation always succeeds, and a
/// failed append is captured in the returned [`SaveOutcome`] instead of
/// propagating. `now` is injected so callers control timestamps.
pub fn calculate(
    measurement: Measurement,
    store: &mut dyn LogStore,
    now: DateTime<Utc>,
) -> Calculation {
    let bmi = engine::compute_bmi(measurement.weight, measurement.height, measurement.units);

    let report = BmiReport {
        bmi,
        category: engine::categorize(bmi),
        ideal_weight_kg: engine::ideal_weight(measurement.height, measurement.units),
        health_risks: engine::health_risks(bmi),
        suggestion: engine::suggestion(bmi),
    };

    let record = LogRecord {
        recorded_at: now,
        weight: measurement.weight,
        height: measurement.height,
        units: measurement.units,
        bmi,
    };

    let save = match store.append(&record) {
        Ok(()) => SaveOutcome {
            success: true,
            message: format!("Data saved successfully to {}", store.describe()),
        },
        Err(e) => {
            tracing::warn!("Failed to append calculation to log: {}", e);
            SaveOutcome {
                success: false,
                message: format!("Failed to save data to file: {}", e),
            }
        }
    };

    Calculation { report, save }
}

/// All logged lines, newest first
///
/// Absent storage reads as empty; any other store failure propagates for
/// the boundary to wrap as a server error.
pub fn history(store: &dyn LogStore) -> Result<Vec<String>> {
    store.read_all()
}
