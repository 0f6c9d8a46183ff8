//! HTTP routes for the BMI service.
//!
//! Handlers are thin adapters: parse the request, call into `bmi_core`,
//! and map the outcome onto the wire contract. All domain decisions live
//! in the core crate.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use bmi_core::{service, LogStore, SaveOutcome, UnitSystem};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

/// Generic message for unexpected calculation failures
const CALCULATE_ERROR_MESSAGE: &str = "Server error occurred while calculating BMI.";

/// Generic message for history read failures
const HISTORY_ERROR_MESSAGE: &str = "Error reading BMI history.";

/// Shared handler state: the injected log store
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<Box<dyn LogStore + Send>>>,
}

impl AppState {
    pub fn new(store: impl LogStore + Send + 'static) -> Self {
        Self {
            store: Arc::new(Mutex::new(Box::new(store))),
        }
    }
}

/// Build the service router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/calculate-bmi", post(calculate_bmi))
        .route("/bmi-history", get(bmi_history))
        .with_state(state)
}

/// `POST /calculate-bmi` request body
///
/// Fields stay optional so presence is checked by validation rather than
/// by the deserializer; a missing `isMetric` reads as imperial input.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalculateRequest {
    #[serde(default)]
    weight: Option<f64>,
    #[serde(default)]
    height: Option<f64>,
    #[serde(default)]
    is_metric: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportBody {
    bmi: f64,
    category: String,
    ideal_weight: f64,
    health_risks: String,
    suggestion: String,
    save_result: SaveOutcome,
}

#[derive(Debug, Serialize)]
struct CalculateResponse {
    success: bool,
    data: ReportBody,
}

#[derive(Debug, Serialize)]
struct HistoryResponse {
    success: bool,
    history: Vec<String>,
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
}

/// Boundary error mapped onto the wire contract
#[derive(Debug)]
enum ApiError {
    /// HTTP 400 with the fixed validation message
    Validation(String),
    /// HTTP 500 with a generic message; detail stays in server logs
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (
            status,
            Json(ErrorBody {
                success: false,
                message,
            }),
        )
            .into_response()
    }
}

/// Round for display only; categorization upstream used full precision
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `POST /calculate-bmi`
async fn calculate_bmi(
    State(state): State<AppState>,
    body: Result<Json<CalculateRequest>, JsonRejection>,
) -> Result<Json<CalculateResponse>, ApiError> {
    // Malformed bodies (bad JSON, non-numeric fields) get the same fixed
    // message as missing or non-positive values
    let Json(request) = body.map_err(|rejection| {
        tracing::debug!("Rejected calculate-bmi body: {}", rejection);
        ApiError::Validation(service::VALIDATION_MESSAGE.to_string())
    })?;

    let units = if request.is_metric {
        UnitSystem::Metric
    } else {
        UnitSystem::Imperial
    };

    let measurement = service::validate(request.weight, request.height, units)
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let mut store = state.store.lock().map_err(|_| {
        tracing::error!("Log store mutex poisoned");
        ApiError::Internal(CALCULATE_ERROR_MESSAGE.to_string())
    })?;

    let outcome = service::calculate(measurement, store.as_mut(), chrono::Utc::now());

    Ok(Json(CalculateResponse {
        success: true,
        data: ReportBody {
            bmi: round1(outcome.report.bmi),
            category: outcome.report.category.to_string(),
            ideal_weight: round1(outcome.report.ideal_weight_kg),
            health_risks: outcome.report.health_risks.to_string(),
            suggestion: outcome.report.suggestion.to_string(),
            save_result: outcome.save,
        },
    }))
}

/// `GET /bmi-history`
async fn bmi_history(State(state): State<AppState>) -> Result<Json<HistoryResponse>, ApiError> {
    let store = state.store.lock().map_err(|_| {
        tracing::error!("Log store mutex poisoned");
        ApiError::Internal(HISTORY_ERROR_MESSAGE.to_string())
    })?;

    match service::history(store.as_ref()) {
        Ok(history) => Ok(Json(HistoryResponse {
            success: true,
            history,
        })),
        Err(e) => {
            tracing::error!("Failed to read BMI history: {}", e);
            Err(ApiError::Internal(HISTORY_ERROR_MESSAGE.to_string()))
        }
    }
}
