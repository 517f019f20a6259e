// SPDX-License-Identifier: PMPL-1.0-or-later
//! HTTP surface for the calculation service

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;
use wattplan_engine::{simulate, InvalidRequest, SimulationReport, SimulationRequest};
use wattplan_store::MeasurementStore;

/// Shared application state
///
/// The store is complete before the router exists and never changes
/// afterwards, so handlers read it without locking.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MeasurementStore>,
}

/// Build the service router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(banner_handler))
        .route("/health", get(health_handler))
        .route("/calculate", post(calculate_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn banner_handler() -> &'static str {
    "wattplan calculation service"
}

/// Liveness plus the table sizes loaded at startup
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        scenarios: state.store.scenario_count(),
        devices: state.store.device_count(),
    })
}

/// Run one simulation; contract violations map to 422
async fn calculate_handler(
    State(state): State<AppState>,
    Json(request): Json<SimulationRequest>,
) -> Result<Json<SimulationReport>, ApiError> {
    info!(
        device = %request.device,
        network = %request.network,
        mobility = ?request.mobility,
        activities = request.activities.len(),
        "calculation requested"
    );

    let report = simulate(&state.store, &request)?;

    info!(
        total_wh = report.total_energy.0,
        battery_percent = report.battery_percent,
        "calculation complete"
    );

    Ok(Json(report))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    scenarios: usize,
    devices: usize,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps engine contract violations onto HTTP statuses
#[derive(Debug)]
pub struct ApiError(InvalidRequest);

impl From<InvalidRequest> for ApiError {
    fn from(err: InvalidRequest) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error: self.0.to_string(),
        });
        (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
    }
}
