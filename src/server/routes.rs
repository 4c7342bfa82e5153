//! HTTP API routes
//!
//! Defines all REST API endpoints for the server.

use crate::coord::{calculate_distance, format_coordinates, parse_coordinate_string};
use crate::format::{available_formats, FormatInfo};
use crate::geo::{GeoBackend, GeocodeResponse};
use crate::server::state::AppState;
use crate::validate::{validate_vietnam_coordinates, ValidationResult};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/geocode", get(geocode_handler))
        .route("/api/reverse", get(reverse_handler))
        .route("/api/validate", post(validate_handler))
        .route("/api/parse", post(parse_handler))
        .route("/api/distance", get(distance_handler))
        .route("/api/formats", get(formats_handler))
        .route("/api/status", get(status_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

/// Forward geocode query
#[derive(Debug, Deserialize)]
pub struct GeocodeQuery {
    #[serde(default)]
    pub address: String,
}

/// Forward geocode endpoint
///
/// GET /api/geocode?address=...
///
/// Always 200; failures are reported inside the envelope.
async fn geocode_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GeocodeQuery>,
) -> Json<GeocodeResponse> {
    Json(state.geocoder.geocode(&query.address).await)
}

/// Reverse geocode query
#[derive(Debug, Deserialize)]
pub struct ReverseQuery {
    pub lat: f64,
    pub lng: f64,
}

/// Reverse geocode endpoint
///
/// GET /api/reverse?lat=..&lng=..
async fn reverse_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ReverseQuery>,
) -> Json<GeocodeResponse> {
    Json(state.geocoder.reverse(query.lat, query.lng).await)
}

/// Validate request body
#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub lat: f64,
    pub lng: f64,
    pub address: Option<String>,
}

/// Coordinate validation endpoint
///
/// POST /api/validate
async fn validate_handler(Json(req): Json<ValidateRequest>) -> Json<ValidationResult> {
    Json(validate_vietnam_coordinates(
        req.lat,
        req.lng,
        req.address.as_deref(),
    ))
}

/// Parse request body
#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub text: String,
}

/// Parsed coordinates
#[derive(Debug, Serialize, Deserialize)]
pub struct ParseResponse {
    pub lat: f64,
    pub lng: f64,
    pub formatted: String,
}

/// Coordinate string parsing endpoint
///
/// POST /api/parse
async fn parse_handler(Json(req): Json<ParseRequest>) -> Result<Json<ParseResponse>, ApiError> {
    let coords = parse_coordinate_string(&req.text).ok_or_else(|| ApiError {
        error: format!("Could not parse coordinates from '{}'", req.text),
        code: "INVALID_COORDINATES".to_string(),
    })?;

    Ok(Json(ParseResponse {
        lat: coords.lat,
        lng: coords.lng,
        formatted: format_coordinates(coords.lat, coords.lng),
    }))
}

/// Distance query
#[derive(Debug, Deserialize)]
pub struct DistanceQuery {
    pub lat1: f64,
    pub lng1: f64,
    pub lat2: f64,
    pub lng2: f64,
}

/// Distance response
#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceResponse {
    pub meters: f64,
}

/// Haversine distance endpoint
///
/// GET /api/distance?lat1=..&lng1=..&lat2=..&lng2=..
async fn distance_handler(Query(q): Query<DistanceQuery>) -> Json<DistanceResponse> {
    Json(DistanceResponse {
        meters: calculate_distance(q.lat1, q.lng1, q.lat2, q.lng2),
    })
}

/// Formats list response
#[derive(Debug, Serialize, Deserialize)]
pub struct FormatsResponse {
    pub formats: Vec<FormatInfo>,
}

/// List output formats
///
/// GET /api/formats
async fn formats_handler() -> Json<FormatsResponse> {
    Json(FormatsResponse {
        formats: available_formats(),
    })
}

/// Status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Server is running
    pub running: bool,
    /// Server version
    pub version: String,
    /// Geocoding provider
    pub provider: String,
    /// Whether geocode calls can reach the provider
    pub api_key_configured: bool,
}

/// Server status endpoint
///
/// GET /api/status
async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        running: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        provider: state.geocoder.name().to_string(),
        api_key_configured: state.geocoder.has_api_key(),
    })
}
