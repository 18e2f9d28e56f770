use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use acme_core::FlightSearchRequest;
use acme_shared::Flight;
use serde::Deserialize;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub origin: Option<String>,
    pub destination: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/flights/search", get(search_flights))
        .route("/api/flights/{id}", get(get_flight))
}

/// GET /api/flights/search?origin=&destination=
async fn search_flights(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<Flight>>, AppError> {
    let Query(params) = params?;
    let req = FlightSearchRequest::parse(params.origin.as_deref(), params.destination.as_deref())?;
    Ok(Json(state.flights.search_flights(&req).await))
}

/// GET /api/flights/{id}
async fn get_flight(
    State(state): State<AppState>,
    Path(flight_id): Path<String>,
) -> Result<Json<Flight>, AppError> {
    state
        .flights
        .get_flight_by_id(&flight_id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError(format!("Flight not found: {}", flight_id)))
}
