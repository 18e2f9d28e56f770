use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use acme_core::validation::{require_non_blank, validate_passenger};
use acme_core::CoreResult;
use acme_shared::{Booking, Passenger};
use serde::Deserialize;
use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request Types
// ============================================================================

/// Missing string fields decode as empty and fail the blank check, so every
/// payload problem surfaces as a 400 with a field name.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[serde(default)]
    pub flight_id: String,
    pub passenger: Option<PassengerPayload>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePassengerRequest {
    pub passenger: Option<PassengerPayload>,
}

#[derive(Debug, Deserialize)]
pub struct PassengerPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl PassengerPayload {
    pub fn into_passenger(self) -> CoreResult<Passenger> {
        let passenger = Passenger::new(self.name, self.email, self.phone);
        validate_passenger(&passenger)?;
        Ok(passenger)
    }
}

fn required_passenger(payload: Option<PassengerPayload>) -> Result<Passenger, AppError> {
    let payload = payload.ok_or_else(|| AppError::ValidationError("passenger is required".to_string()))?;
    Ok(payload.into_passenger()?)
}

// ============================================================================
// Handlers
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/bookings", get(list_bookings).post(create_booking))
        .route("/api/bookings/{id}", get(get_booking))
        .route("/api/bookings/{id}/passenger", put(update_passenger))
        .route("/api/bookings/{id}/cancel", post(cancel_booking))
}

/// POST /api/bookings
/// 201 with a Location header, 404 when the flight is unknown.
async fn create_booking(
    State(state): State<AppState>,
    payload: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload?;
    let flight_id = require_non_blank("flightId", &req.flight_id)?.to_string();
    let passenger = required_passenger(req.passenger)?;

    let booking = state.bookings.create_booking(&flight_id, passenger).await?;
    let location = format!("/api/bookings/{}", booking.id);

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(booking)))
}

/// GET /api/bookings
async fn list_bookings(State(state): State<AppState>) -> Json<Vec<Booking>> {
    Json(state.bookings.list_all().await)
}

/// GET /api/bookings/{id}
async fn get_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<String>,
) -> Result<Json<Booking>, AppError> {
    Ok(Json(state.bookings.find_by_id(&booking_id).await?))
}

/// PUT /api/bookings/{id}/passenger
async fn update_passenger(
    State(state): State<AppState>,
    Path(booking_id): Path<String>,
    payload: Result<Json<UpdatePassengerRequest>, JsonRejection>,
) -> Result<Json<Booking>, AppError> {
    let Json(req) = payload?;
    let passenger = required_passenger(req.passenger)?;
    Ok(Json(state.bookings.update_passenger(&booking_id, passenger).await?))
}

/// POST /api/bookings/{id}/cancel
/// Cancelling an already-cancelled booking returns it again with 200.
async fn cancel_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<String>,
) -> Result<Json<Booking>, AppError> {
    Ok(Json(state.bookings.cancel(&booking_id).await?))
}
