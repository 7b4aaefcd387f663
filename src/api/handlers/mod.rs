use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::models::{CarCategory, Customer};
use crate::service::{RentalError, RentalService};

type ApiError = (StatusCode, Json<Value>);
type ApiResult = Result<Json<Value>, ApiError>;

// ============================================================
// Error Handling
// ============================================================

fn error_response(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(json!({ "error": message.into() })))
}

/// Map a service failure onto a status code and response body. Validation
/// problems are safe to expose; storage failures are logged server-side and
/// sanitized so clients never see internal details.
fn service_error(e: RentalError) -> ApiError {
    match e {
        RentalError::Validation(msg) => {
            tracing::warn!("Validation error: {}", msg);
            error_response(StatusCode::BAD_REQUEST, msg)
        }
        RentalError::NoAvailability => {
            error_response(StatusCode::NOT_FOUND, "No cars available")
        }
        RentalError::Storage(e) => {
            tracing::error!("Storage failure: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

// ============================================================
// Payload parsing
// ============================================================

/// Raw rental payload as posted to `/rent` and `/calculateFinalPrice`.
/// Fields stay untyped here so a missing one yields the boundary's
/// "Missing required fields" answer instead of a deserializer message.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RentalPayload {
    customer: Option<Value>,
    car_category: Option<Value>,
    number_of_days: Option<i64>,
}

fn parse_rental_payload(payload: Value) -> Result<(Customer, CarCategory, u32), ApiError> {
    let missing = || error_response(StatusCode::BAD_REQUEST, "Missing required fields");

    let payload: RentalPayload = serde_json::from_value(payload).map_err(|_| missing())?;

    let (Some(customer), Some(category), Some(days)) =
        (payload.customer, payload.car_category, payload.number_of_days)
    else {
        return Err(missing());
    };
    if days <= 0 {
        return Err(missing());
    }
    let days = u32::try_from(days).map_err(|_| missing())?;

    let customer: Customer = serde_json::from_value(customer).map_err(|_| missing())?;
    let category: CarCategory = serde_json::from_value(category).map_err(|_| missing())?;

    Ok((customer, category, days))
}

// ============================================================
// Routes
// ============================================================

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn route_not_found() -> ApiError {
    error_response(StatusCode::NOT_FOUND, "Route not found")
}

pub async fn rent(
    State(service): State<RentalService>,
    Json(payload): Json<Value>,
) -> ApiResult {
    let (customer, category, days) = parse_rental_payload(payload)?;

    let receipt = service
        .rent(&customer, &category, days)
        .await
        .map_err(service_error)?;

    Ok(Json(json!({ "result": receipt })))
}

pub async fn calculate_final_price(
    State(service): State<RentalService>,
    Json(payload): Json<Value>,
) -> ApiResult {
    let (customer, category, days) = parse_rental_payload(payload)?;

    let amount = service
        .calculate_final_price(&customer, &category, days)
        .map_err(service_error)?;

    Ok(Json(json!({ "result": amount })))
}

/// The payload for `/getAvailableCar` is the car category itself.
pub async fn get_available_car(
    State(service): State<RentalService>,
    Json(payload): Json<Value>,
) -> ApiResult {
    let invalid = || error_response(StatusCode::BAD_REQUEST, "Invalid car category");

    if payload.get("carIds").is_none() {
        return Err(invalid());
    }
    let category: CarCategory = serde_json::from_value(payload).map_err(|_| invalid())?;

    let car = service
        .get_available_car(&category)
        .await
        .map_err(service_error)?
        .ok_or_else(|| error_response(StatusCode::NOT_FOUND, "No cars available"))?;

    Ok(Json(json!({ "result": car })))
}
