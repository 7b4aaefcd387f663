mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::service::RentalService;

pub fn create_router(service: RentalService) -> Router {
    Router::new()
        .route("/rent", post(handlers::rent))
        .route("/calculateFinalPrice", post(handlers::calculate_final_price))
        .route("/getAvailableCar", post(handlers::get_available_car))
        .route("/health", get(handlers::health))
        .fallback(handlers::route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(service)
}
