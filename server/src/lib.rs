use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::{Path, State};
use axum::response::Json;
use log::info;
use serde_json::Value;

use reservation::json_api;
use reservation::ReservationEngine;

/// The one engine instance behind one coarse lock. The engine itself is
/// single-threaded request/response; the lock serializes the http callers so
/// the at-most-one-passenger-per-seat invariant holds.
pub type SharedEngine = Arc<Mutex<ReservationEngine>>;

pub fn build_router(engine: SharedEngine) -> axum::Router {
    axum::Router::new()
        .fallback(axum::routing::get(|| async {
            "No route! Use /health, /routes, /bookings, /search or /trains/:id/passengers."
        }))
        .route("/health", axum::routing::get(healthy))
        .route(
            "/routes",
            axum::routing::get(list_routes).post(add_route),
        )
        .route("/bookings", axum::routing::post(book_seat))
        .route("/search", axum::routing::post(search))
        .route("/trains/:id/passengers", axum::routing::get(list_passengers))
        .with_state(engine)
}

pub async fn healthy() -> &'static str {
    "Healthy"
}

pub async fn add_route(
    State(engine): State<SharedEngine>,
    Json(input): Json<Value>,
) -> Json<Value> {
    info!("new add-route request");
    let mut engine = lock(&engine);
    Json(json_api::handle_add_route(&mut engine, input))
}

pub async fn book_seat(
    State(engine): State<SharedEngine>,
    Json(input): Json<Value>,
) -> Json<Value> {
    info!("new booking request");
    let mut engine = lock(&engine);
    Json(json_api::handle_booking(&mut engine, input))
}

pub async fn search(State(engine): State<SharedEngine>, Json(input): Json<Value>) -> Json<Value> {
    info!("new search request");
    let engine = lock(&engine);
    Json(json_api::handle_search(&engine, input))
}

pub async fn list_passengers(
    State(engine): State<SharedEngine>,
    Path(train_id): Path<u32>,
) -> Json<Value> {
    info!("new passenger listing request for train {}", train_id);
    let engine = lock(&engine);
    Json(json_api::handle_list_passengers(&engine, train_id))
}

pub async fn list_routes(State(engine): State<SharedEngine>) -> Json<Value> {
    info!("new route listing request");
    let engine = lock(&engine);
    Json(json_api::handle_list_routes(&engine))
}

fn lock(engine: &SharedEngine) -> MutexGuard<'_, ReservationEngine> {
    engine.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
