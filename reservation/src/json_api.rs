//! The json boundary of the engine: every operation takes a
//! `serde_json::Value` request and answers with a `serde_json::Value`, so an
//! external driver never touches the domain types directly.

use serde_json::{json, Value};

use model::errors::ReservationError;

use crate::engine::ReservationEngine;
use crate::requests::{
    AddRouteRequest, BookingRequest, ListRequest, OperationResult, SearchRequest,
};

pub fn handle_add_route(engine: &mut ReservationEngine, input: Value) -> Value {
    match serde_json::from_value::<AddRouteRequest>(input) {
        Ok(request) => result_to_json(engine.add_route(&request)),
        Err(error) => malformed_request(&error),
    }
}

pub fn handle_booking(engine: &mut ReservationEngine, input: Value) -> Value {
    match serde_json::from_value::<BookingRequest>(input) {
        Ok(request) => result_to_json(engine.book_seat(&request)),
        Err(error) => malformed_request(&error),
    }
}

pub fn handle_search(engine: &ReservationEngine, input: Value) -> Value {
    match serde_json::from_value::<SearchRequest>(input) {
        Ok(request) => match engine.search_by_name(&request) {
            Ok(bookings) => json!({ "ok": true, "bookings": bookings }),
            Err(error) => error_to_json(&error),
        },
        Err(error) => malformed_request(&error),
    }
}

pub fn handle_list_passengers(engine: &ReservationEngine, train_id: u32) -> Value {
    match engine.list_passengers(&ListRequest { train_id }) {
        Ok(passengers) => json!({ "ok": true, "trainId": train_id, "passengers": passengers }),
        Err(error) => error_to_json(&error),
    }
}

pub fn handle_list_routes(engine: &ReservationEngine) -> Value {
    json!({ "ok": true, "cities": engine.list_routes() })
}

fn result_to_json(result: Result<(), ReservationError>) -> Value {
    json!(OperationResult::from_result(result))
}

fn error_to_json(error: &ReservationError) -> Value {
    result_to_json(Err(error.clone()))
}

fn malformed_request(error: &serde_json::Error) -> Value {
    json!({
        "ok": false,
        "errorKind": "invalidInput",
        "message": format!("malformed request: {}", error),
    })
}
