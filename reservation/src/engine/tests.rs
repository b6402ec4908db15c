use std::sync::Arc;

use itertools::assert_equal;

use model::base_types::TrainId;
use model::config::Config;
use model::errors::ReservationError;

use crate::requests::{AddRouteRequest, BookingRequest, ListRequest, SearchRequest};

use super::{ReservationEngine, WILDCARD};

fn demo_engine() -> ReservationEngine {
    let mut engine = ReservationEngine::new(Arc::new(Config::default()));
    engine.seed_demo_network().unwrap();
    engine
}

fn john_doe_booking() -> BookingRequest {
    BookingRequest {
        train_id: 1,
        wagon_number: 1,
        seat_id: String::from("1A"),
        passenger_id: String::from("P1"),
        first_name: String::from("John"),
        last_name: String::from("Doe"),
        origin: String::from("CityA"),
        destination: String::from("CityB"),
    }
}

fn wildcard_search() -> SearchRequest {
    SearchRequest {
        first_name: String::from(WILDCARD),
        last_name: String::from(WILDCARD),
    }
}

#[test]
fn booking_round_trip_test() {
    // ARRANGE
    let mut engine = demo_engine();

    // ACT
    let first = engine.book_seat(&john_doe_booking());
    let second = engine.book_seat(&john_doe_booking());

    // ASSERT
    assert_eq!(first, Ok(()));
    assert_eq!(
        second,
        Err(ReservationError::DuplicatePassenger {
            train: TrainId::from(1),
            passenger: String::from("P1"),
        })
    );

    let occupancies = engine.list_passengers(&ListRequest { train_id: 1 }).unwrap();
    assert_eq!(occupancies.len(), 1);
    assert_eq!(occupancies[0].first_name, "John");
    assert_eq!(occupancies[0].last_name, "Doe");
    assert_eq!(occupancies[0].seat_id, "1A");
    assert_eq!(occupancies[0].wagon_number, 1);
    assert_eq!(
        occupancies[0].to_string(),
        "Name: John Doe, Seat: 1A, Wagon: 1"
    );
}

#[test]
fn occupied_seat_is_rejected_test() {
    // ARRANGE
    let mut engine = demo_engine();
    engine.book_seat(&john_doe_booking()).unwrap();

    // ACT: different passenger, same train/wagon/seat
    let mut request = john_doe_booking();
    request.passenger_id = String::from("P2");
    request.first_name = String::from("Jane");
    request.last_name = String::from("Smith");
    let result = engine.book_seat(&request);

    // ASSERT: rejected and the first passenger keeps the seat
    assert_eq!(
        result,
        Err(ReservationError::SeatOccupied {
            train: TrainId::from(1),
            wagon: 1,
            seat: String::from("1A"),
        })
    );
    let hits = engine.search_by_name(&wildcard_search()).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].passenger_id, "P1");
}

#[test]
fn booking_on_unknown_train_changes_nothing_test() {
    // ARRANGE
    let mut engine = demo_engine();
    let mut request = john_doe_booking();
    request.train_id = 99;

    // ACT
    let result = engine.book_seat(&request);

    // ASSERT
    assert_eq!(
        result,
        Err(ReservationError::TrainNotFound(TrainId::from(99)))
    );
    assert!(engine.search_by_name(&wildcard_search()).unwrap().is_empty());
}

#[test]
fn booking_with_unserved_origin_is_rejected_test() {
    // ARRANGE
    let mut engine = demo_engine();
    let mut request = john_doe_booking();
    request.origin = String::from("CityX");

    // ACT
    let result = engine.book_seat(&request);

    // ASSERT
    assert_eq!(
        result,
        Err(ReservationError::InvalidRoute {
            train: TrainId::from(1),
            origin: String::from("CityX"),
            destination: String::from("CityB"),
        })
    );
    assert!(engine.search_by_name(&wildcard_search()).unwrap().is_empty());
}

#[test]
fn booking_against_stop_order_is_rejected_test() {
    // ARRANGE
    let mut engine = demo_engine();
    let mut request = john_doe_booking();
    request.origin = String::from("CityB");
    request.destination = String::from("CityA");

    // ACT + ASSERT
    assert!(matches!(
        engine.book_seat(&request),
        Err(ReservationError::InvalidRoute { .. })
    ));
}

#[test]
fn booking_requires_both_names_test() {
    let mut engine = demo_engine();
    let mut request = john_doe_booking();
    request.last_name = String::new();

    assert!(matches!(
        engine.book_seat(&request),
        Err(ReservationError::InvalidInput(_))
    ));
    assert!(engine.search_by_name(&wildcard_search()).unwrap().is_empty());
}

#[test]
fn wildcard_search_visits_every_occupied_seat_once_test() {
    // ARRANGE: two trains, one of them on a bidirectional connection (two
    // edges, one train), three passengers in total
    let mut engine = demo_engine();
    engine
        .add_route(&AddRouteRequest {
            train_id: 2,
            origin_city: String::from("CityC"),
            destination_city: String::from("CityD"),
            stations: Vec::new(),
            bidirectional: true,
        })
        .unwrap();

    engine.book_seat(&john_doe_booking()).unwrap();
    let mut second = john_doe_booking();
    second.passenger_id = String::from("P2");
    second.wagon_number = 3;
    second.seat_id = String::from("12C");
    engine.book_seat(&second).unwrap();
    let third = BookingRequest {
        train_id: 2,
        wagon_number: 1,
        seat_id: String::from("1A"),
        passenger_id: String::from("P3"),
        first_name: String::from("Jane"),
        last_name: String::from("Smith"),
        origin: String::from("CityC"),
        destination: String::from("CityD"),
    };
    engine.book_seat(&third).unwrap();

    // ACT
    let hits = engine.search_by_name(&wildcard_search()).unwrap();

    // ASSERT: one record per occupied seat, trains ascending, wagons in order
    assert_equal(
        hits.iter()
            .map(|hit| (hit.train_id, hit.wagon_number, hit.seat_id.as_str())),
        vec![(1, 1, "1A"), (1, 3, "12C"), (2, 1, "1A")],
    );
}

#[test]
fn search_filters_are_anded_test() {
    // ARRANGE
    let mut engine = demo_engine();
    engine.book_seat(&john_doe_booking()).unwrap();
    let mut second = john_doe_booking();
    second.passenger_id = String::from("P2");
    second.seat_id = String::from("2A");
    second.first_name = String::from("Jane");
    engine.book_seat(&second).unwrap();

    // ACT + ASSERT
    let by_last = engine
        .search_by_name(&SearchRequest {
            first_name: String::from(WILDCARD),
            last_name: String::from("Doe"),
        })
        .unwrap();
    assert_eq!(by_last.len(), 2);

    let exact = engine
        .search_by_name(&SearchRequest {
            first_name: String::from("Jane"),
            last_name: String::from("Doe"),
        })
        .unwrap();
    assert_eq!(exact.len(), 1);
    assert_eq!(exact[0].passenger_id, "P2");
    assert_eq!(
        exact[0].to_string(),
        "Passenger Found: Jane Doe (ID: P2), Train ID: 1, Wagon: 1, Seat: 2A, From: CityA to CityB"
    );

    let no_hit = engine
        .search_by_name(&SearchRequest {
            first_name: String::from("Jane"),
            last_name: String::from("Smith"),
        })
        .unwrap();
    assert!(no_hit.is_empty());
}

#[test]
fn search_without_filters_is_rejected_test() {
    // an empty result and a missing query are different answers
    let engine = demo_engine();
    let result = engine.search_by_name(&SearchRequest {
        first_name: String::new(),
        last_name: String::new(),
    });

    assert!(matches!(result, Err(ReservationError::InvalidInput(_))));
}

#[test]
fn list_passengers_of_unknown_train_test() {
    let engine = demo_engine();

    assert_eq!(
        engine.list_passengers(&ListRequest { train_id: 42 }),
        Err(ReservationError::TrainNotFound(TrainId::from(42)))
    );
}

#[test]
fn add_route_requires_city_names_test() {
    let mut engine = ReservationEngine::new(Arc::new(Config::default()));
    let result = engine.add_route(&AddRouteRequest {
        train_id: 1,
        origin_city: String::new(),
        destination_city: String::from("CityB"),
        stations: Vec::new(),
        bidirectional: false,
    });

    assert!(matches!(result, Err(ReservationError::InvalidInput(_))));
    assert_eq!(engine.network().number_of_cities(), 0);
}

#[test]
fn list_routes_test() {
    // ARRANGE
    let mut engine = demo_engine();
    engine
        .add_route(&AddRouteRequest {
            train_id: 2,
            origin_city: String::from("CityA"),
            destination_city: String::from("CityD"),
            stations: Vec::new(),
            bidirectional: true,
        })
        .unwrap();

    // ACT
    let listing = engine.list_routes();

    // ASSERT: cities in insertion order, routes most recently added first
    assert_equal(
        listing.iter().map(|city| city.origin_city.as_str()),
        vec!["CityA", "CityC", "CityD"],
    );

    let city_a = &listing[0];
    assert_eq!(city_a.routes.len(), 2);
    assert_eq!(city_a.routes[0].train_id, 2);
    assert_eq!(city_a.routes[0].destination_city, "CityD");
    assert_eq!(city_a.routes[1].train_id, 1);
    assert_eq!(city_a.routes[1].destination_city, "CityC");
    assert_eq!(
        city_a.routes[1].station_path,
        vec!["CityA", "CityB", "CityC"]
    );

    let city_d = &listing[2];
    assert_eq!(city_d.routes.len(), 1);
    assert_eq!(city_d.routes[0].destination_city, "CityA");
    assert_eq!(city_d.routes[0].train_id, 2);
}
