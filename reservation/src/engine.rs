#[cfg(test)]
mod tests;

use std::sync::Arc;

use log::{debug, info};

use model::base_types::TrainId;
use model::config::Config;
use model::errors::ReservationError;
use model::network::Network;
use model::train::Passenger;

use crate::requests::{
    AddRouteRequest, BookingRecord, BookingRequest, CityRoutes, ListRequest, RouteListing,
    SearchRequest, SeatOccupancy,
};

/// the reserved search input meaning "match any value"
pub const WILDCARD: &str = "-";

/// The single mutator and query surface of the system. All operations are
/// synchronous and atomic as observed from outside: a rejected request
/// leaves the network exactly as it was before the call.
pub struct ReservationEngine {
    network: Network,
}

// static functions
impl ReservationEngine {
    pub fn new(config: Arc<Config>) -> ReservationEngine {
        ReservationEngine {
            network: Network::new(config),
        }
    }
}

// methods
impl ReservationEngine {
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Registers a new train on origin -> destination (and the reverse edge
    /// if bidirectional), creating cities on first reference.
    pub fn add_route(&mut self, request: &AddRouteRequest) -> Result<(), ReservationError> {
        if request.origin_city.is_empty() || request.destination_city.is_empty() {
            return Err(ReservationError::InvalidInput(String::from(
                "origin and destination city are required",
            )));
        }
        let train_id = TrainId::from(request.train_id);
        self.network.add_route(
            train_id,
            &request.origin_city,
            &request.destination_city,
            request.stations.clone(),
            request.bidirectional,
        )?;
        info!(
            "added train {} on {} -> {}{}",
            train_id,
            request.origin_city,
            request.destination_city,
            if request.bidirectional {
                " (bidirectional)"
            } else {
                ""
            }
        );
        Ok(())
    }

    /// Books one seat, enforcing the strict validation policy: a passenger id
    /// may appear at most once per train, and the train must serve the stated
    /// origin before the stated destination. Checks run in the order
    /// train, duplicate passenger, route, wagon, seat; the first failing
    /// check wins and nothing is mutated.
    pub fn book_seat(&mut self, request: &BookingRequest) -> Result<(), ReservationError> {
        if request.first_name.is_empty() || request.last_name.is_empty() {
            return Err(ReservationError::InvalidInput(String::from(
                "both first and last names are required",
            )));
        }

        let train_id = TrainId::from(request.train_id);
        let train = self
            .network
            .train(train_id)
            .ok_or(ReservationError::TrainNotFound(train_id))?;

        if train.contains_passenger(&request.passenger_id) {
            return Err(ReservationError::DuplicatePassenger {
                train: train_id,
                passenger: request.passenger_id.clone(),
            });
        }

        let origin_city = self.network.city_name(train.origin());
        let destination_city = self.network.city_name(train.destination());
        if !train.serves_in_order(
            origin_city,
            destination_city,
            &request.origin,
            &request.destination,
        ) {
            return Err(ReservationError::InvalidRoute {
                train: train_id,
                origin: request.origin.clone(),
                destination: request.destination.clone(),
            });
        }

        let passenger = Passenger::new(
            request.passenger_id.clone(),
            request.first_name.clone(),
            request.last_name.clone(),
            request.origin.clone(),
            request.destination.clone(),
        );
        let train = self
            .network
            .train_mut(train_id)
            .ok_or(ReservationError::TrainNotFound(train_id))?;
        train.book(request.wagon_number, &request.seat_id, passenger)?;
        debug!(
            "booked seat {} in wagon {} of train {} for passenger {}",
            request.seat_id, request.wagon_number, train_id, request.passenger_id
        );
        Ok(())
    }

    /// Finds all booked passengers matching both name filters. A filter equal
    /// to the wildcard marker matches any value. An empty result is a valid
    /// answer; a query with neither filter provided is rejected.
    pub fn search_by_name(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<BookingRecord>, ReservationError> {
        if request.first_name.is_empty() && request.last_name.is_empty() {
            return Err(ReservationError::InvalidInput(String::from(
                "provide a first name, a last name, or the wildcard '-'",
            )));
        }
        Ok(self
            .matching_bookings(&request.first_name, &request.last_name)
            .collect())
    }

    /// Lazy traversal over every occupied seat. Trains come from the registry
    /// in ascending id order, so each seat is visited exactly once even if
    /// several route edges reference the same train; seats come in
    /// wagon-then-seat order.
    fn matching_bookings<'a>(
        &'a self,
        first_name: &'a str,
        last_name: &'a str,
    ) -> impl Iterator<Item = BookingRecord> + 'a {
        self.network.trains().flat_map(move |train| {
            train
                .occupied_seats()
                .filter(move |(_, _, passenger)| {
                    let first_matches =
                        first_name == WILDCARD || passenger.first_name() == first_name;
                    let last_matches = last_name == WILDCARD || passenger.last_name() == last_name;
                    first_matches && last_matches
                })
                .map(move |(wagon_number, seat, passenger)| BookingRecord {
                    passenger_id: passenger.id().to_string(),
                    first_name: passenger.first_name().to_string(),
                    last_name: passenger.last_name().to_string(),
                    train_id: train.id().0,
                    wagon_number,
                    seat_id: seat.id().to_string(),
                    origin: passenger.origin().to_string(),
                    destination: passenger.destination().to_string(),
                })
        })
    }

    /// all occupied seats of one train in wagon-then-seat order
    pub fn list_passengers(
        &self,
        request: &ListRequest,
    ) -> Result<Vec<SeatOccupancy>, ReservationError> {
        let train_id = TrainId::from(request.train_id);
        let train = self
            .network
            .train(train_id)
            .ok_or(ReservationError::TrainNotFound(train_id))?;
        Ok(train
            .occupied_seats()
            .map(|(wagon_number, seat, passenger)| SeatOccupancy {
                first_name: passenger.first_name().to_string(),
                last_name: passenger.last_name().to_string(),
                seat_id: seat.id().to_string(),
                wagon_number,
            })
            .collect())
    }

    /// the full route listing: cities in insertion order, routes per city
    /// most recently added first
    pub fn list_routes(&self) -> Vec<CityRoutes> {
        self.network
            .cities()
            .map(|(_, city)| CityRoutes {
                origin_city: city.name().to_string(),
                routes: city
                    .routes()
                    .map(|route| RouteListing {
                        destination_city: self.network.city_name(route.destination()).to_string(),
                        train_id: route.train().0,
                        station_path: self
                            .network
                            .train(route.train())
                            .map(|train| train.stopping_stations().to_vec())
                            .unwrap_or_default(),
                    })
                    .collect(),
            })
            .collect()
    }

    /// Pre-seeds the demo line of the classic console program: train 1 from
    /// CityA to CityC stopping at CityB.
    pub fn seed_demo_network(&mut self) -> Result<(), ReservationError> {
        self.add_route(&AddRouteRequest {
            train_id: 1,
            origin_city: String::from("CityA"),
            destination_city: String::from("CityC"),
            stations: vec![
                String::from("CityA"),
                String::from("CityB"),
                String::from("CityC"),
            ],
            bidirectional: false,
        })
    }
}
