use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use model::errors::ReservationError;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AddRouteRequest {
    pub train_id: u32,
    pub origin_city: String,
    pub destination_city: String,
    #[serde(default)]
    pub stations: Vec<String>,
    #[serde(default)]
    pub bidirectional: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub train_id: u32,
    pub wagon_number: u32,
    pub seat_id: String,
    pub passenger_id: String,
    pub first_name: String,
    pub last_name: String,
    pub origin: String,
    pub destination: String,
}

/// Name filters for the passenger search. The wildcard marker "-" matches
/// any value.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ListRequest {
    pub train_id: u32,
}

/// Tagged outcome of a mutating operation; the boundary presents the message
/// and may re-prompt, the engine never retries on its own.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OperationResult {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl OperationResult {
    pub fn from_result(result: Result<(), ReservationError>) -> OperationResult {
        match result {
            Ok(()) => OperationResult {
                ok: true,
                error_kind: None,
                message: None,
            },
            Err(error) => OperationResult {
                ok: false,
                error_kind: Some(error.kind().to_string()),
                message: Some(error.to_string()),
            },
        }
    }
}

/// one search hit: the passenger together with where they are seated
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub passenger_id: String,
    pub first_name: String,
    pub last_name: String,
    pub train_id: u32,
    pub wagon_number: u32,
    pub seat_id: String,
    pub origin: String,
    pub destination: String,
}

impl fmt::Display for BookingRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Passenger Found: {} {} (ID: {}), Train ID: {}, Wagon: {}, Seat: {}, From: {} to {}",
            self.first_name,
            self.last_name,
            self.passenger_id,
            self.train_id,
            self.wagon_number,
            self.seat_id,
            self.origin,
            self.destination
        )
    }
}

/// one occupied seat of a train listing
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SeatOccupancy {
    pub first_name: String,
    pub last_name: String,
    pub seat_id: String,
    pub wagon_number: u32,
}

impl fmt::Display for SeatOccupancy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Name: {} {}, Seat: {}, Wagon: {}",
            self.first_name, self.last_name, self.seat_id, self.wagon_number
        )
    }
}

/// one outgoing edge of the route listing
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RouteListing {
    pub destination_city: String,
    pub train_id: u32,
    pub station_path: Vec<String>,
}

impl fmt::Display for RouteListing {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "-> {} (train {}, via {})",
            self.destination_city,
            self.train_id,
            self.station_path.iter().join(" - ")
        )
    }
}

/// all outgoing routes of one city, most recently added first
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CityRoutes {
    pub origin_city: String,
    pub routes: Vec<RouteListing>,
}
