
use std::fmt;

use crate::base_types::{CityIdx, TrainId, WagonNumber};
use crate::config::Config;
use crate::errors::ReservationError;

/// One booked passenger. Owned by the seat it occupies and freed with it;
/// there is no cancellation operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passenger {
    id: String,
    first_name: String,
    last_name: String,
    origin: String,
    destination: String,
}

pub struct Seat {
    id: String,
    passenger: Option<Passenger>, // at most one passenger per seat
}

pub struct Wagon {
    number: WagonNumber,
    seats: Vec<Seat>, // fixed at construction, generation order 1A,2A,..,20A,1B,..
}

/// A scheduled service with a fixed wagon/seat complement. Origin and
/// destination are indices into the route graph's city list; the graph owns
/// the cities, the train does not.
pub struct Train {
    id: TrainId,
    origin: CityIdx,
    destination: CityIdx,
    stopping_stations: Vec<String>, // ordered, includes intermediate stops
    wagons: Vec<Wagon>,
}

/////////////////////////////////////////////////////////////////////
///////////////////////////// Passenger /////////////////////////////
/////////////////////////////////////////////////////////////////////

impl Passenger {
    pub fn new(
        id: String,
        first_name: String,
        last_name: String,
        origin: String,
        destination: String,
    ) -> Passenger {
        Passenger {
            id,
            first_name,
            last_name,
            origin,
            destination,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }
}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} (ID: {})",
            self.first_name, self.last_name, self.id
        )
    }
}

/////////////////////////////////////////////////////////////////////
/////////////////////////////// Seat ////////////////////////////////
/////////////////////////////////////////////////////////////////////

impl Seat {
    fn new(id: String) -> Seat {
        Seat {
            id,
            passenger: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn passenger(&self) -> Option<&Passenger> {
        self.passenger.as_ref()
    }

    pub fn is_occupied(&self) -> bool {
        self.passenger.is_some()
    }

    fn occupy(&mut self, passenger: Passenger) {
        self.passenger = Some(passenger);
    }
}

/////////////////////////////////////////////////////////////////////
/////////////////////////////// Wagon ///////////////////////////////
/////////////////////////////////////////////////////////////////////

impl Wagon {
    fn new(number: WagonNumber, config: &Config) -> Wagon {
        let mut seats = Vec::with_capacity(config.fleet.seats_per_wagon() as usize);
        for row in config.fleet.seat_rows() {
            for column in 1..=config.fleet.seats_per_row {
                seats.push(Seat::new(format!("{}{}", column, row)));
            }
        }
        Wagon { number, seats }
    }

    pub fn number(&self) -> WagonNumber {
        self.number
    }

    pub fn seats(&self) -> impl Iterator<Item = &Seat> + '_ {
        self.seats.iter()
    }

    pub fn seat(&self, seat_id: &str) -> Option<&Seat> {
        self.seats.iter().find(|seat| seat.id == seat_id)
    }

    fn seat_mut(&mut self, seat_id: &str) -> Option<&mut Seat> {
        self.seats.iter_mut().find(|seat| seat.id == seat_id)
    }

    /// occupied seats in seat generation order
    pub fn occupied_seats(&self) -> impl Iterator<Item = (&Seat, &Passenger)> + '_ {
        self.seats
            .iter()
            .filter_map(|seat| seat.passenger().map(|passenger| (seat, passenger)))
    }
}

/////////////////////////////////////////////////////////////////////
/////////////////////////////// Train ///////////////////////////////
/////////////////////////////////////////////////////////////////////

// static functions
impl Train {
    /// Builds the train with its full wagon/seat complement as given by the
    /// config. The wagon sequence is fixed afterwards and never resized.
    pub fn new(
        id: TrainId,
        origin: CityIdx,
        destination: CityIdx,
        stopping_stations: Vec<String>,
        config: &Config,
    ) -> Train {
        let wagons = (1..=config.fleet.wagons_per_train)
            .map(|number| Wagon::new(number, config))
            .collect();
        Train {
            id,
            origin,
            destination,
            stopping_stations,
            wagons,
        }
    }
}

// methods
impl Train {
    pub fn id(&self) -> TrainId {
        self.id
    }

    pub fn origin(&self) -> CityIdx {
        self.origin
    }

    pub fn destination(&self) -> CityIdx {
        self.destination
    }

    pub fn stopping_stations(&self) -> &[String] {
        &self.stopping_stations
    }

    pub fn wagons(&self) -> impl Iterator<Item = &Wagon> + '_ {
        self.wagons.iter()
    }

    /// 1-indexed positional lookup within the fixed wagon sequence
    pub fn wagon(&self, number: WagonNumber) -> Option<&Wagon> {
        if number == 0 {
            return None;
        }
        self.wagons.get(number as usize - 1)
    }

    /// true iff a passenger with this id already holds a seat on this train
    pub fn contains_passenger(&self, passenger_id: &str) -> bool {
        self.occupied_seats()
            .any(|(_, _, passenger)| passenger.id() == passenger_id)
    }

    /// occupied seats of the whole train in wagon-then-seat order
    pub fn occupied_seats(&self) -> impl Iterator<Item = (WagonNumber, &Seat, &Passenger)> + '_ {
        self.wagons.iter().flat_map(|wagon| {
            wagon
                .occupied_seats()
                .map(move |(seat, passenger)| (wagon.number, seat, passenger))
        })
    }

    /// Checks that this train serves `from` strictly before `to`: `from` must
    /// match the origin city or appear in the stopping-station sequence, and
    /// `to` must match the destination city or appear in the stopping
    /// sequence at or after the position where `from` was found.
    /// `origin_city` and `destination_city` are the resolved names of this
    /// train's terminal cities.
    pub fn serves_in_order(
        &self,
        origin_city: &str,
        destination_city: &str,
        from: &str,
        to: &str,
    ) -> bool {
        let search_from = if from == origin_city {
            0
        } else {
            match self
                .stopping_stations
                .iter()
                .position(|station| station == from)
            {
                Some(position) => position,
                None => return false,
            }
        };
        to == destination_city
            || self.stopping_stations[search_from..]
                .iter()
                .any(|station| station == to)
    }

    /// Places the passenger on the requested seat. Exactly one seat
    /// transitions empty to occupied on success; on failure nothing changes.
    pub fn book(
        &mut self,
        wagon_number: WagonNumber,
        seat_id: &str,
        passenger: Passenger,
    ) -> Result<(), ReservationError> {
        let train = self.id;
        let wagon = self
            .wagon_mut(wagon_number)
            .ok_or(ReservationError::WagonNotFound {
                train,
                wagon: wagon_number,
            })?;
        let seat = wagon
            .seat_mut(seat_id)
            .ok_or_else(|| ReservationError::SeatNotFound {
                train,
                wagon: wagon_number,
                seat: seat_id.to_string(),
            })?;
        if seat.is_occupied() {
            return Err(ReservationError::SeatOccupied {
                train,
                wagon: wagon_number,
                seat: seat_id.to_string(),
            });
        }
        seat.occupy(passenger);
        Ok(())
    }

    fn wagon_mut(&mut self, number: WagonNumber) -> Option<&mut Wagon> {
        if number == 0 {
            return None;
        }
        self.wagons.get_mut(number as usize - 1)
    }
}

impl fmt::Display for Train {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "train {} ({} wagons, stops: {})",
            self.id,
            self.wagons.len(),
            self.stopping_stations.join(" - ")
        )
    }
}
