
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::base_types::{CityIdx, Idx, TrainId};
use crate::config::Config;
use crate::errors::ReservationError;
use crate::train::Train;

/// A city node of the route graph. Owns its outgoing route edges; the most
/// recently added edge comes first.
pub struct City {
    name: String,
    routes: Vec<Route>,
}

/// A directed edge to another city, realized by one train. The train id is a
/// non-owning reference into the network's train registry; a bidirectional
/// connection is two edges sharing one train.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    destination: CityIdx,
    train: TrainId,
}

/// The route graph: cities in insertion order, route edges between them and
/// the registry of all trains. Cities and routes are never removed.
pub struct Network {
    cities: Vec<City>, // indexed by CityIdx
    city_lookup: HashMap<String, CityIdx>,
    trains: BTreeMap<TrainId, Train>, // iteration is ascending by train id
    config: Arc<Config>,
}

/////////////////////////////////////////////////////////////////////
/////////////////////////////// City ////////////////////////////////
/////////////////////////////////////////////////////////////////////

impl City {
    fn new(name: String) -> City {
        City {
            name,
            routes: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// outgoing routes, most recently added first
    pub fn routes(&self) -> impl Iterator<Item = &Route> + '_ {
        self.routes.iter()
    }

    pub fn number_of_routes(&self) -> usize {
        self.routes.len()
    }
}

impl Route {
    pub fn destination(&self) -> CityIdx {
        self.destination
    }

    pub fn train(&self) -> TrainId {
        self.train
    }
}

/////////////////////////////////////////////////////////////////////
////////////////////////////// Network //////////////////////////////
/////////////////////////////////////////////////////////////////////

// static functions
impl Network {
    pub fn new(config: Arc<Config>) -> Network {
        Network {
            cities: Vec::new(),
            city_lookup: HashMap::new(),
            trains: BTreeMap::new(),
            config,
        }
    }
}

// methods
impl Network {
    pub fn config(&self) -> Arc<Config> {
        self.config.clone()
    }

    /// Returns the city with this name, creating it first if it does not
    /// exist yet. Idempotent; no two cities ever share a name.
    pub fn find_or_add_city(&mut self, name: &str) -> CityIdx {
        if let Some(idx) = self.city_lookup.get(name) {
            return *idx;
        }
        let idx = CityIdx::from(self.cities.len() as Idx);
        self.cities.push(City::new(name.to_string()));
        self.city_lookup.insert(name.to_string(), idx);
        idx
    }

    pub fn get_city(&self, name: &str) -> Option<CityIdx> {
        self.city_lookup.get(name).copied()
    }

    pub fn city(&self, idx: CityIdx) -> &City {
        &self.cities[idx.0 as usize]
    }

    pub fn city_name(&self, idx: CityIdx) -> &str {
        self.city(idx).name()
    }

    pub fn number_of_cities(&self) -> usize {
        self.cities.len()
    }

    /// cities in insertion order together with their index
    pub fn cities(&self) -> impl Iterator<Item = (CityIdx, &City)> + '_ {
        self.cities
            .iter()
            .enumerate()
            .map(|(i, city)| (CityIdx::from(i as Idx), city))
    }

    /// Creates the train with its full wagon/seat complement and connects
    /// origin and destination, creating either city on first reference.
    /// Inserts one edge origin->destination, or additionally the reverse edge
    /// if `bidirectional` is set; both edges reference the same train.
    /// Rejected requests leave the graph untouched.
    pub fn add_route(
        &mut self,
        train_id: TrainId,
        origin: &str,
        destination: &str,
        stations: Vec<String>,
        bidirectional: bool,
    ) -> Result<(), ReservationError> {
        if self.trains.contains_key(&train_id) {
            return Err(ReservationError::DuplicateTrainId(train_id));
        }
        if stations.len() > self.config.max_stopping_stations {
            return Err(ReservationError::InvalidInput(format!(
                "at most {} stopping stations are allowed, got {}",
                self.config.max_stopping_stations,
                stations.len()
            )));
        }
        let origin_idx = self.find_or_add_city(origin);
        let destination_idx = self.find_or_add_city(destination);

        let train = Train::new(train_id, origin_idx, destination_idx, stations, &self.config);
        self.trains.insert(train_id, train);

        self.insert_edge(origin_idx, destination_idx, train_id);
        if bidirectional {
            self.insert_edge(destination_idx, origin_idx, train_id);
        }
        Ok(())
    }

    fn insert_edge(&mut self, origin: CityIdx, destination: CityIdx, train: TrainId) {
        // prepend, so that the latest route is listed first
        self.cities[origin.0 as usize].routes.insert(
            0,
            Route {
                destination,
                train,
            },
        );
    }

    pub fn train(&self, id: TrainId) -> Option<&Train> {
        self.trains.get(&id)
    }

    pub fn train_mut(&mut self, id: TrainId) -> Option<&mut Train> {
        self.trains.get_mut(&id)
    }

    pub fn contains_train(&self, id: TrainId) -> bool {
        self.trains.contains_key(&id)
    }

    pub fn number_of_trains(&self) -> usize {
        self.trains.len()
    }

    /// all trains in ascending id order
    pub fn trains(&self) -> impl Iterator<Item = &Train> + '_ {
        self.trains.values()
    }
}
