use crate::base_types::{SeatCount, StationCount, WagonNumber};

/// Fixed-layout configuration of the fleet. This is not user-supplied per
/// train; every train is built from the same plan.
pub struct Config {
    pub fleet: ConfigFleet,
    pub max_stopping_stations: StationCount,
}

pub struct ConfigFleet {
    pub wagons_per_train: WagonNumber,
    pub first_seat_row: char,
    pub last_seat_row: char,
    pub seats_per_row: SeatCount,
}

impl ConfigFleet {
    pub fn seat_rows(&self) -> impl Iterator<Item = char> {
        self.first_seat_row..=self.last_seat_row
    }

    pub fn seats_per_wagon(&self) -> SeatCount {
        let rows = self.last_seat_row as u32 - self.first_seat_row as u32 + 1;
        rows * self.seats_per_row
    }
}

impl Default for Config {
    // six wagons, rows A-D times columns 1-20, at most ten stopping stations
    fn default() -> Config {
        Config {
            fleet: ConfigFleet {
                wagons_per_train: 6,
                first_seat_row: 'A',
                last_seat_row: 'D',
                seats_per_row: 20,
            },
            max_stopping_stations: 10,
        }
    }
}
