use thiserror::Error;

use crate::base_types::{TrainId, WagonNumber};

/// Every way a reservation operation can be rejected. All of these are
/// recoverable at the boundary: a failed operation leaves the graph and all
/// trains exactly as they were before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReservationError {
    #[error("train {0} not found")]
    TrainNotFound(TrainId),
    #[error("train {0} already exists")]
    DuplicateTrainId(TrainId),
    #[error("train {train} has no wagon {wagon}")]
    WagonNotFound { train: TrainId, wagon: WagonNumber },
    #[error("train {train} has no seat {seat} in wagon {wagon}")]
    SeatNotFound {
        train: TrainId,
        wagon: WagonNumber,
        seat: String,
    },
    #[error("seat {seat} in wagon {wagon} of train {train} is already occupied")]
    SeatOccupied {
        train: TrainId,
        wagon: WagonNumber,
        seat: String,
    },
    #[error("passenger {passenger} is already booked on train {train}")]
    DuplicatePassenger { train: TrainId, passenger: String },
    #[error("train {train} does not serve {origin} before {destination}")]
    InvalidRoute {
        train: TrainId,
        origin: String,
        destination: String,
    },
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ReservationError {
    /// stable camelCase tag carried in the errorKind field of json responses
    pub fn kind(&self) -> &'static str {
        match self {
            ReservationError::TrainNotFound(_) => "trainNotFound",
            ReservationError::DuplicateTrainId(_) => "duplicateTrainId",
            ReservationError::WagonNotFound { .. } => "wagonNotFound",
            ReservationError::SeatNotFound { .. } => "seatNotFound",
            ReservationError::SeatOccupied { .. } => "seatOccupied",
            ReservationError::DuplicatePassenger { .. } => "duplicatePassenger",
            ReservationError::InvalidRoute { .. } => "invalidRoute",
            ReservationError::InvalidInput(_) => "invalidInput",
        }
    }
}
