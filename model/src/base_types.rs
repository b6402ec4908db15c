use derive_more::Display;
use derive_more::From;

pub type Idx = u16;

/// dense index of a city node within the route graph (assigned in insertion order)
#[derive(Display, From, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CityIdx(pub Idx);

/// user-supplied unique identifier of a train
#[derive(Display, From, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TrainId(pub u32);

pub type WagonNumber = u32; // 1-based position within the train's wagon sequence
pub type SeatCount = u32;
pub type StationCount = usize;
