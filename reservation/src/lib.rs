pub mod engine;
pub mod json_api;
pub mod requests;

pub use engine::ReservationEngine;
pub use engine::WILDCARD;
