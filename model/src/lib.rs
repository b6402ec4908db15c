pub mod base_types;
pub mod config;
pub mod errors;
pub mod network;
pub mod train;
