//! Parker library — application logic for the parking lot simulator binary.

pub mod app;
pub mod config;
pub mod errors;
