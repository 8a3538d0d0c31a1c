//! # Route Map
//!
//! Builds the station strip shown on the route map: which stations a train
//! has passed, where it is now and how far along the route it has come.

mod map;
mod stations;

pub use self::map::*;
pub use self::stations::{GENERIC_STATIONS, parse_journey, stations_for};
