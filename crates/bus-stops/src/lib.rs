//! # Bus Stops
//!
//! Ranks a fixed set of bus stops by walking distance from the rider and
//! fabricates turn-by-turn walking directions to the chosen stop.

mod directions;
mod distance;
mod stops;

pub use self::directions::*;
pub use self::distance::{EARTH_RADIUS_M, haversine, walk_minutes, walk_time_label};
pub use self::stops::{BusStop, DEFAULT_MAX_RESULTS, nearby};
