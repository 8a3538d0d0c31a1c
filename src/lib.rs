//! # Train Delay
//!
//! Delay predictions for trains and directions to nearby bus stops.
//!
//! [`Service`] is the entry point. It wraps the lookup crates with
//! configuration, a clock, a seeded random source and optional simulated
//! latency.

mod config;
mod provider;
mod service;

pub use bus_stops::{BusStop, DirectionStep, Maneuver, RouteDirections};
pub use common::{Coordinates, Error, LocationError, Result};
pub use prediction::{Alternative, AlternativeKind, DelayPrediction, RiskLevel};
pub use route_map::{MapData, Station};

pub use crate::config::{Config, DEFAULT_LOCATION};
pub use crate::provider::*;
pub use crate::service::{NearbyStops, Service};
