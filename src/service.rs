use std::sync::{Mutex, PoisonError};

use bus_stops::{BusStop, RouteDirections};
use common::{Clock, Coordinates, LocationError, Result, SystemClock};
use prediction::DelayPrediction;
use rand::SeedableRng;
use rand::rngs::StdRng;
use route_map::MapData;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::Config;
use crate::provider::Geolocation;

/// Bus stops found around the rider, with the reason a fallback location was
/// used if the device could not be located.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyStops {
    /// Position the stops were ranked from.
    pub origin: Coordinates,
    pub stops: Vec<BusStop>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_error: Option<LocationError>,
}

impl NearbyStops {
    /// Message to show the rider when their location could not be used.
    #[must_use]
    pub fn notice(&self) -> Option<String> {
        self.location_error.map(|err| err.to_string())
    }
}

/// Entry point for the delay prediction and bus stop operations.
///
/// Lookups are pure over static tables. The service adds the configured
/// latency, a shared random source and the clock used for arrival times.
pub struct Service<C = SystemClock> {
    config: Config,
    clock: C,
    rng: Mutex<StdRng>,
}

impl Service<SystemClock> {
    /// Service configured from the environment using the system clock.
    #[must_use]
    pub fn from_env() -> Self {
        let config = Config::from_env();
        let clock = SystemClock::from_timezone(config.timezone);
        Self::new(config, clock)
    }
}

impl<C: Clock> Service<C> {
    pub fn new(config: Config, clock: C) -> Self {
        let rng = config.rng_seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self { config, clock, rng: Mutex::new(rng) }
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Predicts the delay for the train named in free text such as
    /// "train 205", optionally with the ETA for a destination.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` when the text has no train number or the
    /// number is outside 100 to 999.
    #[tracing::instrument(skip(self))]
    pub async fn predict_train_delay(
        &self, input: &str, destination: Option<&str>,
    ) -> Result<DelayPrediction> {
        self.simulate_latency().await;

        let prediction = self
            .with_rng(|rng| prediction::predict(input, destination, &self.clock, rng))
            .inspect_err(|err| warn!(error = %err, "rejected train delay request"))?;

        log_prediction(&prediction);
        Ok(prediction)
    }

    /// Predicts the delay for the train serving `origin` to `destination`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` when either station is blank.
    #[tracing::instrument(skip(self))]
    pub async fn predict_train_delay_by_route(
        &self, origin: &str, destination: &str,
    ) -> Result<DelayPrediction> {
        self.simulate_latency().await;

        let prediction = self
            .with_rng(|rng| prediction::predict_by_route(origin, destination, &self.clock, rng))
            .inspect_err(|err| warn!(error = %err, "rejected route delay request"))?;

        log_prediction(&prediction);
        Ok(prediction)
    }

    /// Route map for a train at `current_location` running `delay_minutes` late.
    #[must_use]
    pub fn map_data(
        &self, train_number: &str, current_location: &str, delay_minutes: u32,
    ) -> MapData {
        route_map::generate(train_number, current_location, delay_minutes)
    }

    /// Route map for a prediction's train, location and delay.
    #[must_use]
    pub fn map_for_prediction(&self, prediction: &DelayPrediction) -> MapData {
        self.map_data(
            &prediction.train_number,
            prediction.current_location.as_deref().unwrap_or_default(),
            prediction.delay_minutes,
        )
    }

    /// Bus stops nearest `position`, nearest first. `max_results` defaults to
    /// the configured limit.
    #[tracing::instrument(skip(self))]
    pub async fn nearby_bus_stops(
        &self, position: Coordinates, max_results: Option<usize>,
    ) -> Vec<BusStop> {
        self.simulate_latency().await;

        let max_results = max_results.unwrap_or(self.config.max_nearby_stops);
        let stops = bus_stops::nearby(position, max_results);
        info!(count = stops.len(), "found nearby bus stops");
        stops
    }

    /// Locates the device and finds the bus stops around it.
    ///
    /// Location failures are not fatal: the configured default location is
    /// searched instead and the failure is reported alongside the stops.
    #[tracing::instrument(skip_all)]
    pub async fn locate_nearby_bus_stops<G>(&self, geolocation: &G) -> NearbyStops
    where
        G: Geolocation,
    {
        let located = match geolocation.current_position().await {
            Ok(position) if position.is_valid() => Ok(position),
            Ok(position) => {
                warn!(?position, "device reported coordinates out of range");
                Err(LocationError::PositionUnavailable)
            }
            Err(err) => Err(err),
        };

        let (origin, location_error) = match located {
            Ok(position) => (position, None),
            Err(err) => {
                warn!(error = %err, "using default location");
                (self.config.default_location, Some(err))
            }
        };

        let stops = self.nearby_bus_stops(origin, None).await;
        NearbyStops { origin, stops, location_error }
    }

    /// Walking directions to a bus stop `distance` metres away.
    #[tracing::instrument(skip(self))]
    pub async fn directions_to_bus_stop(
        &self, from: Coordinates, to: Coordinates, stop_name: &str, distance: u32,
    ) -> RouteDirections {
        self.simulate_latency().await;
        self.with_rng(|rng| bus_stops::directions(from, to, stop_name, distance, rng))
    }

    async fn simulate_latency(&self) {
        if !self.config.latency.is_zero() {
            tokio::time::sleep(self.config.latency).await;
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }
}

fn log_prediction(prediction: &DelayPrediction) {
    info!(
        train = %prediction.train_number,
        delay_minutes = prediction.delay_minutes,
        risk = %prediction.risk_level,
        "predicted train delay"
    );
}
