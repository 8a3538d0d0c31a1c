use std::env;
use std::time::Duration;

use bus_stops::DEFAULT_MAX_RESULTS;
use chrono_tz::Tz;
use common::Coordinates;

/// Midtown Manhattan, used when the device cannot be located.
pub const DEFAULT_LOCATION: Coordinates = Coordinates::new(40.7580, -73.9855);

/// Service configuration derived from the host environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Timezone arrival times are shown in.
    pub timezone: Tz,

    /// Artificial delay added to each lookup to mimic a network round trip.
    pub latency: Duration,

    pub max_nearby_stops: usize,

    /// Seed for predictions and directions. `None` draws from OS entropy.
    pub rng_seed: Option<u64>,

    /// Where to search for bus stops when the device location is unavailable.
    pub default_location: Coordinates,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::Africa::Johannesburg,
            latency: Duration::ZERO,
            max_nearby_stops: DEFAULT_MAX_RESULTS,
            rng_seed: None,
            default_location: DEFAULT_LOCATION,
        }
    }
}

impl Config {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let timezone = env::var("TIMEZONE")
            .ok()
            .and_then(|value| value.parse::<Tz>().ok())
            .unwrap_or(defaults.timezone);
        let latency = Duration::from_millis(env_u64("SIMULATED_LATENCY_MS", 0));
        let max_nearby_stops = env::var("MAX_NEARBY_STOPS")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .unwrap_or(defaults.max_nearby_stops);
        let rng_seed = env::var("RNG_SEED").ok().and_then(|value| value.parse::<u64>().ok());

        let default_location = Coordinates::new(
            env_f64("DEFAULT_LATITUDE", defaults.default_location.latitude),
            env_f64("DEFAULT_LONGITUDE", defaults.default_location.longitude),
        );
        let default_location = if default_location.is_valid() {
            default_location
        } else {
            tracing::warn!(?default_location, "default location out of range; using built-in");
            defaults.default_location
        };

        Self { timezone, latency, max_nearby_stops, rng_seed, default_location }
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key).ok().and_then(|value| value.parse::<u64>().ok()).unwrap_or(default)
}

fn env_f64(key: &str, default: f64) -> f64 {
    env::var(key).ok().and_then(|value| value.parse::<f64>().ok()).unwrap_or(default)
}
