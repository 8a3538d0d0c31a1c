//! # Provider
//!
//! Provider defines the external collaborators the service depends on.

use common::{Coordinates, LocationError};

pub use common::{Clock, SystemClock};

/// Device geolocation, implemented by the host application.
pub trait Geolocation: Send + Sync {
    /// Current position of the device.
    fn current_position(
        &self,
    ) -> impl Future<Output = Result<Coordinates, LocationError>> + Send;
}

/// Geolocation that always reports the same outcome.
///
/// Stands in for a device location service in demos and tests.
#[derive(Debug, Clone, Copy)]
pub struct MockGeolocation {
    outcome: Result<Coordinates, LocationError>,
}

impl MockGeolocation {
    #[must_use]
    pub const fn at(position: Coordinates) -> Self {
        Self { outcome: Ok(position) }
    }

    #[must_use]
    pub const fn failing(error: LocationError) -> Self {
        Self { outcome: Err(error) }
    }
}

impl Geolocation for MockGeolocation {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        self.outcome
    }
}
