//! Train delay service errors

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type used across the crates.
pub type Result<T> = std::result::Result<T, Error>;

/// Domain level error type returned by the prediction and bus stop services.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Error {
    /// The caller supplied input that cannot be used, such as a missing or
    /// out-of-range train number or an empty station name.
    #[error("code: invalid_input, description: {0}")]
    InvalidInput(String),

    /// The device location could not be determined.
    #[error("code: location_unavailable, description: {0}")]
    LocationUnavailable(LocationError),
}

impl Error {
    /// Returns the stable error code associated with the variant.
    #[must_use]
    pub const fn code(&self) -> &str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::LocationUnavailable(_) => "location_unavailable",
        }
    }

    /// Returns the error description.
    #[must_use]
    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl From<LocationError> for Error {
    fn from(err: LocationError) -> Self {
        Self::LocationUnavailable(err)
    }
}

/// Failure kinds reported by a device geolocation provider.
///
/// Each kind has its own user-facing message. None of them is fatal: callers
/// fall back to a default location.
#[derive(Error, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LocationError {
    #[error("Location access denied. Enable location permissions to find bus stops near you.")]
    PermissionDenied,

    #[error("Location information is unavailable. Showing bus stops near a default location.")]
    PositionUnavailable,

    #[error("Location request timed out. Showing bus stops near a default location.")]
    Timeout,
}

#[macro_export]
macro_rules! invalid_input {
    ($fmt:expr, $($arg:tt)*) => {
        $crate::Error::InvalidInput(format!($fmt, $($arg)*))
    };
    ($err:expr $(,)?) => {
        $crate::Error::InvalidInput(format!($err))
    };
}
