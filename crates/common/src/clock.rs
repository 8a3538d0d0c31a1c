use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::warn;

/// Source of the current time and the timezone arrival times are shown in.
pub trait Clock: Send + Sync {
    fn now_utc(&self) -> DateTime<Utc>;

    fn timezone(&self) -> Tz;

    /// Current time in the clock's timezone.
    fn now_local(&self) -> DateTime<Tz> {
        self.now_utc().with_timezone(&self.timezone())
    }
}

#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    timezone: Tz,
}

impl SystemClock {
    #[must_use]
    pub const fn from_timezone(timezone: Tz) -> Self {
        Self { timezone }
    }

    /// Builds a clock from an IANA timezone name, falling back to UTC when the
    /// name is not recognised.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.parse::<Tz>() {
            Ok(tz) => Self::from_timezone(tz),
            Err(err) => {
                warn!(timezone = %name, error = %err, "Invalid timezone; defaulting to UTC");
                Self::from_timezone(chrono_tz::UTC)
            }
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::from_timezone(chrono_tz::UTC)
    }
}

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn timezone(&self) -> Tz {
        self.timezone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_timezone() {
        let clock = SystemClock::from_name("Africa/Johannesburg");
        assert_eq!(clock.timezone(), chrono_tz::Africa::Johannesburg);
    }

    #[test]
    fn unknown_timezone() {
        let clock = SystemClock::from_name("Middle/Earth");
        assert_eq!(clock.timezone(), chrono_tz::UTC);
    }
}
