use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::{DateTime, Duration, TimeZone};

/// Travel time used when the destination is not in the table.
pub const DEFAULT_TRAVEL_MINUTES: u32 = 20;

static TRAVEL_MINUTES: LazyLock<HashMap<&str, u32>> = LazyLock::new(|| {
    HashMap::from([
        ("durban station", 15),
        ("umhlanga", 35),
        ("pinetown", 30),
        ("westville", 22),
        ("berea", 12),
        ("ballito", 50),
        ("congella", 10),
    ])
});

/// Scheduled travel time to a destination in minutes.
#[must_use]
pub fn travel_minutes(destination: &str) -> u32 {
    let key = destination.trim().to_lowercase();
    TRAVEL_MINUTES.get(key.as_str()).copied().unwrap_or(DEFAULT_TRAVEL_MINUTES)
}

/// Estimated arrival at `destination`: now plus the scheduled travel time plus
/// the expected delay.
#[must_use]
pub fn estimate_arrival<Tz: TimeZone>(
    now: &DateTime<Tz>, delay_minutes: u32, destination: &str,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let minutes = travel_minutes(destination) + delay_minutes;
    format_time(&(now.clone() + Duration::minutes(i64::from(minutes))))
}

/// Formats a time of day the way an en-US locale does with two-digit hours
/// and minutes: `02:35 PM`.
#[must_use]
pub fn format_time<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format("%I:%M %p").to_string()
}
