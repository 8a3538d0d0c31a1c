use chrono::{DateTime, Duration, TimeZone};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::eta::{DEFAULT_TRAVEL_MINUTES, format_time};
use crate::model::{Alternative, DelayPrediction, RiskLevel};

/// Delays a synthesized prediction can carry, in minutes.
pub const DELAY_CHOICES: [u32; 6] = [0, 5, 8, 12, 15, 20];

/// Causes reported for a late synthesized train.
pub const CAUSES: [&str; 6] = [
    "Signal delays",
    "Track maintenance",
    "High passenger volume",
    "Weather conditions",
    "Technical issue",
    "Crew change delay",
];

const ON_SCHEDULE: &str = "On schedule";
const GPS_PROBABILITY: f64 = 0.7;
const WEATHER_PROBABILITY: f64 = 0.8;

/// Makes up a plausible prediction for a train that has no scenario.
///
/// The result is random by design; only its shape is stable. Delays above
/// 10 minutes suggest the train five numbers on as an alternative.
pub fn synthesize<Tz, R>(number: u32, now: &DateTime<Tz>, rng: &mut R) -> DelayPrediction
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
    R: Rng + ?Sized,
{
    let delay_minutes = *DELAY_CHOICES.choose(rng).unwrap_or(&0);
    let arrival = now.clone() + Duration::minutes(i64::from(DEFAULT_TRAVEL_MINUTES + delay_minutes));

    let cause = if delay_minutes == 0 {
        ON_SCHEDULE
    } else {
        CAUSES.choose(rng).copied().unwrap_or(CAUSES[0])
    };

    let alternatives = if delay_minutes > 10 {
        vec![Alternative::train(format!("Train {}", number + 5), "15 min")]
    } else {
        vec![]
    };

    DelayPrediction {
        train_number: format!("Train {number}"),
        eta: format_time(&arrival),
        delay_minutes,
        risk_level: RiskLevel::from_delay(delay_minutes),
        cause: cause.to_string(),
        current_location: None,
        alternatives,
        has_gps_data: rng.gen_bool(GPS_PROBABILITY),
        has_weather_data: rng.gen_bool(WEATHER_PROBABILITY),
        error_message: None,
    }
}
