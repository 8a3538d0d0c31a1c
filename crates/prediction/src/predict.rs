use std::ops::RangeInclusive;
use std::sync::LazyLock;

use common::{Clock, Result, invalid_input};
use rand::Rng;
use regex::Regex;

use crate::eta::estimate_arrival;
use crate::model::DelayPrediction;
use crate::routes::match_route;
use crate::scenarios::scenario;
use crate::synthesize::synthesize;

const TRAIN_NUMBERS: RangeInclusive<u32> = 100..=999;

static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[0-9]+").expect("digit pattern should compile"));

/// First run of ASCII digits in free text, e.g. "205" from "train 205 to Umhlanga".
#[must_use]
pub fn extract_train_number(input: &str) -> Option<&str> {
    DIGITS.find(input).map(|found| found.as_str())
}

/// Parses the train number out of free text and checks it is in 100..=999.
///
/// # Errors
///
/// Returns `Error::InvalidInput` when the text has no digits or the number is
/// out of range.
pub fn validate_train_number(input: &str) -> Result<u32> {
    let Some(digits) = extract_train_number(input) else {
        return Err(invalid_input!("no train number found in {:?}", input));
    };

    // numbers too long for u32 are out of range too
    digits.parse::<u32>().ok().filter(|number| TRAIN_NUMBERS.contains(number)).ok_or_else(|| {
        invalid_input!(
            "train number {} is outside the range {}-{}",
            digits,
            TRAIN_NUMBERS.start(),
            TRAIN_NUMBERS.end()
        )
    })
}

/// Predicts the delay for the train named in `input`.
///
/// Scenario table entries are returned as authored; other numbers get a
/// synthesized prediction. When `destination` is given the ETA is recomputed
/// for it.
///
/// # Errors
///
/// Returns `Error::InvalidInput` when no valid train number can be read from
/// `input`.
pub fn predict<C, R>(
    input: &str, destination: Option<&str>, clock: &C, rng: &mut R,
) -> Result<DelayPrediction>
where
    C: Clock + ?Sized,
    R: Rng + ?Sized,
{
    let number = validate_train_number(input)?;
    let now = clock.now_local();

    let mut prediction = if let Some(record) = scenario(number) {
        tracing::debug!(number, "using scenario prediction");
        record.clone()
    } else {
        tracing::debug!(number, "synthesizing prediction");
        synthesize(number, &now, rng)
    };

    if let Some(destination) = destination.filter(|name| !name.trim().is_empty()) {
        prediction.eta = estimate_arrival(&now, prediction.delay_minutes, destination);
    }

    Ok(prediction)
}

/// Predicts the delay for the train serving `origin` to `destination`.
///
/// # Errors
///
/// Returns `Error::InvalidInput` when either station name is blank.
pub fn predict_by_route<C, R>(
    origin: &str, destination: &str, clock: &C, rng: &mut R,
) -> Result<DelayPrediction>
where
    C: Clock + ?Sized,
    R: Rng + ?Sized,
{
    if origin.trim().is_empty() || destination.trim().is_empty() {
        return Err(invalid_input!("both origin and destination stations are required"));
    }

    let train = match_route(origin, destination);
    tracing::debug!(origin, destination, train, "matched route to train");

    predict(train, Some(destination), clock, rng)
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use chrono_tz::Tz;
    use common::Error;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::model::RiskLevel;

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now_utc(&self) -> DateTime<Utc> {
            self.0
        }

        fn timezone(&self) -> Tz {
            chrono_tz::Africa::Johannesburg
        }
    }

    fn clock() -> FixedClock {
        // 14:00 in Johannesburg
        FixedClock(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap())
    }

    #[test]
    fn first_digit_run() {
        assert_eq!(extract_train_number("train 205"), Some("205"));
        assert_eq!(extract_train_number("T412 platform 3"), Some("412"));
        assert_eq!(extract_train_number("no digits here"), None);
    }

    #[test]
    fn missing_number() {
        let err = validate_train_number("express").unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn out_of_range() {
        for input in ["train 000", "99", "1000", "train 12345678901234567890"] {
            let err = validate_train_number(input).unwrap_err();
            assert!(matches!(err, Error::InvalidInput(_)), "{input} should be rejected");
        }
        assert_eq!(validate_train_number("100").unwrap(), 100);
        assert_eq!(validate_train_number("999").unwrap(), 999);
    }

    #[test]
    fn scenario_unchanged() {
        let mut rng = StdRng::seed_from_u64(1);
        let prediction = predict("train 205", None, &clock(), &mut rng).unwrap();

        assert_eq!(&prediction, scenario(205).unwrap());
        assert_eq!(prediction.train_number, "Train 205");
        assert_eq!(prediction.delay_minutes, 12);
        assert_eq!(prediction.risk_level, RiskLevel::Medium);
    }

    const SCENARIO_TRAINS: [u32; 6] = [101, 205, 301, 404, 412, 518];

    // Table entries come back as authored, including a risk level that does
    // not follow the delay thresholds (518) and a cancelled service (404).
    #[test]
    fn every_scenario_as_authored() {
        let mut rng = StdRng::seed_from_u64(1);

        for number in SCENARIO_TRAINS {
            let expected = scenario(number).expect("train should be in the table");
            let prediction = predict(&format!("train {number}"), None, &clock(), &mut rng).unwrap();
            assert_eq!(&prediction, expected);
        }

        let cancelled = predict("404", None, &clock(), &mut rng).unwrap();
        assert_eq!(cancelled.error_message.as_deref(), Some("Train 404 is not running today"));
        assert_eq!(cancelled.eta, "--:--");
        assert_eq!(cancelled.current_location, None);

        let curated = predict("518", None, &clock(), &mut rng).unwrap();
        assert_eq!(curated.risk_level, RiskLevel::High);
        assert_ne!(curated.risk_level, RiskLevel::from_delay(curated.delay_minutes));
    }

    // A destination rewrites the ETA and nothing else.
    #[test]
    fn destination_changes_only_eta() {
        let mut rng = StdRng::seed_from_u64(1);

        for number in SCENARIO_TRAINS {
            let mut expected = scenario(number).expect("train should be in the table").clone();
            let prediction =
                predict(&number.to_string(), Some("Westville"), &clock(), &mut rng).unwrap();

            let now = clock().now_local();
            expected.eta = estimate_arrival(&now, expected.delay_minutes, "Westville");
            assert_eq!(prediction, expected);
        }
    }

    #[test]
    fn destination_overrides_eta() {
        let mut rng = StdRng::seed_from_u64(1);
        let prediction = predict("205", Some("Umhlanga"), &clock(), &mut rng).unwrap();

        // 14:00 + 35 travel + 12 delay
        assert_eq!(prediction.eta, "02:47 PM");

        let mut expected = scenario(205).unwrap().clone();
        expected.eta = "02:47 PM".to_string();
        assert_eq!(prediction, expected);
    }

    #[test]
    fn blank_destination_ignored() {
        let mut rng = StdRng::seed_from_u64(1);
        let prediction = predict("205", Some("  "), &clock(), &mut rng).unwrap();
        assert_eq!(prediction.eta, scenario(205).unwrap().eta);
    }

    #[test]
    fn synthesized_when_unknown() {
        let mut rng = StdRng::seed_from_u64(3);
        let prediction = predict("train 777", None, &clock(), &mut rng).unwrap();

        assert_eq!(prediction.train_number, "Train 777");
        assert_eq!(prediction.risk_level, RiskLevel::from_delay(prediction.delay_minutes));
    }

    #[test]
    fn by_route() {
        let mut rng = StdRng::seed_from_u64(1);
        let prediction =
            predict_by_route("Durban Station", "Umhlanga", &clock(), &mut rng).unwrap();

        assert_eq!(prediction.train_number, "Train 205");
        assert_eq!(prediction.eta, "02:47 PM");
    }

    #[test]
    fn by_route_default_train() {
        let mut rng = StdRng::seed_from_u64(1);
        let prediction = predict_by_route("Mars", "Venus", &clock(), &mut rng).unwrap();

        // default train 301, unknown destination: 14:00 + 20 + 5
        assert_eq!(prediction.train_number, "Train 301");
        assert_eq!(prediction.eta, "02:25 PM");
    }

    #[test]
    fn by_route_requires_stations() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = predict_by_route(" ", "Umhlanga", &clock(), &mut rng).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));

        let err = predict_by_route("Durban Station", "", &clock(), &mut rng).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
