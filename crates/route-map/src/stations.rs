use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Stations used when neither the train nor its location says anything
/// about the route.
pub const GENERIC_STATIONS: [&str; 4] =
    ["Departure Station", "Midway Stop", "Approaching Stop", "Arrival Station"];

const JUNCTION: &str = "Junction Point";
const TRANSFER: &str = "Transfer Station";

static STATIONS: LazyLock<HashMap<&str, Vec<&str>>> = LazyLock::new(|| {
    HashMap::from([
        ("101", vec!["Durban Station", "Berea", "Greyville", "Umgeni"]),
        (
            "205",
            vec!["Durban Station", "Berea", "Greyville", "Umgeni", "Durban North", "Umhlanga"],
        ),
        (
            "206",
            vec!["Umhlanga", "Durban North", "Umgeni", "Greyville", "Berea", "Durban Station"],
        ),
        (
            "301",
            vec!["Durban Station", "Congella", "Rossburgh", "Bellair", "Malvern", "Pinetown"],
        ),
        ("412", vec!["Durban Station", "Berea", "Sherwood", "Westville"]),
        ("518", vec!["Berea", "Umgeni", "Umhlanga", "Ballito"]),
    ])
});

static JOURNEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bfrom\s+(.+?)\s+to\s+(.+)$").expect("journey pattern should compile")
});

/// Splits "En route from X to Y" into its origin and destination.
#[must_use]
pub fn parse_journey(location: &str) -> Option<(&str, &str)> {
    let captures = JOURNEY.captures(location.trim())?;
    let origin = captures.get(1)?.as_str().trim();
    let destination = captures.get(2)?.as_str().trim();
    (!origin.is_empty() && !destination.is_empty()).then_some((origin, destination))
}

/// Ordered stations for a train.
///
/// Trains with a known line use it. Otherwise a journey in the location text
/// ("from X to Y") gives a four-stop route between X and Y, and failing that
/// the generic route is used.
#[must_use]
pub fn stations_for(train_number: &str, current_location: &str) -> Vec<String> {
    let key = train_key(train_number);

    if let Some(stations) = STATIONS.get(key.as_str()) {
        return stations.iter().map(ToString::to_string).collect();
    }

    if let Some((origin, destination)) = parse_journey(current_location) {
        tracing::debug!(train_number, origin, destination, "building route from journey");
        return vec![
            origin.to_string(),
            JUNCTION.to_string(),
            TRANSFER.to_string(),
            destination.to_string(),
        ];
    }

    GENERIC_STATIONS.iter().map(ToString::to_string).collect()
}

// "Train 205" and "205" share a line.
fn train_key(train_number: &str) -> String {
    let digits: String = train_number
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();

    if digits.is_empty() { train_number.trim().to_string() } else { digits }
}
