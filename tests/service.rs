#![allow(missing_docs)]


use std::time::Duration;

use pretty_assertions::assert_eq;
use tracing_subscriber::EnvFilter;
use train_delay::{
    Config, Coordinates, DEFAULT_LOCATION, Error, LocationError, Maneuver, MockGeolocation,
    RiskLevel, Service,
};

use self::provider::{MockClock, config};

fn service() -> Service<MockClock> {
    // several tests share the process; only the first subscriber sticks
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();

    Service::new(config(), MockClock::new())
}

// Should return the scenario for a known train.
#[tokio::test]
async fn known_train() {
    let prediction =
        service().predict_train_delay("train 205", None).await.expect("should predict");

    assert_eq!(prediction.train_number, "Train 205");
    assert_eq!(prediction.delay_minutes, 12);
    assert_eq!(prediction.risk_level, RiskLevel::Medium);
}

// Should recompute the ETA for a destination.
#[tokio::test]
async fn destination_eta() {
    let prediction = service()
        .predict_train_delay("Train 412", Some("Westville"))
        .await
        .expect("should predict");

    // 14:00 + 22 minutes travel + 25 minutes late
    assert_eq!(prediction.eta, "02:47 PM");
    assert_eq!(prediction.risk_level, RiskLevel::High);
}

// Should reject a train number outside 100-999.
#[tokio::test]
async fn invalid_train() {
    let service = service();

    let err = service.predict_train_delay("train 000", None).await.unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
    assert_eq!(err.code(), "invalid_input");

    let err = service.predict_train_delay("the express", None).await.unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}

// Should synthesize a prediction for an unknown train.
#[tokio::test]
async fn synthesized_train() {
    let prediction =
        service().predict_train_delay("train 777", None).await.expect("should predict");

    assert_eq!(prediction.train_number, "Train 777");
    assert!([0, 5, 8, 12, 15, 20].contains(&prediction.delay_minutes));
    assert_eq!(prediction.risk_level, RiskLevel::from_delay(prediction.delay_minutes));
    assert_eq!(prediction.alternatives.is_empty(), prediction.delay_minutes <= 10);
}

// The same seed should give the same synthesized prediction.
#[tokio::test]
async fn seeded_predictions_repeat() {
    let first = service().predict_train_delay("train 777", None).await.unwrap();
    let second = service().predict_train_delay("train 777", None).await.unwrap();
    assert_eq!(first, second);
}

// Should find the train for a route.
#[tokio::test]
async fn by_route() {
    let service = service();

    let prediction = service
        .predict_train_delay_by_route("Durban Station", "Umhlanga")
        .await
        .expect("should predict");
    assert_eq!(prediction.train_number, "Train 205");

    let prediction =
        service.predict_train_delay_by_route("Mars", "Venus").await.expect("should predict");
    assert_eq!(prediction.train_number, "Train 301");

    let err = service.predict_train_delay_by_route("", "Umhlanga").await.unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}

// Should build a route map from a prediction.
#[tokio::test]
async fn map_from_prediction() {
    let service = service();
    let prediction = service.predict_train_delay("train 518", None).await.unwrap();

    let map = service.map_for_prediction(&prediction);
    assert_eq!(map.current_station().map(|s| s.name.as_str()), Some("Umgeni"));
    assert_eq!(map.stations.iter().filter(|s| s.is_passed).count(), map.current_index);

    // cancelled train has no location: placed by delay
    let prediction = service.predict_train_delay("train 404", None).await.unwrap();
    assert_eq!(prediction.error_message.as_deref(), Some("Train 404 is not running today"));
    let map = service.map_for_prediction(&prediction);
    assert_eq!(map.current_index, 3);
}

// Should return the three nearest stops, nearest first.
#[tokio::test]
async fn nearby_stops() {
    let stops = service().nearby_bus_stops(Coordinates::new(40.7500, -73.9700), Some(3)).await;

    assert_eq!(stops.len(), 3);
    assert!(stops.windows(2).all(|pair| pair[0].distance <= pair[1].distance));
}

// Should default to the configured number of stops.
#[tokio::test]
async fn nearby_default_limit() {
    let service = Service::new(Config { max_nearby_stops: 2, ..config() }, MockClock::default());
    let stops = service.nearby_bus_stops(Coordinates::new(40.7500, -73.9700), None).await;
    assert_eq!(stops.len(), 2);
}

// Should search around the device when it can be located.
#[tokio::test]
async fn located_device() {
    let here = Coordinates::new(40.7500, -73.9700);
    let nearby = service().locate_nearby_bus_stops(&MockGeolocation::at(here)).await;

    assert_eq!(nearby.origin, here);
    assert_eq!(nearby.stops.len(), 5);
    assert_eq!(nearby.notice(), None);
}

// Should fall back to the default location and report why.
#[tokio::test]
async fn location_fallback() {
    let service = service();

    for error in
        [LocationError::PermissionDenied, LocationError::PositionUnavailable, LocationError::Timeout]
    {
        let nearby = service.locate_nearby_bus_stops(&MockGeolocation::failing(error)).await;

        assert_eq!(nearby.origin, DEFAULT_LOCATION);
        assert_eq!(nearby.location_error, Some(error));
        assert_eq!(nearby.notice(), Some(error.to_string()));
        assert!(!nearby.stops.is_empty());
    }
}

// Out-of-range device coordinates count as an unavailable position.
#[tokio::test]
async fn bogus_device_position() {
    let geolocation = MockGeolocation::at(Coordinates::new(200.0, 0.0));
    let nearby = service().locate_nearby_bus_stops(&geolocation).await;

    assert_eq!(nearby.origin, DEFAULT_LOCATION);
    assert_eq!(nearby.location_error, Some(LocationError::PositionUnavailable));
}

// Should give directions that start east and end at the stop.
#[tokio::test]
async fn directions() {
    let service = service();
    let from = Coordinates::new(40.7500, -73.9700);
    let stop = service.nearby_bus_stops(from, Some(1)).await.remove(0);

    let route =
        service.directions_to_bus_stop(from, stop.coordinates(), &stop.name, stop.distance).await;

    assert_eq!(route.steps.first().map(|s| s.instruction.as_str()), Some("Head east"));
    assert_eq!(route.steps.last().map(|s| s.maneuver), Some(Maneuver::Arrive));
    assert_eq!(route.total_distance, stop.distance);
    assert_eq!(route.route_points.first(), Some(&from));
    assert_eq!(route.route_points.last(), Some(&stop.coordinates()));
}

// Should wait out the configured latency.
#[tokio::test(start_paused = true)]
async fn simulated_latency() {
    let service = Service::new(
        Config { latency: Duration::from_millis(1500), ..config() },
        MockClock::new(),
    );

    let started = tokio::time::Instant::now();
    service.predict_train_delay("train 101", None).await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(1500));
}

// Should serialize for the UI.
#[tokio::test]
async fn wire_format() {
    let nearby = service()
        .locate_nearby_bus_stops(&MockGeolocation::failing(LocationError::Timeout))
        .await;
    let value = serde_json::to_value(&nearby).expect("should serialize");

    assert_eq!(value["locationError"], "timeout");
    assert_eq!(value["origin"]["latitude"], DEFAULT_LOCATION.latitude);
}
