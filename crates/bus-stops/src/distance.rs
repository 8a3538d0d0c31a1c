use common::Coordinates;

pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

// walking pace: 12 minutes per kilometre
const MINUTES_PER_KM: f64 = 12.0;

/// Great-circle distance between two points in metres.
#[must_use]
pub fn haversine(from: Coordinates, to: Coordinates) -> f64 {
    let lat1_rad = from.latitude.to_radians();
    let lat2_rad = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Minutes to walk `distance` metres, rounded to the nearest minute.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn walk_minutes(distance: u32) -> u32 {
    (f64::from(distance) / 1000.0 * MINUTES_PER_KM).round() as u32
}

#[must_use]
pub fn walk_time_label(minutes: u32) -> String {
    match minutes {
        0 => "< 1 min walk".to_string(),
        1 => "1 min walk".to_string(),
        n => format!("{n} min walk"),
    }
}
