use common::Coordinates;
use serde::{Deserialize, Serialize};

use crate::distance::{haversine, walk_minutes, walk_time_label};

/// Number of stops returned when the caller does not say.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// A bus stop ranked against the rider's position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusStop {
    pub id: String,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub routes: Vec<String>,

    /// Distance from the rider in whole metres.
    pub distance: u32,
    pub estimated_walk_time: String,
}

impl BusStop {
    #[must_use]
    pub const fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

struct StopRecord {
    id: &'static str,
    name: &'static str,
    address: &'static str,
    latitude: f64,
    longitude: f64,
    routes: &'static [&'static str],
}

impl StopRecord {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn ranked_from(&self, position: Coordinates) -> BusStop {
        let distance =
            haversine(position, Coordinates::new(self.latitude, self.longitude)).round() as u32;

        BusStop {
            id: self.id.to_string(),
            name: self.name.to_string(),
            address: self.address.to_string(),
            latitude: self.latitude,
            longitude: self.longitude,
            routes: self.routes.iter().map(ToString::to_string).collect(),
            distance,
            estimated_walk_time: walk_time_label(walk_minutes(distance)),
        }
    }
}

const STOPS: [StopRecord; 8] = [
    StopRecord {
        id: "BS001",
        name: "Lexington Ave & E 50th St",
        address: "Lexington Ave & E 50th St, New York, NY 10022",
        latitude: 40.7561,
        longitude: -73.9714,
        routes: &["M101", "M102", "M103"],
    },
    StopRecord {
        id: "BS002",
        name: "3rd Ave & E 47th St",
        address: "3rd Ave & E 47th St, New York, NY 10017",
        latitude: 40.7537,
        longitude: -73.9718,
        routes: &["M101", "M102", "M103"],
    },
    StopRecord {
        id: "BS003",
        name: "2nd Ave & E 45th St",
        address: "2nd Ave & E 45th St, New York, NY 10017",
        latitude: 40.7515,
        longitude: -73.9690,
        routes: &["M15", "M15-SBS"],
    },
    StopRecord {
        id: "BS004",
        name: "1st Ave & E 42nd St",
        address: "1st Ave & E 42nd St, New York, NY 10017",
        latitude: 40.7490,
        longitude: -73.9695,
        routes: &["M15", "M42"],
    },
    StopRecord {
        id: "BS005",
        name: "E 42nd St & Park Ave",
        address: "E 42nd St & Park Ave, New York, NY 10017",
        latitude: 40.7519,
        longitude: -73.9775,
        routes: &["M42", "M101"],
    },
    StopRecord {
        id: "BS006",
        name: "Madison Ave & E 53rd St",
        address: "Madison Ave & E 53rd St, New York, NY 10022",
        latitude: 40.7598,
        longitude: -73.9747,
        routes: &["M1", "M2", "M3", "M4"],
    },
    StopRecord {
        id: "BS007",
        name: "5th Ave & W 57th St",
        address: "5th Ave & W 57th St, New York, NY 10019",
        latitude: 40.7637,
        longitude: -73.9738,
        routes: &["M1", "M5"],
    },
    StopRecord {
        id: "BS008",
        name: "E 34th St & 3rd Ave",
        address: "E 34th St & 3rd Ave, New York, NY 10016",
        latitude: 40.7463,
        longitude: -73.9784,
        routes: &["M34-SBS"],
    },
];

/// The `max_results` stops nearest to `position`, nearest first.
///
/// Stops at the same rounded distance keep their table order.
#[must_use]
pub fn nearby(position: Coordinates, max_results: usize) -> Vec<BusStop> {
    let stops = rank(&STOPS, position, max_results);

    tracing::debug!(
        latitude = position.latitude,
        longitude = position.longitude,
        count = stops.len(),
        "ranked nearby bus stops"
    );
    stops
}

fn rank(records: &[StopRecord], position: Coordinates, max_results: usize) -> Vec<BusStop> {
    let mut stops = records.iter().map(|record| record.ranked_from(position)).collect::<Vec<_>>();
    stops.sort_by_key(|stop| stop.distance);
    stops.truncate(max_results);
    stops
}
