use serde::{Deserialize, Serialize};

use crate::stations::stations_for;

/// A station on the route map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub name: String,

    /// Percentage along the route, 0 to 100.
    pub position: f64,

    pub is_passed: bool,
    pub is_current: bool,
}

/// Route map for one train.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapData {
    pub stations: Vec<Station>,
    pub current_index: usize,

    /// Percentage of the route covered, 0 to 100.
    pub progress: f64,
}

impl MapData {
    #[must_use]
    pub fn current_station(&self) -> Option<&Station> {
        self.stations.get(self.current_index)
    }
}

/// Builds the route map for a train from its free-text location and delay.
///
/// The current station is the first one whose name and the location text
/// contain one another. Without a match the delay places the train: on time
/// at 80% of the stations, under 10 minutes late at 60%, under 20 at 40% and
/// 20% beyond that.
#[must_use]
pub fn generate(train_number: &str, current_location: &str, delay_minutes: u32) -> MapData {
    let names = stations_for(train_number, current_location);
    let current_index = locate(&names, current_location)
        .unwrap_or_else(|| index_for_delay(names.len(), delay_minutes));

    let count = names.len();
    let stations = names
        .into_iter()
        .enumerate()
        .map(|(index, name)| Station {
            name,
            position: percent(index, count),
            is_passed: index < current_index,
            is_current: index == current_index,
        })
        .collect::<Vec<_>>();

    let progress = percent(current_index, count);
    tracing::debug!(train_number, current_index, progress, "generated route map");

    MapData { stations, current_index, progress }
}

fn locate(names: &[String], location: &str) -> Option<usize> {
    let location = location.trim().to_lowercase();
    if location.is_empty() {
        return None;
    }

    names.iter().position(|name| {
        let name = name.to_lowercase();
        location.contains(&name) || name.contains(&location)
    })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
fn index_for_delay(count: usize, delay_minutes: u32) -> usize {
    let fraction = match delay_minutes {
        0 => 0.8,
        1..10 => 0.6,
        10..20 => 0.4,
        _ => 0.2,
    };
    (count as f64 * fraction).floor() as usize
}

// `index / (count - 1) * 100`, with a single station sitting at 0.
#[allow(clippy::cast_precision_loss)]
fn percent(index: usize, count: usize) -> f64 {
    if count <= 1 {
        return 0.0;
    }
    index as f64 / (count - 1) as f64 * 100.0
}
