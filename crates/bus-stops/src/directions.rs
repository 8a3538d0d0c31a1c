//! Mock walking directions.
//!
//! There is no routing behind these: the turns and street names are picked at
//! random and the path is a straight line with a little wobble. Only the
//! shape is stable (depart, zero to four turns, continue, arrive).

use common::Coordinates;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::distance::walk_minutes;

/// Street names used for the fabricated turns.
pub const STREETS: [&str; 10] = [
    "Main St",
    "Oak Ave",
    "Park Blvd",
    "Elm St",
    "Maple Dr",
    "Cedar Ln",
    "Pine St",
    "Broadway",
    "Market St",
    "Lexington Ave",
];

pub const MAX_TURNS: u32 = 4;
pub const INTERMEDIATE_POINTS: usize = 6;

const DEPART_DISTANCE: u32 = 50;
const JITTER_DEGREES: f64 = 0.0002;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDirections {
    pub steps: Vec<DirectionStep>,

    /// Metres.
    pub total_distance: u32,

    /// Minutes.
    pub total_duration: u32,

    pub route_points: Vec<Coordinates>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionStep {
    pub instruction: String,
    pub distance: u32,
    pub duration: u32,
    pub maneuver: Maneuver,
}

impl DirectionStep {
    fn new(
        instruction: impl Into<String>, distance: u32, duration: u32, maneuver: Maneuver,
    ) -> Self {
        Self { instruction: instruction.into(), distance, duration, maneuver }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Maneuver {
    Depart,
    TurnLeft,
    TurnRight,
    Straight,
    Arrive,
}

/// Walking directions from `from` to the stop at `to`, `distance` metres away.
///
/// Step distances always add up to `distance`: walks shorter than the
/// opening 50 m leg are walked entirely in that leg.
pub fn directions<R>(
    from: Coordinates, to: Coordinates, stop_name: &str, distance: u32, rng: &mut R,
) -> RouteDirections
where
    R: Rng + ?Sized,
{
    let turns = rng.gen_range(0..=MAX_TURNS);
    let depart = distance.min(DEPART_DISTANCE);
    let remaining = distance - depart;
    let leg = remaining / (turns + 1);

    let mut steps =
        vec![DirectionStep::new("Head east", depart, walk_minutes(depart), Maneuver::Depart)];

    for _ in 0..turns {
        let (side, maneuver) = if rng.gen_bool(0.5) {
            ("left", Maneuver::TurnLeft)
        } else {
            ("right", Maneuver::TurnRight)
        };
        let street = STREETS.choose(rng).copied().unwrap_or(STREETS[0]);
        steps.push(DirectionStep::new(
            format!("Turn {side} onto {street}"),
            leg,
            walk_minutes(leg),
            maneuver,
        ));
    }

    let last_leg = remaining - leg * turns;
    steps.push(DirectionStep::new(
        format!("Continue straight toward {stop_name}"),
        last_leg,
        walk_minutes(last_leg),
        Maneuver::Straight,
    ));
    steps.push(DirectionStep::new(format!("Arrive at {stop_name}"), 0, 0, Maneuver::Arrive));

    tracing::debug!(stop_name, distance, turns, "generated walking directions");

    RouteDirections {
        steps,
        total_distance: distance,
        total_duration: walk_minutes(distance),
        route_points: route_points(from, to),
    }
}

/// Straight line from `from` to `to` through evenly spaced points, each nudged
/// slightly so the drawn path does not look ruled.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn route_points(from: Coordinates, to: Coordinates) -> Vec<Coordinates> {
    let segments = (INTERMEDIATE_POINTS + 1) as f64;

    let mut points = Vec::with_capacity(INTERMEDIATE_POINTS + 2);
    points.push(from);
    for index in 1..=INTERMEDIATE_POINTS {
        let phase = index as f64;
        let t = phase / segments;
        points.push(Coordinates::new(
            (to.latitude - from.latitude).mul_add(t, from.latitude) + JITTER_DEGREES * phase.sin(),
            (to.longitude - from.longitude).mul_add(t, from.longitude)
                + JITTER_DEGREES * phase.cos(),
        ));
    }
    points.push(to);
    points
}
