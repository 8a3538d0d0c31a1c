//! # Prediction
//!
//! Delay predictions for trains, looked up from a fixed scenario table or
//! synthesized from an injected random source, plus arrival estimates and
//! origin/destination to train matching.

mod eta;
mod model;
mod predict;
mod routes;
mod scenarios;
mod synthesize;

pub use self::eta::{DEFAULT_TRAVEL_MINUTES, estimate_arrival, format_time, travel_minutes};
pub use self::model::*;
pub use self::predict::{extract_train_number, predict, predict_by_route, validate_train_number};
pub use self::routes::{DEFAULT_TRAIN, match_route};
pub use self::scenarios::scenario;
pub use self::synthesize::{CAUSES, DELAY_CHOICES, synthesize};
