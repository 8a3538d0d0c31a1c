//! # Common
//!
//! Types shared by the train delay crates: the domain error, coordinates and
//! the clock abstraction used to compute arrival times.

mod clock;
mod error;
mod geo;

pub use crate::clock::*;
pub use crate::error::*;
pub use crate::geo::*;
