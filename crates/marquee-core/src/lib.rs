//! Marquee Core
//!
//! Shared geometry, element identifiers and logging for the marquee crates.

pub mod geometry;
pub mod id;
pub mod logging;
pub mod math;
pub mod profiling;

pub use geometry::{Dimensions, Position};
pub use id::{ElementId, IdSequence};
