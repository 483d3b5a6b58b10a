//! Gravistep - Fixed-step Newtonian gravity simulator
//!
//! A library crate that advances a small set of point masses under
//! pairwise gravity and records each body's trajectory for display
//! or analysis.

pub mod diagnostics;
pub mod error;
pub mod physics;
pub mod playback;
pub mod scenarios;
pub mod trajectory;
pub mod types;

#[cfg(test)]
pub mod test_utils;

pub use error::{ConfigError, SimulationError};
pub use physics::{DirectGravity, ForceModel, Integrator, SimulationPlugin, SimulationSetup};
pub use trajectory::TrajectoryHistory;
pub use types::{Body, SimulationConfig};
