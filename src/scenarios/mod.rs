//! Predefined initial conditions for simulation runs.
//!
//! A scenario pairs a body set with the timestep and run length that suit
//! it. Presets live in [`presets`]; look one up by id with [`find`].

pub mod presets;

use crate::types::{Body, SimulationConfig, G};

pub use presets::SCENARIOS;

/// A predefined scenario configuration.
#[derive(Clone, Copy, Debug)]
pub struct Scenario {
    /// Unique identifier for the scenario.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Brief description of the scenario.
    pub description: &'static str,
    /// Builds the initial body set.
    pub build: fn() -> Vec<Body>,
    /// Timestep (seconds).
    pub dt: f64,
    /// Number of steps to run.
    pub steps: usize,
}

impl Scenario {
    /// Fresh initial body set.
    pub fn bodies(&self) -> Vec<Body> {
        (self.build)()
    }

    /// Run parameters for this scenario.
    pub fn config(&self) -> SimulationConfig {
        SimulationConfig::new(G, self.dt, self.steps)
    }
}

/// Look up a preset by id.
pub fn find(id: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.id == id)
}
