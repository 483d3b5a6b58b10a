//! Physics simulation for point masses under Newtonian gravity.
//!
//! This module provides the force model and the fixed-step integrator.
//! [`SimulationPlugin`] runs a configured [`SimulationSetup`] once at
//! startup and publishes the resulting
//! [`TrajectoryHistory`](crate::trajectory::TrajectoryHistory) as a resource.

mod gravity;
mod integrator;

#[cfg(test)]
mod proptest_physics;

use bevy::math::DVec2;
use bevy::prelude::*;

pub use gravity::{pairwise_force, DegeneratePair, DirectGravity, ForceModel};
pub use integrator::{Integrator, RunState};

use crate::diagnostics;
use crate::error::SimulationError;
use crate::scenarios::Scenario;
use crate::types::{Body, SimulationConfig};

/// Plugin that runs the configured simulation during `Startup`.
///
/// Requires a [`SimulationSetup`] resource. On success inserts
/// [`TrajectoryHistory`](crate::trajectory::TrajectoryHistory) and
/// [`RunSummary`]; on failure inserts [`SimulationFailure`].
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, run_simulation);
    }
}

/// Initial bodies and parameters for the startup run.
#[derive(Resource, Clone, Debug)]
pub struct SimulationSetup {
    pub bodies: Vec<Body>,
    pub config: SimulationConfig,
}

impl SimulationSetup {
    pub fn new(bodies: Vec<Body>, config: SimulationConfig) -> Self {
        Self { bodies, config }
    }

    pub fn from_scenario(scenario: &Scenario) -> Self {
        Self::new(scenario.bodies(), scenario.config())
    }
}

/// Conservation figures for a completed run.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub steps: usize,
    pub initial_momentum: DVec2,
    pub final_momentum: DVec2,
    pub initial_energy: f64,
    pub final_energy: f64,
}

impl RunSummary {
    fn new(initial: &[Body], last: &[Body], config: &SimulationConfig, steps: usize) -> Self {
        Self {
            steps,
            initial_momentum: diagnostics::total_momentum(initial),
            final_momentum: diagnostics::total_momentum(last),
            initial_energy: diagnostics::total_energy(initial, config.g),
            final_energy: diagnostics::total_energy(last, config.g),
        }
    }

    /// Relative change in total energy over the run.
    pub fn energy_drift(&self) -> f64 {
        diagnostics::relative_drift(self.initial_energy, self.final_energy)
    }

    /// Magnitude of the change in total momentum over the run.
    pub fn momentum_change(&self) -> f64 {
        (self.final_momentum - self.initial_momentum).length()
    }
}

/// Resource recording why the startup run did not produce a history.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SimulationFailure(pub SimulationError);

/// Run the whole simulation in one go and publish its history.
///
/// The setup resource is consumed; the run is never repeated.
fn run_simulation(mut commands: Commands, setup: Option<Res<SimulationSetup>>) {
    let Some(setup) = setup else {
        warn!("SimulationPlugin added without a SimulationSetup resource");
        return;
    };

    let result = Integrator::new(setup.config, setup.bodies.clone()).and_then(|mut integrator| {
        integrator.run()?;
        let summary = RunSummary::new(
            &setup.bodies,
            integrator.bodies(),
            &setup.config,
            integrator.current_step(),
        );
        Ok((integrator.into_history(), summary))
    });

    match result {
        Ok((history, summary)) => {
            info!(
                "Recorded {} frames for {} bodies",
                history.frame_count(),
                history.body_count()
            );
            commands.insert_resource(history);
            commands.insert_resource(summary);
        }
        Err(err) => {
            error!("Simulation run failed: {err}");
            commands.insert_resource(SimulationFailure(err));
        }
    }
    commands.remove_resource::<SimulationSetup>();
}
