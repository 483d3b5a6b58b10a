//! Fixed-step time integration of the body set.
//!
//! Implements semi-implicit (symplectic) Euler:
//! 1. a = F / m, with F taken from the frozen pre-step snapshot
//! 2. v += a·dt
//! 3. x += v·dt, using the velocity just updated
//!
//! All forces for a step are buffered before any body moves, so the update
//! order of bodies cannot affect the result.

use bevy::log::{error, info, trace, warn};
use bevy::math::DVec2;

use super::gravity::{DegeneratePair, DirectGravity, ForceModel};
use crate::error::SimulationError;
use crate::trajectory::TrajectoryHistory;
use crate::types::{Body, SimulationConfig};

/// Lifecycle of a run.
#[derive(Clone, Debug, PartialEq)]
pub enum RunState {
    /// Steps remain.
    Running,
    /// All configured steps have been taken.
    Finished,
    /// A fatal numerical condition stopped the run.
    Failed(SimulationError),
}

/// Owns the simulation state and advances it one fixed step at a time.
#[derive(Clone, Debug)]
pub struct Integrator<F: ForceModel = DirectGravity> {
    config: SimulationConfig,
    bodies: Vec<Body>,
    force_model: F,
    /// Scratch buffer for the force pass, reused between steps.
    forces: Vec<DVec2>,
    history: TrajectoryHistory,
    step: usize,
    state: RunState,
}

impl Integrator<DirectGravity> {
    /// Validate the setup and record frame 0, using direct gravity with `config.g`.
    pub fn new(config: SimulationConfig, bodies: Vec<Body>) -> Result<Self, SimulationError> {
        let model = DirectGravity::new(config.g);
        Self::with_force_model(config, bodies, model)
    }
}

impl<F: ForceModel> Integrator<F> {
    /// Validate the setup and record frame 0 with a custom force model.
    ///
    /// Rejects invalid config, non-positive or non-finite masses,
    /// non-finite positions, and coincident initial positions.
    pub fn with_force_model(
        config: SimulationConfig,
        bodies: Vec<Body>,
        force_model: F,
    ) -> Result<Self, SimulationError> {
        if let Err(err) = Self::validate(&config, &bodies) {
            warn!("Rejected simulation setup: {err}");
            return Err(err);
        }

        let history = TrajectoryHistory::with_initial(
            bodies.iter().map(|b| (b.name.as_str(), b.pos)),
            config.steps + 1,
        );
        let state = if config.steps == 0 {
            RunState::Finished
        } else {
            RunState::Running
        };

        Ok(Self {
            config,
            forces: vec![DVec2::ZERO; bodies.len()],
            bodies,
            force_model,
            history,
            step: 0,
            state,
        })
    }

    fn validate(config: &SimulationConfig, bodies: &[Body]) -> Result<(), SimulationError> {
        config.validate()?;

        for (index, body) in bodies.iter().enumerate() {
            if !(body.mass > 0.0) || !body.mass.is_finite() {
                return Err(SimulationError::InvalidMass {
                    index,
                    name: body.name.clone(),
                    mass: body.mass,
                });
            }
            if !body.pos.is_finite() || !body.vel.is_finite() {
                return Err(SimulationError::NonFiniteState {
                    index,
                    name: body.name.clone(),
                });
            }
        }

        for (i, a) in bodies.iter().enumerate() {
            if let Some(j) = bodies[i + 1..].iter().position(|b| b.pos == a.pos) {
                return Err(SimulationError::DegenerateConfiguration {
                    first: i,
                    second: i + 1 + j,
                    step: 0,
                });
            }
        }

        Ok(())
    }

    /// Perform one transition `k -> k+1`.
    ///
    /// Returns `Ok(true)` if a step was taken and `Ok(false)` once the run
    /// is finished. A failure is latched: the state stays at the last good
    /// snapshot and every later call returns the same error.
    pub fn step(&mut self) -> Result<bool, SimulationError> {
        match &self.state {
            RunState::Finished => return Ok(false),
            RunState::Failed(err) => return Err(err.clone()),
            RunState::Running => {}
        }

        // Force pass: reads the frozen snapshot only
        if let Err(pair) = self.force_model.net_forces(&self.bodies, &mut self.forces) {
            return Err(self.fail(pair));
        }

        let dt = self.config.dt;

        // A step that would overflow a position is rejected before anything moves
        let overflow = self
            .bodies
            .iter()
            .zip(&self.forces)
            .position(|(body, force)| !Self::advance(body, *force, dt).1.is_finite());
        if let Some(index) = overflow {
            let err = SimulationError::NonFiniteState {
                index,
                name: self.bodies[index].name.clone(),
            };
            error!("Simulation failed at step {}: {err}", self.step);
            self.state = RunState::Failed(err.clone());
            return Err(err);
        }

        // Update pass
        for (body, force) in self.bodies.iter_mut().zip(&self.forces) {
            (body.vel, body.pos) = Self::advance(body, *force, dt);
        }

        self.history.record(self.bodies.iter().map(|b| b.pos));
        self.step += 1;
        trace!("Completed step {}/{}", self.step, self.config.steps);

        if self.step == self.config.steps {
            self.state = RunState::Finished;
        }
        Ok(true)
    }

    /// Semi-implicit Euler update of one body: returns the new (velocity, position).
    #[inline]
    fn advance(body: &Body, force: DVec2, dt: f64) -> (DVec2, DVec2) {
        let acc = force / body.mass;
        let vel = body.vel + acc * dt;
        let pos = body.pos + vel * dt;
        (vel, pos)
    }

    fn fail(&mut self, pair: DegeneratePair) -> SimulationError {
        let err = SimulationError::DegenerateConfiguration {
            first: pair.first,
            second: pair.second,
            step: self.step,
        };
        error!("Simulation failed: {err}");
        self.state = RunState::Failed(err.clone());
        err
    }

    /// Step until the run is finished.
    pub fn run(&mut self) -> Result<&TrajectoryHistory, SimulationError> {
        info!(
            "Running {} bodies for {} steps (dt = {} s)",
            self.bodies.len(),
            self.config.steps,
            self.config.dt
        );

        while self.step()? {}

        info!("Simulation finished after {} steps", self.step);
        Ok(&self.history)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn force_model(&self) -> &F {
        &self.force_model
    }

    /// History recorded so far.
    pub fn history(&self) -> &TrajectoryHistory {
        &self.history
    }

    /// Number of transitions completed.
    pub fn current_step(&self) -> usize {
        self.step
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == RunState::Finished
    }

    pub fn into_history(self) -> TrajectoryHistory {
        self.history
    }
}

// =============================================================================
// Tests
// =============================================================================
