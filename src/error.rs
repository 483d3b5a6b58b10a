//! Error types for simulation setup and stepping.

/// Invalid run parameters, rejected before any step executes.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid timestep: {0} (must be positive and finite)")]
    NonPositiveTimeStep(f64),

    #[error("invalid gravitational constant: {0} (must be positive and finite)")]
    NonPositiveGravitationalConstant(f64),
}

/// Fatal conditions for a simulation run.
///
/// None of these are retried. Setup errors are raised by
/// [`Integrator::new`](crate::physics::Integrator::new); a degenerate pair
/// found mid-run stops the run and is returned by every later step.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("body {index} ({name}) has invalid mass {mass} (must be positive and finite)")]
    InvalidMass { index: usize, name: String, mass: f64 },

    /// The pair coincides, or their separation overflows the force evaluation.
    #[error("force between bodies {first} and {second} is undefined at step {step}")]
    DegenerateConfiguration {
        first: usize,
        second: usize,
        step: usize,
    },

    #[error("body {index} ({name}) has a non-finite position or velocity")]
    NonFiniteState { index: usize, name: String },

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),
}
