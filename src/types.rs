//! Core physics types and constants for the gravity simulation.

use bevy::math::DVec2;

use crate::error::ConfigError;

/// Physical constants (SI units)

/// Gravitational constant (m³·kg⁻¹·s⁻²)
pub const G: f64 = 6.67430e-11;

/// Astronomical unit in meters
pub const AU_TO_METERS: f64 = 1.496e11;

/// Meters to AU
pub const METERS_TO_AU: f64 = 1.0 / AU_TO_METERS;

/// Seconds per day
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Days per (non-leap) year, used for run lengths
pub const DAYS_PER_YEAR: usize = 365;

/// A point mass taking part in the simulation.
///
/// `name` is carried for display only and never enters the physics.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    /// Display name
    pub name: String,
    /// Mass in kilograms
    pub mass: f64,
    /// Position in meters
    pub pos: DVec2,
    /// Velocity in meters per second
    pub vel: DVec2,
}

impl Body {
    /// Create a new body
    pub fn new(name: impl Into<String>, mass: f64, pos: DVec2, vel: DVec2) -> Self {
        Self {
            name: name.into(),
            mass,
            pos,
            vel,
        }
    }

    /// Linear momentum (kg·m/s)
    pub fn momentum(&self) -> DVec2 {
        self.vel * self.mass
    }

    /// Kinetic energy (J)
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.vel.length_squared()
    }
}

/// Immutable run parameters, fixed before the first step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Gravitational constant used by the force model
    pub g: f64,
    /// Fixed timestep in seconds
    pub dt: f64,
    /// Number of transitions to perform
    pub steps: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            g: G,
            dt: SECONDS_PER_DAY,        // 1 day
            steps: 5 * DAYS_PER_YEAR,   // 5 years
        }
    }
}

impl SimulationConfig {
    pub fn new(g: f64, dt: f64, steps: usize) -> Self {
        Self { g, dt, steps }
    }

    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_g(mut self, g: f64) -> Self {
        self.g = g;
        self
    }

    /// Total simulated time in seconds.
    pub fn duration(&self) -> f64 {
        self.dt * self.steps as f64
    }

    /// Check `dt > 0` and `G > 0`, both finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.dt > 0.0) || !self.dt.is_finite() {
            return Err(ConfigError::NonPositiveTimeStep(self.dt));
        }
        if !(self.g > 0.0) || !self.g.is_finite() {
            return Err(ConfigError::NonPositiveGravitationalConstant(self.g));
        }
        Ok(())
    }
}
