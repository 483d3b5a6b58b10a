//! Test utilities for gravity simulation tests.
//!
//! Provides fixtures for common body sets and assertions for physical
//! invariants like momentum and energy conservation.

use bevy::math::DVec2;

use crate::types::{Body, AU_TO_METERS, G};

/// Fixtures for creating test body sets.
pub mod fixtures {
    use super::*;

    pub const SUN_MASS: f64 = 1.989e30;
    pub const EARTH_MASS: f64 = 5.972e24;
    pub const MARS_MASS: f64 = 6.417e23;

    /// A central mass at the origin and a satellite on a circular orbit.
    ///
    /// The satellite sits on the +x axis moving in +y at
    /// v = sqrt(G·(M + m) / r); the central body gets the recoil velocity
    /// so the pair's total momentum is zero.
    pub fn sun_and_planet(central_mass: f64, planet_mass: f64, distance: f64) -> Vec<Body> {
        let v = (G * (central_mass + planet_mass) / distance).sqrt();
        let total = central_mass + planet_mass;
        vec![
            Body::new(
                "central",
                central_mass,
                DVec2::ZERO,
                DVec2::new(0.0, -v * planet_mass / total),
            ),
            Body::new(
                "planet",
                planet_mass,
                DVec2::new(distance, 0.0),
                DVec2::new(0.0, v * central_mass / total),
            ),
        ]
    }

    /// Sun, Earth and Mars of the reference inner solar system run.
    pub fn three_body_system() -> Vec<Body> {
        vec![
            Body::new("Sun", SUN_MASS, DVec2::ZERO, DVec2::ZERO),
            Body::new(
                "Earth",
                EARTH_MASS,
                DVec2::new(0.0, AU_TO_METERS),
                DVec2::new(29.78e3, 0.0),
            ),
            Body::new(
                "Mars",
                MARS_MASS,
                DVec2::new(0.0, 1.524 * AU_TO_METERS),
                DVec2::new(24.077e3, 0.0),
            ),
        ]
    }

    /// Two bodies at rest separated along the x axis.
    pub fn two_body_at_rest(distance: f64, m1: f64, m2: f64) -> Vec<Body> {
        vec![
            Body::new("left", m1, DVec2::new(-distance / 2.0, 0.0), DVec2::ZERO),
            Body::new("right", m2, DVec2::new(distance / 2.0, 0.0), DVec2::ZERO),
        ]
    }
}

/// Assertions for verifying physical invariants.
pub mod assertions {
    use super::*;
    use crate::diagnostics;

    /// Assert that total momentum stays within `tolerance` of `initial`,
    /// measured relative to `scale` (a characteristic momentum).
    ///
    /// # Panics
    /// Panics if the drift exceeds tolerance.
    pub fn assert_momentum_conserved(initial: DVec2, bodies: &[Body], scale: f64, tolerance: f64) {
        let current = diagnostics::total_momentum(bodies);
        let drift = (current - initial).length() / scale;
        assert!(
            drift <= tolerance,
            "Momentum not conserved: initial={initial:?}, final={current:?}, drift={drift:.6e}, tolerance={tolerance:.6e}"
        );
    }

    /// Assert that energy is conserved within tolerance.
    ///
    /// # Panics
    /// Panics if relative energy drift exceeds tolerance.
    pub fn assert_energy_conserved(initial_energy: f64, final_energy: f64, tolerance: f64) {
        let drift = diagnostics::relative_drift(initial_energy, final_energy);
        assert!(
            drift <= tolerance,
            "Energy not conserved: initial={initial_energy:.6e}, final={final_energy:.6e}, drift={drift:.6e}, tolerance={tolerance:.6e}"
        );
    }
}

/// Utilities for creating headless Bevy apps for testing.
pub mod bevy_test {
    use bevy::prelude::*;

    /// Create a minimal Bevy app for testing without rendering.
    pub fn headless_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics;
    use approx::assert_relative_eq;

    #[test]
    fn test_sun_and_planet_has_zero_momentum() {
        let bodies = fixtures::sun_and_planet(fixtures::SUN_MASS, fixtures::EARTH_MASS, AU_TO_METERS);
        let p = diagnostics::total_momentum(&bodies);
        let scale = bodies[1].momentum().length();
        assert!(p.length() < scale * 1e-12);
    }

    #[test]
    fn test_sun_and_planet_has_circular_velocity() {
        let bodies = fixtures::sun_and_planet(fixtures::SUN_MASS, 1.0, AU_TO_METERS);
        let expected_v = (G * fixtures::SUN_MASS / AU_TO_METERS).sqrt();
        assert_relative_eq!(bodies[1].vel.length(), expected_v, max_relative = 1e-9);
    }

    #[test]
    fn test_three_body_system_is_bound() {
        let bodies = fixtures::three_body_system();
        assert!(diagnostics::total_energy(&bodies, G) < 0.0);
    }
}
