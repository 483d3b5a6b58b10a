//! Property-based tests for the force model and integrator using proptest.
//!
//! These tests verify physical and bookkeeping invariants across a wide
//! range of masses, separations and run lengths.

use bevy::math::DVec2;
use proptest::prelude::*;

use super::{pairwise_force, DirectGravity, ForceModel, Integrator};
use crate::diagnostics;
use crate::test_utils::{assertions, fixtures};
use crate::types::{Body, SimulationConfig, AU_TO_METERS, G, SECONDS_PER_DAY};

/// Position component in meters, spanning roughly ±10 AU.
fn coordinate() -> impl Strategy<Value = f64> {
    -1.5e12f64..1.5e12
}

fn body_strategy() -> impl Strategy<Value = Body> {
    (1e20f64..1e30, coordinate(), coordinate(), -5e4f64..5e4, -5e4f64..5e4).prop_map(
        |(mass, x, y, vx, vy)| Body::new("body", mass, DVec2::new(x, y), DVec2::new(vx, vy)),
    )
}

/// Between two and five bodies with distinct positions.
fn body_set() -> impl Strategy<Value = Vec<Body>> {
    prop::collection::vec(body_strategy(), 2..=5).prop_filter("coincident bodies", |bodies| {
        bodies.iter().enumerate().all(|(i, a)| {
            bodies[i + 1..]
                .iter()
                .all(|b| (b.pos - a.pos).length() > 1e9)
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Newton's third law: the force on A due to B is the exact negation of
    /// the force on B due to A.
    #[test]
    fn prop_pairwise_force_antisymmetric(a in body_strategy(), b in body_strategy()) {
        prop_assume!(a.pos != b.pos);

        let on_a = pairwise_force(&a, &b, G).unwrap();
        let on_b = pairwise_force(&b, &a, G).unwrap();

        prop_assert_eq!(on_a, -on_b);
    }

    /// The force on A points toward B.
    #[test]
    fn prop_pairwise_force_attractive(a in body_strategy(), b in body_strategy()) {
        prop_assume!(a.pos != b.pos);

        let force = pairwise_force(&a, &b, G).unwrap();
        prop_assert!(force.dot(b.pos - a.pos) > 0.0);
    }

    /// Internal forces of a closed system sum to (numerically) zero.
    #[test]
    fn prop_net_forces_cancel(bodies in body_set()) {
        let mut forces = vec![DVec2::ZERO; bodies.len()];
        DirectGravity::new(G).net_forces(&bodies, &mut forces).unwrap();

        let total: DVec2 = forces.iter().copied().sum();
        // Rounding scales with the individual pair contributions, not the net forces
        let mut scale = 0.0;
        for (i, a) in bodies.iter().enumerate() {
            for b in &bodies[i + 1..] {
                scale += pairwise_force(a, b, G).unwrap().length();
            }
        }
        prop_assert!(
            total.length() <= scale * 1e-10,
            "Residual force {:?} vs scale {:e}", total, scale
        );
    }

    /// Every body's history has exactly `steps + 1` entries and entry 0 is
    /// the configured initial position.
    #[test]
    fn prop_trajectory_length(bodies in body_set(), steps in 0usize..40) {
        let initial: Vec<DVec2> = bodies.iter().map(|b| b.pos).collect();
        let config = SimulationConfig::default().with_steps(steps);
        let mut integrator = Integrator::new(config, bodies).unwrap();
        let history = integrator.run().unwrap();

        prop_assert_eq!(history.frame_count(), steps + 1);
        for (i, pos) in initial.iter().enumerate() {
            let path = history.body(i).unwrap();
            prop_assert_eq!(path.len(), steps + 1);
            prop_assert_eq!(path[0], *pos);
        }
    }

    /// Two runs of the same setup are bit-identical.
    #[test]
    fn prop_runs_are_deterministic(bodies in body_set(), steps in 1usize..40) {
        let config = SimulationConfig::default().with_steps(steps);
        let first = Integrator::new(config, bodies.clone()).unwrap().run().unwrap().clone();
        let second = Integrator::new(config, bodies).unwrap().run().unwrap().clone();

        prop_assert_eq!(first, second);
    }

    /// Total momentum of an isolated pair is conserved.
    #[test]
    fn prop_two_body_momentum_conserved(
        distance_au in 0.5f64..5.0,
        planet_mass in 1e22f64..1e28,
    ) {
        let bodies = fixtures::sun_and_planet(fixtures::SUN_MASS, planet_mass, distance_au * AU_TO_METERS);
        let initial = diagnostics::total_momentum(&bodies);
        let scale = bodies[1].momentum().length();

        let config = SimulationConfig::new(G, SECONDS_PER_DAY, 365);
        let mut integrator = Integrator::new(config, bodies).unwrap();
        integrator.run().unwrap();

        assertions::assert_momentum_conserved(initial, integrator.bodies(), scale, 1e-9);
    }
}

#[cfg(test)]
mod deterministic_tests {
    use super::*;

    #[test]
    fn test_zero_step_run_leaves_state_untouched() {
        let bodies = fixtures::three_body_system();
        let mut integrator = Integrator::new(SimulationConfig::default().with_steps(0), bodies.clone()).unwrap();
        integrator.run().unwrap();

        assert_eq!(integrator.bodies(), bodies.as_slice());
        for (i, body) in bodies.iter().enumerate() {
            assert_eq!(integrator.history().body(i), Some(&[body.pos][..]));
        }
    }

    #[test]
    fn test_energy_bounded_over_reference_run() {
        let bodies = fixtures::three_body_system();
        let initial_energy = diagnostics::total_energy(&bodies, G);

        let mut integrator = Integrator::new(SimulationConfig::default(), bodies).unwrap();
        integrator.run().unwrap();

        let final_energy = diagnostics::total_energy(integrator.bodies(), G);
        assertions::assert_energy_conserved(initial_energy, final_energy, 0.05);
    }
}
