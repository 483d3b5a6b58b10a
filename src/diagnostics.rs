//! Conserved quantities of a body set.
//!
//! Used to check integration quality: for a closed system total momentum
//! is conserved exactly by the pairwise force sum, while energy and angular
//! momentum drift with the integrator's truncation error.

use bevy::math::DVec2;

use crate::types::Body;

/// Σ m·v (kg·m/s)
pub fn total_momentum(bodies: &[Body]) -> DVec2 {
    bodies.iter().map(Body::momentum).sum()
}

/// Σ m (kg)
pub fn total_mass(bodies: &[Body]) -> f64 {
    bodies.iter().map(|b| b.mass).sum()
}

/// Mass-weighted mean position, or `None` for an empty set.
pub fn center_of_mass(bodies: &[Body]) -> Option<DVec2> {
    let mass = total_mass(bodies);
    if bodies.is_empty() || mass <= 0.0 {
        return None;
    }
    let weighted: DVec2 = bodies.iter().map(|b| b.pos * b.mass).sum();
    Some(weighted / mass)
}

/// Σ ½·m·v² (J)
pub fn kinetic_energy(bodies: &[Body]) -> f64 {
    bodies.iter().map(Body::kinetic_energy).sum()
}

/// Σ over unordered pairs of −G·m_i·m_j / d (J)
pub fn potential_energy(bodies: &[Body], g: f64) -> f64 {
    let mut energy = 0.0;
    for (i, a) in bodies.iter().enumerate() {
        for b in &bodies[i + 1..] {
            energy -= g * a.mass * b.mass / (b.pos - a.pos).length();
        }
    }
    energy
}

/// Kinetic plus potential energy (J)
pub fn total_energy(bodies: &[Body], g: f64) -> f64 {
    kinetic_energy(bodies) + potential_energy(bodies, g)
}

/// z-component of Σ m·(r × v) about the origin (kg·m²/s)
pub fn angular_momentum(bodies: &[Body]) -> f64 {
    bodies
        .iter()
        .map(|b| b.mass * b.pos.perp_dot(b.vel))
        .sum()
}

/// Relative drift `|final - initial| / |initial|`, falling back to the
/// absolute difference when `initial` is near zero.
pub fn relative_drift(initial: f64, final_value: f64) -> f64 {
    let delta = (final_value - initial).abs();
    if initial.abs() > 1e-30 {
        delta / initial.abs()
    } else {
        delta
    }
}
