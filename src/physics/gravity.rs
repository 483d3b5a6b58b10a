//! Gravitational force calculation between point masses.
//!
//! Forces are summed exactly over every ordered pair of bodies. Alternative
//! algorithms (tree codes, softened kernels) plug in behind [`ForceModel`].

use bevy::math::DVec2;

use crate::types::Body;

/// Two bodies whose separation made the force evaluation undefined.
///
/// `first < second` always holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DegeneratePair {
    pub first: usize,
    pub second: usize,
}

impl DegeneratePair {
    fn new(a: usize, b: usize) -> Self {
        Self {
            first: a.min(b),
            second: a.max(b),
        }
    }
}

/// Force exerted on `subject` by `source`.
///
/// F = G·m_a·m_b / d² along the unit vector from subject toward source.
/// Returns `None` when the bodies coincide (`d² == 0`) or the result
/// overflows; there is no softening.
///
/// The mass product is formed before multiplying by `g`, so swapping the
/// arguments yields the exact negation.
///
/// # Arguments
/// * `subject` - Body the force acts on
/// * `source` - Body exerting the force
/// * `g` - Gravitational constant
///
/// # Returns
/// Force vector in newtons
#[inline]
pub fn pairwise_force(subject: &Body, source: &Body, g: f64) -> Option<DVec2> {
    let r = source.pos - subject.pos;
    let d = r.length();
    let d_squared = d * d;

    if d_squared == 0.0 {
        return None;
    }

    let magnitude = g * (subject.mass * source.mass) / d_squared;
    let force = magnitude * (r / d);

    force.is_finite().then_some(force)
}

/// Net force on every body of a frozen state snapshot.
pub trait ForceModel {
    /// Write the net force on `bodies[i]` into `out[i]`.
    ///
    /// `out` has the same length as `bodies`. Implementations must read
    /// nothing but `bodies`, and must report the first degenerate pair in
    /// body-index order.
    fn net_forces(&self, bodies: &[Body], out: &mut [DVec2]) -> Result<(), DegeneratePair>;
}

/// Direct O(n²) Newtonian gravity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectGravity {
    pub g: f64,
}

impl DirectGravity {
    pub fn new(g: f64) -> Self {
        Self { g }
    }

    /// Sum of contributions from every other body, in ascending index order.
    pub fn net_force_on(&self, index: usize, bodies: &[Body]) -> Result<DVec2, DegeneratePair> {
        let subject = &bodies[index];
        let mut force = DVec2::ZERO;

        for (j, source) in bodies.iter().enumerate() {
            if j == index {
                continue;
            }
            force += pairwise_force(subject, source, self.g)
                .ok_or_else(|| DegeneratePair::new(index, j))?;
        }

        Ok(force)
    }
}

impl ForceModel for DirectGravity {
    #[cfg(not(feature = "parallel"))]
    fn net_forces(&self, bodies: &[Body], out: &mut [DVec2]) -> Result<(), DegeneratePair> {
        debug_assert_eq!(bodies.len(), out.len());

        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.net_force_on(i, bodies)?;
        }
        Ok(())
    }

    #[cfg(feature = "parallel")]
    fn net_forces(&self, bodies: &[Body], out: &mut [DVec2]) -> Result<(), DegeneratePair> {
        use rayon::prelude::*;

        debug_assert_eq!(bodies.len(), out.len());

        // Each body's inner sum runs serially, so the output matches the serial pass
        let results: Vec<Result<DVec2, DegeneratePair>> = (0..bodies.len())
            .into_par_iter()
            .map(|i| self.net_force_on(i, bodies))
            .collect();

        for (slot, result) in out.iter_mut().zip(results) {
            *slot = result?;
        }
        Ok(())
    }
}
