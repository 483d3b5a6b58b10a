//! Preset scenario definitions.

use bevy::math::DVec2;

use super::Scenario;
use crate::types::{Body, AU_TO_METERS, DAYS_PER_YEAR, G, SECONDS_PER_DAY};

/// Mass of the Sun (kg)
pub const SUN_MASS: f64 = 1.989e30;
/// Mass of the Earth (kg)
pub const EARTH_MASS: f64 = 5.972e24;
/// Mass of Mars (kg)
pub const MARS_MASS: f64 = 6.417e23;
/// Mass of the Moon (kg)
pub const MOON_MASS: f64 = 7.342e22;
/// Mean Earth-Moon distance (m)
pub const EARTH_MOON_DISTANCE: f64 = 3.844e8;

/// All available preset scenarios.
pub static SCENARIOS: &[Scenario] = &[INNER_SOLAR_SYSTEM, EARTH_MOON, BINARY_STAR];

/// Scenario 1: Sun, Earth and Mars (default)
///
/// Planets start on the +y axis moving in +x at their mean orbital speeds,
/// with the Sun at rest at the origin. One-day steps over five years.
pub const INNER_SOLAR_SYSTEM: Scenario = Scenario {
    id: "inner_solar_system",
    name: "Inner Solar System",
    description: "Sun, Earth and Mars over five years with one-day steps.",
    build: inner_solar_system,
    dt: SECONDS_PER_DAY,
    steps: 5 * DAYS_PER_YEAR,
};

/// Scenario 2: Earth and Moon about their barycentre
///
/// Circular relative orbit at the mean distance, one-hour steps for 60 days
/// (a little over two sidereal months).
pub const EARTH_MOON: Scenario = Scenario {
    id: "earth_moon",
    name: "Earth and Moon",
    description: "Earth-Moon pair orbiting their barycentre for 60 days.",
    build: earth_moon,
    dt: 3600.0,
    steps: 60 * 24,
};

/// Scenario 3: Equal-mass binary star
///
/// Two solar masses 1 AU apart on a mutual circular orbit (~258 day period).
pub const BINARY_STAR: Scenario = Scenario {
    id: "binary_star",
    name: "Binary Star",
    description: "Two solar-mass stars on a mutual circular orbit over two years.",
    build: binary_star,
    dt: SECONDS_PER_DAY,
    steps: 2 * DAYS_PER_YEAR,
};

fn inner_solar_system() -> Vec<Body> {
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

/// Place two bodies on a circular mutual orbit about the origin.
///
/// Separation along x, velocities along y, total momentum zero.
fn circular_pair(
    (name_a, mass_a): (&str, f64),
    (name_b, mass_b): (&str, f64),
    separation: f64,
) -> Vec<Body> {
    let total = mass_a + mass_b;
    // Relative speed for a circular orbit: v = sqrt(G·(m_a + m_b) / d)
    let v = (G * total / separation).sqrt();

    vec![
        Body::new(
            name_a,
            mass_a,
            DVec2::new(-separation * mass_b / total, 0.0),
            DVec2::new(0.0, -v * mass_b / total),
        ),
        Body::new(
            name_b,
            mass_b,
            DVec2::new(separation * mass_a / total, 0.0),
            DVec2::new(0.0, v * mass_a / total),
        ),
    ]
}

fn earth_moon() -> Vec<Body> {
    circular_pair(
        ("Earth", EARTH_MASS),
        ("Moon", MOON_MASS),
        EARTH_MOON_DISTANCE,
    )
}

fn binary_star() -> Vec<Body> {
    circular_pair(("Star A", SUN_MASS), ("Star B", SUN_MASS), AU_TO_METERS)
}
