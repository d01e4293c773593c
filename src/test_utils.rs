//! Test utilities for the simulation engine.
//!
//! Fixtures build minimal star systems in the scaled unit system;
//! assertions compute the physical invariants (energy, angular momentum,
//! period) the integrator tests check against.

use bevy::math::DVec3;

use crate::catalog::{PlanetConfig, ScalesConfig, StarConfig, StarSystemConfig};
use crate::registry::{BodyRegistry, Scales};
use crate::solver;
use crate::types::G_SCALED;

/// Fixtures for building test systems.
pub mod fixtures {
    use super::*;

    /// Mass used for every fixture star, in kilograms.
    pub const TEST_STAR_MASS: f64 = 1e30;

    /// A system with one flat planet orbit and unit scales. Longitude and
    /// inclination are zero so planar sign conventions stay visible.
    pub fn single_planet(semi_major: f64, eccentricity: f64) -> StarSystemConfig {
        StarSystemConfig {
            name: "Fixture".to_owned(),
            star: StarConfig {
                name: "Star".to_owned(),
                mass: TEST_STAR_MASS,
                radius: 5.0,
                color: String::new(),
            },
            planets: vec![PlanetConfig {
                name: "p".to_owned(),
                radius: 0.05,
                semi_major,
                eccentricity,
                longitude_perihelion: 0.0,
                orbit_inclination: 0.0,
                color: String::new(),
                texture: None,
                rotation_speed: 0.0,
                obliquity: 0.0,
                mass: None,
                visible: true,
                tilted: true,
            }],
            satellites: vec![],
            scales: ScalesConfig {
                star_scale: 1.0,
                planet_scale: 1.0,
                satellite_scale: 1.0,
                planet_distance_scale: 1.0,
                satellite_distance_scale: 1.0,
                measurement_distance: 1.0,
            },
            camera_settings: None,
        }
    }

    /// Build a registry from a configuration and solve initial conditions.
    ///
    /// # Panics
    /// Panics on invalid configurations; fixtures are expected to be valid.
    pub fn solved(config: &StarSystemConfig) -> (BodyRegistry, Scales) {
        let mut registry = BodyRegistry::from_config(config).expect("fixture config is valid");
        let scales = Scales::from(config.scales);
        solver::solve(&mut registry, &scales, true).expect("fixture config solves");
        (registry, scales)
    }
}

/// Physical-invariant computations for assertions.
pub mod assertions {
    use super::*;

    /// Specific orbital energy around a scaled host at the origin.
    ///
    /// E = v²/2 - G * M * s³ / r. Negative for bound orbits.
    pub fn orbital_energy(
        position: DVec3,
        velocity: DVec3,
        host_mass: f64,
        distance_scale: f64,
    ) -> f64 {
        let gm = G_SCALED * host_mass * distance_scale.powi(3);
        0.5 * velocity.length_squared() - gm / position.length()
    }

    /// Specific angular momentum vector, r x v.
    pub fn angular_momentum(position: DVec3, velocity: DVec3) -> DVec3 {
        position.cross(velocity)
    }

    /// Kepler orbital period in time units for a scaled orbit.
    ///
    /// The scale cancels (distances stretch by s, host mass by s³), which
    /// is exactly the period-preservation property of the scaling scheme.
    pub fn orbital_period(semi_major: f64, host_mass: f64, distance_scale: f64) -> f64 {
        let a = semi_major * distance_scale;
        let gm = G_SCALED * host_mass * distance_scale.powi(3);
        std::f64::consts::TAU * (a.powi(3) / gm).sqrt()
    }
}
