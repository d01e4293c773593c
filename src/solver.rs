//! Initial condition solver.
//!
//! Places every planet and satellite at perihelion relative to its host,
//! with speed from the vis-viva equation and the orbital-plane tilt and
//! perihelion-longitude rotation baked in. Host masses are scaled by the
//! cube of the distance scale so orbital periods survive the
//! visualization's distance compression.
//!
//! Planets are solved strictly before satellites: a satellite's position
//! is the rotated host-relative offset translated by its host's
//! already-solved position.

use bevy::math::{DQuat, DVec3, EulerRot};

use crate::registry::{BodyRegistry, ConfigError, OrbitalElements, Scales};
use crate::types::{DEG_TO_RAD, G_SCALED};

/// Convention angle for the starting true anomaly. All bodies start at
/// perihelion; the sign conventions below assume exactly this value.
pub const PERIHELION_ANOMALY: f64 = std::f64::consts::PI;

/// Unrotated in-plane perihelion position for an orbit under a distance
/// scale. Lands on the negative x-axis at distance `(1 - e) * a * scale`.
pub fn perihelion_position(elements: &OrbitalElements, scale: f64) -> DVec3 {
    let nu = PERIHELION_ANOMALY;
    DVec3::new(
        (nu.cos() * elements.semi_major + elements.eccentricity * elements.semi_major) * scale,
        nu.sin() * elements.semi_minor * scale,
        0.0,
    )
}

/// Vis-viva speed at perihelion for an orbit of semi-major axis
/// `a * scale` around a host of mass `host_mass * scale^3`.
pub fn vis_viva_speed(elements: &OrbitalElements, scale: f64, host_mass: f64) -> f64 {
    let scaled_host_mass = host_mass * scale.powi(3);
    let r = perihelion_position(elements, scale).length();
    (G_SCALED * scaled_host_mass * (2.0 / r - 1.0 / (elements.semi_major * scale))).sqrt()
}

/// Rotation baking perihelion longitude and inclination into a planar
/// state: intrinsic ZYX Euler, perihelion longitude about Z after
/// inclination about Y. The longitude is always applied; inclination only
/// when the body is tilted and the global toggle is on.
pub fn orbit_rotation(elements: &OrbitalElements, inclination_enabled: bool) -> DQuat {
    let inclination = if elements.tilted && inclination_enabled {
        elements.orbit_inclination * DEG_TO_RAD
    } else {
        0.0
    };
    DQuat::from_euler(
        EulerRot::ZYX,
        elements.longitude_perihelion * DEG_TO_RAD,
        inclination,
        0.0,
    )
}

/// Re-derive the starting position and velocity of every planet and
/// satellite from the current scales and tilt setting.
///
/// Spin angles are left untouched so a re-solve (scale change, reset)
/// does not snap body rotation.
pub fn solve(
    registry: &mut BodyRegistry,
    scales: &Scales,
    inclination_enabled: bool,
) -> Result<(), ConfigError> {
    let nu = PERIHELION_ANOMALY;
    let star_mass = registry.star().mass;

    // Planets around the star.
    let planet_scale = scales.planet_distance_scale;
    let (planets, states) = registry.planet_parts_mut();
    for (planet, state) in planets.iter().zip(states.iter_mut()) {
        let elements = &planet.elements;
        let position = perihelion_position(elements, planet_scale);
        let speed = vis_viva_speed(elements, planet_scale, star_mass);
        // Perpendicular to the radius vector at perihelion.
        let velocity = DVec3::new(nu.sin() * speed, -nu.cos() * speed, 0.0);

        let rotation = orbit_rotation(elements, inclination_enabled);
        state.position = rotation * position;
        state.velocity = rotation * velocity;
    }

    // Satellites around their already-solved host planets.
    let satellite_scale = scales.satellite_distance_scale;
    let (planets, planet_states, satellites, states) = registry.satellite_parts_mut();
    for (satellite, state) in satellites.iter().zip(states.iter_mut()) {
        let host = &planets[satellite.host.0];
        let host_mass = host
            .elements
            .mass
            .ok_or_else(|| ConfigError::MissingHostMass(host.name.clone()))?;

        let elements = &satellite.elements;
        let position = perihelion_position(elements, satellite_scale);
        let speed = vis_viva_speed(elements, satellite_scale, host_mass);
        // Mirrored orbital sense relative to planets.
        let velocity = DVec3::new(-nu.sin() * speed, nu.cos() * speed, 0.0);

        // A satellite's plane inherits its host's: angles add.
        let mut inclination = 0.0;
        if host.elements.tilted && inclination_enabled {
            inclination += host.elements.orbit_inclination * DEG_TO_RAD;
        }
        if elements.tilted && inclination_enabled {
            inclination += elements.orbit_inclination * DEG_TO_RAD;
        }
        let longitude =
            (host.elements.longitude_perihelion + elements.longitude_perihelion) * DEG_TO_RAD;
        let rotation = DQuat::from_euler(EulerRot::ZYX, longitude, inclination, 0.0);

        let host_position = planet_states[satellite.host.0].position;
        state.position = rotation * position + host_position;
        state.velocity = rotation * velocity;
    }

    Ok(())
}
