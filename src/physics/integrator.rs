//! Fixed-step symplectic Euler integrator.
//!
//! Velocity is updated from acceleration first, then position from the
//! new velocity. That ordering is what makes the scheme symplectic:
//! orbital energy oscillates within a bounded band instead of drifting,
//! so orbits stay closed over arbitrarily long runs.
//!
//! Planets are stepped before satellites within a sub-step. A satellite
//! is first carried along with its host (translated by the host's
//! just-updated velocity) and only then stepped against host-relative
//! gravity, so its stored velocity stays a host-frame orbital velocity.

use bevy::math::DVec3;

use crate::physics::gravity;
use crate::registry::{BodyRegistry, Scales};

/// Advance every planet and satellite by one fixed sub-step.
pub fn sub_step(registry: &mut BodyRegistry, scales: &Scales, step: f64, rotation_enabled: bool) {
    step_planets(registry, scales, step, rotation_enabled);
    step_satellites(registry, scales, step);
}

fn step_planets(registry: &mut BodyRegistry, scales: &Scales, step: f64, rotation_enabled: bool) {
    let star_mass = registry.star().mass;
    let scale = scales.planet_distance_scale;
    let (planets, states) = registry.planet_parts_mut();
    for (planet, state) in planets.iter().zip(states.iter_mut()) {
        let acceleration = gravity::acceleration(DVec3::ZERO, star_mass, state.position, scale);
        state.velocity += acceleration * step;
        state.position += state.velocity * step;
        if rotation_enabled {
            state.spin += planet.elements.rotation_speed * step;
        }
    }
}

fn step_satellites(registry: &mut BodyRegistry, scales: &Scales, step: f64) {
    let scale = scales.satellite_distance_scale;
    let (planets, planet_states, satellites, states) = registry.satellite_parts_mut();
    for (satellite, state) in satellites.iter().zip(states.iter_mut()) {
        let host = &planets[satellite.host.0];
        // Hosts are validated at load time; a massless host here means the
        // registry was built by hand, so skip rather than panic.
        let Some(host_mass) = host.elements.mass else {
            continue;
        };
        let host_state = planet_states[satellite.host.0];

        // Carry the satellite with its host, then step the relative orbit.
        state.position += host_state.velocity * step;
        let acceleration =
            gravity::acceleration(host_state.position, host_mass, state.position, scale);
        state.velocity += acceleration * step;
        state.position += state.velocity * step;
        state.spin += satellite.elements.rotation_speed * step;
    }
}
