//! Live tilt transform.
//!
//! Toggling the global orbit-inclination flag rotates every body's live
//! position and velocity by the delta between the old and new tilt
//! state, instead of re-solving initial conditions. Simulation time,
//! orbital phase, and velocity magnitude are all preserved.
//!
//! The rotation is factored as Rz(-periLong) then Ry(deltaIncl) then
//! Rz(+periLong): the perihelion longitude is undone so the inclination
//! change happens in the orbit's own frame, then reapplied.

use bevy::math::DQuat;

use crate::registry::BodyRegistry;
use crate::types::DEG_TO_RAD;

/// Rotate all live body states from the `previous` tilt setting to
/// `enable`. A no-change toggle leaves every state untouched.
pub fn apply(registry: &mut BodyRegistry, enable: bool, previous: bool) {
    let tilt_factor = match (previous, enable) {
        (false, true) => 1.0,
        (true, false) => -1.0,
        _ => return,
    };

    let (planets, planet_states, satellites, satellite_states) = registry.tilt_parts_mut();

    // Planets, and the effect each planet's retilt has on its satellites.
    // Satellite positions decompose as host + offset, so rotating them
    // about the global origin by the host's delta keeps the offset locked
    // in host-relative geometry while the host moves.
    for (index, planet) in planets.iter().enumerate() {
        let elements = &planet.elements;
        let delta = if elements.tilted {
            tilt_factor * elements.orbit_inclination * DEG_TO_RAD
        } else {
            0.0
        };
        if delta == 0.0 {
            continue;
        }
        let rotation = tilt_rotation(elements.longitude_perihelion * DEG_TO_RAD, delta);

        let state = &mut planet_states[index];
        state.position = rotation * state.position;
        state.velocity = rotation * state.velocity;

        for (sat_index, satellite) in satellites.iter().enumerate() {
            if satellite.host.0 == index {
                let sat_state = &mut satellite_states[sat_index];
                sat_state.position = rotation * sat_state.position;
                sat_state.velocity = rotation * sat_state.velocity;
            }
        }
    }

    // Satellites' own inclination relative to the host plane, applied
    // around the host's (already retilted) position. Velocity is a free
    // vector: it rotates without the translation.
    for (sat_index, satellite) in satellites.iter().enumerate() {
        let elements = &satellite.elements;
        let delta = if elements.tilted {
            tilt_factor * elements.orbit_inclination * DEG_TO_RAD
        } else {
            0.0
        };
        if delta == 0.0 {
            continue;
        }
        let host = &planets[satellite.host.0];
        // Satellite perihelion longitudes include their host's.
        let peri_long = (elements.longitude_perihelion + host.elements.longitude_perihelion)
            * DEG_TO_RAD;
        let rotation = tilt_rotation(peri_long, delta);

        let host_position = planet_states[satellite.host.0].position;
        let state = &mut satellite_states[sat_index];
        state.position = rotation * (state.position - host_position) + host_position;
        state.velocity = rotation * state.velocity;
    }
}

/// The three-rotation delta: undo perihelion longitude, change the
/// inclination about Y, reapply perihelion longitude.
fn tilt_rotation(peri_long: f64, delta_inclination: f64) -> DQuat {
    DQuat::from_rotation_z(peri_long)
        * DQuat::from_rotation_y(delta_inclination)
        * DQuat::from_rotation_z(-peri_long)
}
