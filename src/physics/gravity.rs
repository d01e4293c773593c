//! Gravity calculation for orbiting bodies.
//!
//! Two-body approximation per hierarchy level: only a body's immediate
//! host contributes. Siblings and the star's pull on satellites are
//! ignored.

use bevy::math::DVec3;

use crate::types::G_SCALED;

/// Gravitational acceleration on a body from its host.
///
/// The host mass is scaled by the cube of the tier's distance scale to
/// compensate for the visualization's distance compression; this keeps
/// orbital periods and speeds consistent with the scaled geometry.
///
/// There is no guard against near-zero separation: coincident host and
/// body positions are a configuration defect and blow up to non-finite
/// acceleration rather than being silently clamped.
#[inline]
pub fn acceleration(
    host_position: DVec3,
    host_mass: f64,
    body_position: DVec3,
    distance_scale: f64,
) -> DVec3 {
    let scaled_host_mass = host_mass * distance_scale.powi(3);
    let delta = body_position - host_position;
    let magnitude = -G_SCALED * scaled_host_mass / delta.length_squared();
    delta.normalize() * magnitude
}
