//! Physics scheduling: the per-frame integration driver.
//!
//! Each frame, while the clock is running, the integrator executes
//! `speed` fixed sub-steps of size `step` and the clock advances by
//! their product. Command handling is ordered strictly before
//! integration so scale and tilt changes never interleave with a
//! partially applied frame.

pub mod gravity;
pub mod integrator;
#[cfg(test)]
mod proptest_physics;

use bevy::prelude::*;

use crate::registry::{BodyRegistry, OrbitInclination, Scales};
use crate::types::{EngineSet, SimulationClock};

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationClock>()
            .init_resource::<OrbitInclination>()
            .configure_sets(Update, (EngineSet::Commands, EngineSet::Integrate).chain())
            .add_systems(
                Update,
                advance_simulation
                    .in_set(EngineSet::Integrate)
                    .run_if(resource_exists::<BodyRegistry>.and(resource_exists::<Scales>)),
            );
    }
}

/// Run the frame's batch of fixed sub-steps and advance the clock.
fn advance_simulation(
    mut registry: ResMut<BodyRegistry>,
    scales: Res<Scales>,
    mut clock: ResMut<SimulationClock>,
) {
    if !clock.running {
        return;
    }

    let step = clock.step();
    for _ in 0..clock.speed() {
        integrator::sub_step(&mut registry, &scales, step, clock.rotation_enabled);
    }
    clock.frame_advance();

    if let Some(name) = first_non_finite(&registry) {
        warn!("body `{name}` has non-finite state after integration; check the configuration");
    }
}

fn first_non_finite(registry: &BodyRegistry) -> Option<&str> {
    let bad = |p: &bevy::math::DVec3, v: &bevy::math::DVec3| !p.is_finite() || !v.is_finite();
    for (planet, state) in registry.planets().iter().zip(registry.planet_states()) {
        if bad(&state.position, &state.velocity) {
            return Some(&planet.name);
        }
    }
    for (satellite, state) in registry.satellites().iter().zip(registry.satellite_states()) {
        if bad(&state.position, &state.velocity) {
            return Some(&satellite.name);
        }
    }
    None
}
