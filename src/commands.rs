//! Configuration command surface.
//!
//! The presentation layer drives the engine exclusively through these
//! events. They are processed in [`EngineSet::Commands`], strictly
//! before the frame's integration batch, so every command is atomic
//! with respect to physics stepping.

use bevy::prelude::*;

use crate::catalog::StarSystemConfig;
use crate::registry::{BodyRegistry, OrbitInclination, Scales};
use crate::solver;
use crate::tilt;
use crate::types::{EngineSet, SimulationClock};

/// Replace the loaded star system. On configuration errors the load is
/// rejected and the previously loaded system keeps running.
#[derive(Message)]
pub struct LoadSystemEvent(pub StarSystemConfig);

/// Re-solve initial conditions for the loaded system and zero the clock.
#[derive(Message)]
pub struct ResetSimulationEvent;

/// Change the planet-tier distance scale. Triggers a full re-solve of
/// initial conditions; the clock keeps its accumulated time.
#[derive(Message)]
pub struct SetPlanetDistanceScaleEvent(pub f64);

/// Change the satellite-tier distance scale. Same re-solve semantics as
/// the planet-tier scale.
#[derive(Message)]
pub struct SetSatelliteDistanceScaleEvent(pub f64);

/// Toggle global orbit inclination, rotating live state by the delta.
#[derive(Message)]
pub struct SetOrbitInclinationEvent(pub bool);

/// Set sub-steps per frame. Negative values clamp to zero.
#[derive(Message)]
pub struct SetSimulationSpeedEvent(pub i64);

/// Set the fixed sub-step size in time units.
#[derive(Message)]
pub struct SetSimulationStepEvent(pub f64);

/// Pause or resume the simulation clock.
#[derive(Message)]
pub struct SetRunningEvent(pub bool);

/// Enable or disable body self-rotation.
#[derive(Message)]
pub struct SetRotationEvent(pub bool);

pub struct CommandsPlugin;

impl Plugin for CommandsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<LoadSystemEvent>()
            .add_message::<ResetSimulationEvent>()
            .add_message::<SetPlanetDistanceScaleEvent>()
            .add_message::<SetSatelliteDistanceScaleEvent>()
            .add_message::<SetOrbitInclinationEvent>()
            .add_message::<SetSimulationSpeedEvent>()
            .add_message::<SetSimulationStepEvent>()
            .add_message::<SetRunningEvent>()
            .add_message::<SetRotationEvent>()
            .add_systems(
                Update,
                (
                    handle_load_system,
                    handle_reset,
                    handle_distance_scales,
                    handle_orbit_inclination,
                    handle_clock_commands,
                )
                    .chain()
                    .in_set(EngineSet::Commands),
            );
    }
}

/// Build and solve a new system. Only the last load request per frame
/// is honored.
fn handle_load_system(
    mut commands: Commands,
    mut events: MessageReader<LoadSystemEvent>,
    mut clock: ResMut<SimulationClock>,
    inclination: Res<OrbitInclination>,
) {
    let Some(LoadSystemEvent(config)) = events.read().last() else {
        return;
    };

    let mut registry = match BodyRegistry::from_config(config) {
        Ok(registry) => registry,
        Err(error) => {
            error!("rejecting system `{}`: {error}", config.name);
            return;
        }
    };
    let scales = Scales::from(config.scales);
    if let Err(error) = solver::solve(&mut registry, &scales, inclination.enabled) {
        error!("rejecting system `{}`: {error}", config.name);
        return;
    }

    info!(
        "loaded system `{}`: {} planets, {} satellites",
        config.name,
        registry.planets().len(),
        registry.satellites().len()
    );
    commands.insert_resource(registry);
    commands.insert_resource(scales);
    clock.reset();
}

/// Put every body back at its initial conditions and zero the clock.
fn handle_reset(
    mut events: MessageReader<ResetSimulationEvent>,
    registry: Option<ResMut<BodyRegistry>>,
    scales: Option<Res<Scales>>,
    inclination: Res<OrbitInclination>,
    mut clock: ResMut<SimulationClock>,
) {
    if events.read().next().is_none() {
        return;
    }
    events.clear();
    let (Some(mut registry), Some(scales)) = (registry, scales) else {
        warn!("reset requested with no system loaded");
        return;
    };

    // Hosts were validated at load; a solve failure here is a logic bug.
    if let Err(error) = solver::solve(&mut registry, &scales, inclination.enabled) {
        error!("reset failed: {error}");
        return;
    }
    clock.reset();
}

/// Apply distance-scale changes, then re-derive every body's state from
/// the new scales. The clock keeps its time: a scale change reshapes
/// the scene but does not restart the session.
fn handle_distance_scales(
    mut planet_events: MessageReader<SetPlanetDistanceScaleEvent>,
    mut satellite_events: MessageReader<SetSatelliteDistanceScaleEvent>,
    registry: Option<ResMut<BodyRegistry>>,
    scales: Option<ResMut<Scales>>,
    inclination: Res<OrbitInclination>,
) {
    let planet_scale = planet_events.read().last().map(|event| event.0);
    let satellite_scale = satellite_events.read().last().map(|event| event.0);
    if planet_scale.is_none() && satellite_scale.is_none() {
        return;
    }
    let (Some(mut registry), Some(mut scales)) = (registry, scales) else {
        warn!("distance scale change requested with no system loaded");
        return;
    };

    if let Some(value) = planet_scale {
        if value.is_finite() && value > 0.0 {
            scales.planet_distance_scale = value;
        } else {
            warn!("ignoring invalid planet distance scale {value}");
        }
    }
    if let Some(value) = satellite_scale {
        if value.is_finite() && value > 0.0 {
            scales.satellite_distance_scale = value;
        } else {
            warn!("ignoring invalid satellite distance scale {value}");
        }
    }

    if let Err(error) = solver::solve(&mut registry, &scales, inclination.enabled) {
        error!("re-solve after scale change failed: {error}");
    }
}

/// Toggle orbit inclination by rotating live state; no re-solve, no
/// clock reset.
fn handle_orbit_inclination(
    mut events: MessageReader<SetOrbitInclinationEvent>,
    mut inclination: ResMut<OrbitInclination>,
    registry: Option<ResMut<BodyRegistry>>,
) {
    let Some(SetOrbitInclinationEvent(enable)) = events.read().last() else {
        return;
    };
    let enable = *enable;
    if let Some(mut registry) = registry {
        tilt::apply(&mut registry, enable, inclination.enabled);
    }
    inclination.enabled = enable;
}

fn handle_clock_commands(
    mut speed_events: MessageReader<SetSimulationSpeedEvent>,
    mut step_events: MessageReader<SetSimulationStepEvent>,
    mut running_events: MessageReader<SetRunningEvent>,
    mut rotation_events: MessageReader<SetRotationEvent>,
    mut clock: ResMut<SimulationClock>,
) {
    for SetSimulationSpeedEvent(value) in speed_events.read() {
        clock.set_speed(*value);
    }
    for SetSimulationStepEvent(value) in step_events.read() {
        clock.set_step(*value);
    }
    for SetRunningEvent(value) in running_events.read() {
        clock.running = *value;
    }
    for SetRotationEvent(value) in rotation_events.read() {
        clock.rotation_enabled = *value;
    }
}
