//! Orrery - Star System Simulation Engine
//!
//! A library crate providing the gravitational simulation engine: a
//! scaled unit system, body registry, initial condition solver,
//! symplectic integrator, live tilt transform, and the event-driven
//! command surface a presentation layer drives it with.

use bevy::prelude::*;

pub mod catalog;
pub mod commands;
pub mod physics;
pub mod registry;
pub mod solver;
pub mod tilt;
pub mod types;

#[cfg(test)]
pub mod test_utils;

/// Everything the engine needs in one plugin: simulation resources and
/// scheduling plus the command event surface.
pub struct EnginePlugin;

impl Plugin for EnginePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((physics::SimulationPlugin, commands::CommandsPlugin));
    }
}
