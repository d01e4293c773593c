//! Common test utilities for integration tests.

use bevy::prelude::*;
use orrery::catalog::StarSystemConfig;
use orrery::commands::LoadSystemEvent;
use orrery::registry::{BodyRegistry, BodySnapshot};
use orrery::types::G_SCALED;
use orrery::EnginePlugin;

/// Build a headless engine app with no system loaded.
pub fn engine_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(EnginePlugin);
    app
}

/// Build a headless engine app and load a system into it.
pub fn loaded_app(config: StarSystemConfig) -> App {
    let mut app = engine_app();
    app.world_mut().write_message(LoadSystemEvent(config));
    app.update();
    app
}

/// Snapshot a body by name, panicking on unknown names.
pub fn snapshot(app: &App, name: &str) -> BodySnapshot {
    app.world()
        .resource::<BodyRegistry>()
        .snapshot(name)
        .unwrap_or_else(|| panic!("no body named `{name}`"))
}

/// Kepler orbital period in time units for an unscaled orbit.
pub fn orbital_period(semi_major: f64, host_mass: f64) -> f64 {
    std::f64::consts::TAU * (semi_major.powi(3) / (G_SCALED * host_mass)).sqrt()
}
