//! Headless demonstration run.
//!
//! Loads the inner solar system, advances it for a fixed number of
//! frames, and logs where everything ended up. Useful as a smoke test
//! of the full engine loop without any renderer attached.

use bevy::log::LogPlugin;
use bevy::prelude::*;

use orrery::catalog::library;
use orrery::commands::LoadSystemEvent;
use orrery::registry::BodyRegistry;
use orrery::types::SimulationClock;
use orrery::EnginePlugin;

const FRAMES: usize = 1_000;

fn main() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(LogPlugin::default())
        .add_plugins(EnginePlugin);

    app.world_mut()
        .write_message(LoadSystemEvent(library::solar_inner()));

    for _ in 0..FRAMES {
        app.update();
    }

    let clock = app.world().resource::<SimulationClock>();
    info!("simulated {:.2} time units over {FRAMES} frames", clock.time);

    let registry = app.world().resource::<BodyRegistry>();
    for planet in registry.planets() {
        if let Some(snapshot) = registry.snapshot(&planet.name) {
            info!(
                "{:10} position ({:9.2}, {:9.2}, {:7.2})  speed {:6.3}",
                planet.name,
                snapshot.position.x,
                snapshot.position.y,
                snapshot.position.z,
                snapshot.velocity.length()
            );
        }
    }
    for satellite in registry.satellites() {
        if let Some(snapshot) = registry.snapshot(&satellite.name) {
            info!(
                "{:10} position ({:9.2}, {:9.2}, {:7.2})  speed {:6.3}",
                satellite.name,
                snapshot.position.x,
                snapshot.position.y,
                snapshot.position.z,
                snapshot.velocity.length()
            );
        }
    }
}
