//! Long-run accuracy tests for the solver + integrator pair, without
//! the Bevy app wrapper.

mod common;

use approx::assert_relative_eq;
use orrery::catalog::library;
use orrery::physics::integrator;
use orrery::registry::{BodyRegistry, Scales};
use orrery::solver;

fn solved_solar() -> (BodyRegistry, Scales) {
    let config = library::solar_inner();
    let mut registry = BodyRegistry::from_config(&config).expect("library config loads");
    let scales = Scales::from(config.scales);
    solver::solve(&mut registry, &scales, true).expect("library config solves");
    (registry, scales)
}

#[test]
fn mercury_returns_after_one_88_day_orbit() {
    let (mut registry, scales) = solved_solar();
    let start = registry.snapshot("Mercury").expect("mercury exists");

    let period = common::orbital_period(579.1, 1.989e30);
    assert_relative_eq!(period, 88.0, epsilon = 0.5);

    let dt = 0.005;
    let steps = (period / dt).round() as usize;
    for _ in 0..steps {
        integrator::sub_step(&mut registry, &scales, dt, false);
    }

    let end = registry.snapshot("Mercury").expect("mercury exists");
    let error = (end.position - start.position).length();
    assert!(
        error < 0.02 * 579.1,
        "Mercury drifted {error} distance units after one orbit"
    );
}

#[test]
fn moon_completes_a_host_relative_orbit() {
    let (mut registry, scales) = solved_solar();
    let offset_start = registry.snapshot("Moon").expect("moon").position
        - registry.snapshot("Earth").expect("earth").position;

    // Period of the scaled lunar orbit: a and host mass both carry the
    // satellite distance scale, so the true ~27.3-day period survives.
    let scale = scales.satellite_distance_scale;
    let period = common::orbital_period(3.844 * scale, 5.9724e24 * scale.powi(3));
    assert_relative_eq!(period, 27.4, epsilon = 0.5);

    let dt = 0.01;
    let steps = (period / dt).round() as usize;
    for _ in 0..steps {
        integrator::sub_step(&mut registry, &scales, dt, false);
    }

    let offset_end = registry.snapshot("Moon").expect("moon").position
        - registry.snapshot("Earth").expect("earth").position;
    let error = (offset_end - offset_start).length();
    assert!(
        error < 10.0,
        "moon's host-relative offset drifted {error} after one lunar orbit"
    );
}

#[test]
fn orbital_phase_is_independent_of_distance_scale() {
    let run = |distance_scale: f64| {
        let mut config = library::solar_inner();
        config.scales.planet_distance_scale = distance_scale;
        let mut registry = BodyRegistry::from_config(&config).expect("loads");
        let scales = Scales::from(config.scales);
        solver::solve(&mut registry, &scales, true).expect("solves");

        for _ in 0..5_000 {
            integrator::sub_step(&mut registry, &scales, 0.01, false);
        }
        registry.snapshot("Earth").expect("earth").position / distance_scale
    };

    let reference = run(1.0);
    let compressed = run(1000.0);
    // Same simulated time, same phase: positions agree once unscaled.
    assert_relative_eq!(
        (reference - compressed).length(),
        0.0,
        epsilon = 1e-6 * reference.length()
    );
}

#[test]
fn hierarchy_holds_for_every_library_system() {
    for key in library::SYSTEM_KEYS {
        let config = library::by_key(key).expect("key resolves");
        let mut registry = BodyRegistry::from_config(&config).expect("loads");
        let scales = Scales::from(config.scales);
        solver::solve(&mut registry, &scales, true).expect("solves");

        for satellite in registry.satellites() {
            let host = registry.host_planet(satellite);
            let host_state = registry.snapshot(&host.name).expect("host exists");
            let sat_state = registry.snapshot(&satellite.name).expect("satellite exists");
            let offset = (sat_state.position - host_state.position).length();
            let bound = 2.0 * satellite.elements.semi_major * scales.satellite_distance_scale;
            assert!(
                offset > 0.0 && offset < bound,
                "{key}/{}: offset {offset} exceeds {bound}",
                satellite.name
            );
        }
    }
}
