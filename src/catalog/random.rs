//! Seeded random star-system generator.
//!
//! Produces systems in the same parameter envelope as the curated library
//! so the engine's scales and integrator defaults stay well behaved. The
//! generator is fully deterministic for a given seed, which makes random
//! systems shareable and reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{PlanetConfig, ScalesConfig, StarConfig, StarSystemConfig};

/// Star mass range in solar masses.
const STAR_MASS_RANGE: (f64, f64) = (1.0, 2.0);
/// Star visual radius range in distance units.
const STAR_RADIUS_RANGE: (f64, f64) = (2.0, 7.0);
/// Planets per system.
const PLANET_COUNT_RANGE: (usize, usize) = (1, 4);
/// Planet visual radius range in distance units (unscaled).
const PLANET_RADIUS_RANGE: (f64, f64) = (0.02, 0.04);
/// Gap added between consecutive orbits, in distance units.
const SEMI_MAJOR_SPACER: f64 = 500.0;
/// Random extra spread on top of the spacer.
const SEMI_MAJOR_JITTER: f64 = 200.0;
/// Eccentricity range. Deliberately high so random systems look visibly
/// elliptical at the default scales.
const ECCENTRICITY_RANGE: (f64, f64) = (0.4, 0.5);
/// Longitude of perihelion spread in degrees.
const LONGITUDE_PERIHELION_MAX: f64 = 22.5;
/// Orbit inclination spread in degrees.
const ORBIT_INCLINATION_MAX: f64 = 1.0;

const STAR_COLORS: &[&str] = &[
    "#ffffff", // white
    "#ffff00", // yellow
    "#559999", // blue pastel
    "#ff6339", // orange
    "#ff0000", // red
];

const PLANET_COLORS: &[&str] = &[
    "#333333", // grey
    "#993333", // ruddy
    "#aa8239", // tan
    "#2d4671", // blue
    "#599532", // green
    "#267257", // blue green
];

/// Generate a random star system from a seed.
///
/// Planets are named `b`, `c`, ... in increasing orbital distance,
/// following exoplanet naming convention. Scales and camera settings are
/// derived from the generated extent.
pub fn generate(seed: u64) -> StarSystemConfig {
    let mut rng = StdRng::seed_from_u64(seed);

    let star = StarConfig {
        name: format!("Rand-{seed}"),
        mass: rng.gen_range(STAR_MASS_RANGE.0..STAR_MASS_RANGE.1) * 1e30,
        radius: rng.gen_range(STAR_RADIUS_RANGE.0..STAR_RADIUS_RANGE.1),
        color: STAR_COLORS[rng.gen_range(0..STAR_COLORS.len())].to_owned(),
    };

    let planet_count = rng.gen_range(PLANET_COUNT_RANGE.0..=PLANET_COUNT_RANGE.1);
    let mut planets = Vec::with_capacity(planet_count);
    let mut semi_major = 0.0;
    // 'a' is conventionally the star itself
    let mut name = 'b';
    for _ in 0..planet_count {
        semi_major += SEMI_MAJOR_SPACER + rng.gen_range(0.0..SEMI_MAJOR_JITTER);
        planets.push(PlanetConfig {
            name: name.to_string(),
            radius: rng.gen_range(PLANET_RADIUS_RANGE.0..PLANET_RADIUS_RANGE.1),
            semi_major,
            eccentricity: rng.gen_range(ECCENTRICITY_RANGE.0..ECCENTRICITY_RANGE.1),
            longitude_perihelion: rng.gen_range(0.0..LONGITUDE_PERIHELION_MAX),
            orbit_inclination: rng.gen_range(0.0..ORBIT_INCLINATION_MAX),
            color: PLANET_COLORS[rng.gen_range(0..PLANET_COLORS.len())].to_owned(),
            texture: None,
            rotation_speed: 0.0,
            obliquity: 0.0,
            mass: None,
            visible: true,
            tilted: true,
        });
        name = char::from_u32(name as u32 + 1).unwrap_or('z');
    }

    let mut system = StarSystemConfig {
        name: format!("Random - {seed}"),
        star,
        planets,
        satellites: vec![],
        scales: ScalesConfig {
            star_scale: 1.0,
            planet_scale: 1.0,
            satellite_scale: 1.0,
            planet_distance_scale: 1.0,
            satellite_distance_scale: 50.0,
            measurement_distance: 0.0,
        },
        camera_settings: None,
    };
    system.calculate_scales();
    system.calculate_camera_settings();
    system
}
