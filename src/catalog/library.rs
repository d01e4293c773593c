//! Built-in star-system library.
//!
//! Nine curated systems: the inner Solar System (the only one with a
//! satellite and therefore a planet mass), plus eight exoplanet systems
//! from transit/radial-velocity surveys. Orbital elements are in distance
//! units (1e5 km); masses in kilograms. Names are unique per system and
//! serve as primary keys.

use crate::types::{rotation_speed_from_period_hours, AU_TO_UNITS};

use super::{PlanetConfig, SatelliteConfig, ScalesConfig, StarConfig, StarSystemConfig};

/// Solar mass in kilograms, the reference for the exoplanet entries.
const SUN_MASS: f64 = 1.989e30;
/// Solar radius in distance units.
const SUN_RADIUS: f64 = 6.957;
/// Earth radius in distance units.
const EARTH_RADIUS: f64 = 0.06378;
/// Jupiter radius in Earth radii.
const JUPITER_RADIUS: f64 = 11.2 * EARTH_RADIUS;

/// Keys of all library systems, in menu order.
pub const SYSTEM_KEYS: &[&str] = &[
    "SolarInner",
    "Trappist1",
    "Kepler442",
    "ProximaCentauri",
    "Kepler11",
    "HD189733",
    "TrEs2",
    "Kepler90",
    "HD76920",
];

/// Look up a library system by key. Returns `None` for unknown keys.
pub fn by_key(key: &str) -> Option<StarSystemConfig> {
    match key {
        "SolarInner" => Some(solar_inner()),
        "Trappist1" => Some(trappist_1()),
        "Kepler442" => Some(kepler_442()),
        "ProximaCentauri" => Some(proxima_centauri()),
        "Kepler11" => Some(kepler_11()),
        "HD189733" => Some(hd_189733()),
        "TrEs2" => Some(tres_2()),
        "Kepler90" => Some(kepler_90()),
        "HD76920" => Some(hd_76920()),
        _ => None,
    }
}

fn star(name: &str, mass: f64, radius: f64, color: &str) -> StarConfig {
    StarConfig {
        name: name.to_owned(),
        mass,
        radius,
        color: color.to_owned(),
    }
}

fn planet(
    name: &str,
    radius: f64,
    semi_major: f64,
    eccentricity: f64,
    longitude_perihelion: f64,
    orbit_inclination: f64,
    color: &str,
) -> PlanetConfig {
    PlanetConfig {
        name: name.to_owned(),
        radius,
        semi_major,
        eccentricity,
        longitude_perihelion,
        orbit_inclination,
        color: color.to_owned(),
        texture: None,
        rotation_speed: 0.0,
        obliquity: 0.0,
        mass: None,
        visible: true,
        tilted: true,
    }
}

fn scales(
    star_scale: f64,
    planet_scale: f64,
    satellite_scale: f64,
    planet_distance_scale: f64,
    satellite_distance_scale: f64,
    measurement_distance: f64,
) -> ScalesConfig {
    ScalesConfig {
        star_scale,
        planet_scale,
        satellite_scale,
        planet_distance_scale,
        satellite_distance_scale,
        measurement_distance,
    }
}

/// Inner Solar System: Mercury through Mars plus the Moon. The reference
/// system for unit sanity checks; Earth carries a mass because it hosts
/// the Moon.
pub fn solar_inner() -> StarSystemConfig {
    let mut system = StarSystemConfig {
        name: "Inner Solar".to_owned(),
        star: star("Sol", SUN_MASS, SUN_RADIUS, "yellow"),
        planets: vec![
            PlanetConfig {
                rotation_speed: rotation_speed_from_period_hours(1407.6),
                obliquity: 0.034,
                texture: Some("imgs/planet-textures/solar/mercury.jpg".to_owned()),
                ..planet("Mercury", 0.02439, 579.1, 0.205, 77.45, 7.00487, "#bbb7ab")
            },
            PlanetConfig {
                // Retrograde rotation
                rotation_speed: rotation_speed_from_period_hours(-5832.5),
                obliquity: 177.4,
                texture: Some("imgs/planet-textures/solar/venus.jpg".to_owned()),
                ..planet("Venus", 0.06051, 1082.1, 0.007, 131.53, 3.39471, "#ddd8d4")
            },
            PlanetConfig {
                rotation_speed: rotation_speed_from_period_hours(23.9),
                obliquity: 23.4,
                mass: Some(5.9724e24),
                texture: Some("imgs/planet-textures/solar/earth.jpg".to_owned()),
                ..planet("Earth", EARTH_RADIUS, 1496.0, 0.017, 102.95, 0.00005, "#6b93d6")
            },
            PlanetConfig {
                rotation_speed: rotation_speed_from_period_hours(24.6),
                obliquity: 25.2,
                texture: Some("imgs/planet-textures/solar/mars.jpg".to_owned()),
                ..planet("Mars", 0.03396, 2279.2, 0.094, 336.04, 1.85061, "#c1440e")
            },
        ],
        satellites: vec![SatelliteConfig {
            name: "Moon".to_owned(),
            host_planet: "Earth".to_owned(),
            radius: 0.01738,
            semi_major: 3.844,
            eccentricity: 0.0549,
            longitude_perihelion: 180.0,
            orbit_inclination: 5.145,
            color: "#bbb7ab".to_owned(),
            texture: Some("imgs/planet-textures/solar/moon.jpg".to_owned()),
            rotation_speed: rotation_speed_from_period_hours(655.7),
            obliquity: 6.7,
            visible: false,
            tilted: true,
        }],
        scales: scales(40.0, 1000.0, 1000.0, 1.0, 50.0, 12_000.0),
        camera_settings: None,
    };
    system.calculate_camera_settings();
    system
}

/// Trappist-1: seven tightly packed Earth-sized planets around an
/// ultracool dwarf.
pub fn trappist_1() -> StarSystemConfig {
    let mut system = StarSystemConfig {
        name: "Trappist-1".to_owned(),
        star: star("Trappist-1", 0.0898 * SUN_MASS, 0.1192 * SUN_RADIUS, "red"),
        planets: vec![
            planet("b", 1.116 * EARTH_RADIUS, 0.01154 * AU_TO_UNITS, 0.006, 0.0, 0.00, "#bbb7ab"),
            planet("c", 1.097 * EARTH_RADIUS, 0.01580 * AU_TO_UNITS, 0.007, 0.0, 0.14, "#bbb7ab"),
            planet("d", 0.778 * EARTH_RADIUS, 0.02227 * AU_TO_UNITS, 0.008, 0.0, 0.33, "#bbb7ab"),
            planet("e", 0.920 * EARTH_RADIUS, 0.02925 * AU_TO_UNITS, 0.005, 0.0, 0.18, "#bbb7ab"),
            planet("f", 1.045 * EARTH_RADIUS, 0.03849 * AU_TO_UNITS, 0.010, 0.0, 0.12, "#bbb7ab"),
            planet("g", 1.129 * EARTH_RADIUS, 0.04683 * AU_TO_UNITS, 0.002, 0.0, 0.12, "#bbb7ab"),
            planet("h", 0.775 * EARTH_RADIUS, 0.06189 * AU_TO_UNITS, 0.006, 0.0, 0.24, "#bbb7ab"),
        ],
        satellites: vec![],
        scales: scales(10.0, 20.0, 20.0, 1.0, 50.0, 400.0),
        camera_settings: None,
    };
    system.calculate_camera_settings();
    system
}

/// Kepler-442: a super-Earth in the habitable zone.
pub fn kepler_442() -> StarSystemConfig {
    let mut system = StarSystemConfig {
        name: "Kepler-442".to_owned(),
        star: star("Kepler-442", 0.609 * SUN_MASS, 0.598 * SUN_RADIUS, "#ff6339"),
        planets: vec![planet(
            "b",
            1.34 * EARTH_RADIUS,
            0.409 * AU_TO_UNITS,
            0.04,
            0.0,
            0.0,
            "#a0522d",
        )],
        satellites: vec![],
        scales: scales(30.0, 300.0, 300.0, 1.0, 50.0, 3500.0),
        camera_settings: None,
    };
    system.calculate_camera_settings();
    system
}

/// Proxima Centauri: our nearest stellar neighbor and its planet b.
pub fn proxima_centauri() -> StarSystemConfig {
    let mut system = StarSystemConfig {
        name: "Proxima Centauri".to_owned(),
        star: star("Proxima Centauri", 0.12 * SUN_MASS, 0.154 * SUN_RADIUS, "#f26524"),
        planets: vec![planet(
            "Proxima Centauri b",
            1.1 * EARTH_RADIUS,
            0.048 * AU_TO_UNITS,
            0.124,
            0.0,
            0.0,
            "#b9875b",
        )],
        satellites: vec![],
        scales: scales(15.0, 60.0, 60.0, 1.0, 50.0, 1000.0),
        camera_settings: None,
    };
    system.calculate_camera_settings();
    system
}

/// Kepler-11: six transiting planets; eccentricity of g is poorly
/// constrained (< 0.15).
pub fn kepler_11() -> StarSystemConfig {
    let mut system = StarSystemConfig {
        name: "Kepler-11".to_owned(),
        star: star("Kepler-11", 0.961 * SUN_MASS, 1.020 * SUN_RADIUS, "#f4f74c"),
        planets: vec![
            planet("b", 1.83 * EARTH_RADIUS, 0.091 * AU_TO_UNITS, 0.05, 0.0, 0.0, "#da0356"),
            planet("c", 3.15 * EARTH_RADIUS, 0.107 * AU_TO_UNITS, 0.03, 0.0, 0.0, "#059bd9"),
            planet("d", 3.43 * EARTH_RADIUS, 0.155 * AU_TO_UNITS, 0.0, 0.0, 0.0, "#aa8135"),
            planet("e", 4.52 * EARTH_RADIUS, 0.195 * AU_TO_UNITS, 0.01, 0.0, 0.0, "#825094"),
            planet("f", 2.61 * EARTH_RADIUS, 0.24 * AU_TO_UNITS, 0.01, 0.0, 0.0, "#591b70"),
            planet("g", 3.66 * EARTH_RADIUS, 0.466 * AU_TO_UNITS, 0.15, 0.0, 0.0, "#24701b"),
        ],
        satellites: vec![],
        scales: scales(10.0, 45.0, 45.0, 1.0, 50.0, 1000.0),
        camera_settings: None,
    };
    system.calculate_camera_settings();
    system
}

/// HD 189733: a hot Jupiter on a 2.2-day orbit.
pub fn hd_189733() -> StarSystemConfig {
    let mut system = StarSystemConfig {
        name: "HD 189733".to_owned(),
        star: star("HD 189733", 0.9 * SUN_MASS, 0.781 * SUN_RADIUS, "#f97b07"),
        planets: vec![planet(
            "b",
            1.138 * JUPITER_RADIUS,
            0.03126 * AU_TO_UNITS,
            0.0,
            0.0,
            0.0,
            "#07a3f9",
        )],
        satellites: vec![],
        scales: scales(5.0, 10.0, 10.0, 1.0, 50.0, 1000.0),
        camera_settings: None,
    };
    system.calculate_camera_settings();
    system
}

/// TrEs-2: the darkest known exoplanet.
pub fn tres_2() -> StarSystemConfig {
    let mut system = StarSystemConfig {
        name: "TrEs-2".to_owned(),
        star: star("TrEs-2", 0.98 * SUN_MASS, 0.131 * SUN_RADIUS, "#efc403"),
        planets: vec![planet(
            "b",
            1.272 * JUPITER_RADIUS,
            0.03563 * AU_TO_UNITS,
            0.0,
            0.0,
            0.0,
            "#900c3f",
        )],
        satellites: vec![],
        scales: scales(20.0, 10.0, 10.0, 1.0, 50.0, 1500.0),
        camera_settings: None,
    };
    system.calculate_camera_settings();
    system
}

/// Kepler-90: eight planets; planet i sits out of letter order because it
/// was discovered later by revisiting transit data.
pub fn kepler_90() -> StarSystemConfig {
    let mut system = StarSystemConfig {
        name: "Kepler-90".to_owned(),
        star: star("Kepler-90", 1.2 * SUN_MASS, 1.2 * SUN_RADIUS, "yellow"),
        planets: vec![
            planet("b", 1.31 * EARTH_RADIUS, 0.074 * AU_TO_UNITS, 0.00, 0.0, 0.0, "#9e6645"),
            planet("c", 1.18 * EARTH_RADIUS, 0.089 * AU_TO_UNITS, 0.00, 0.0, 0.0, "#904d2a"),
            planet("i", 1.32 * EARTH_RADIUS, 0.107 * AU_TO_UNITS, 0.00, 0.0, 0.0, "#ac986e"),
            planet("d", 2.88 * EARTH_RADIUS, 0.32 * AU_TO_UNITS, 0.00, 0.0, 0.0, "#959293"),
            planet("e", 2.67 * EARTH_RADIUS, 0.42 * AU_TO_UNITS, 0.00, 0.0, 0.0, "#9eb3b8"),
            planet("f", 2.89 * EARTH_RADIUS, 0.48 * AU_TO_UNITS, 0.01, 0.0, 0.0, "#c4a86a"),
            planet("g", 8.13 * EARTH_RADIUS, 0.71 * AU_TO_UNITS, 0.049, 0.0, 0.0, "#b99068"),
            planet("h", 11.32 * EARTH_RADIUS, 1.01 * AU_TO_UNITS, 0.011, 0.0, 0.0, "#a6a031"),
        ],
        satellites: vec![],
        scales: scales(10.0, 45.0, 45.0, 1.0, 50.0, 1000.0),
        camera_settings: None,
    };
    system.calculate_camera_settings();
    system
}

/// HD 76920: a giant planet on an extremely eccentric orbit (e = 0.856)
/// around an evolved star.
pub fn hd_76920() -> StarSystemConfig {
    let mut system = StarSystemConfig {
        name: "HD 76920".to_owned(),
        star: star("HD 76920", 1.17 * SUN_MASS, 7.47 * SUN_RADIUS, "#f26524"),
        planets: vec![planet(
            "b",
            1.16 * JUPITER_RADIUS,
            1.149 * AU_TO_UNITS,
            0.856,
            0.0,
            0.0,
            "#ffffff",
        )],
        satellites: vec![],
        scales: scales(1.0, 10.0, 10.0, 1.0, 50.0, 1500.0),
        camera_settings: None,
    };
    system.calculate_camera_settings();
    system
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::BodyRegistry;

    #[test]
    fn all_keys_resolve() {
        for key in SYSTEM_KEYS {
            assert!(by_key(key).is_some(), "library key {key} should resolve");
        }
        assert!(by_key("Nonexistent").is_none());
    }

    #[test]
    fn every_library_system_loads() {
        // Each preset must pass full registry validation (unique names,
        // valid eccentricities, host masses present where needed).
        for key in SYSTEM_KEYS {
            let config = by_key(key).unwrap();
            BodyRegistry::from_config(&config)
                .unwrap_or_else(|e| panic!("library system {key} failed to load: {e}"));
        }
    }

    #[test]
    fn solar_inner_has_moon_hosted_by_earth() {
        let system = solar_inner();
        assert_eq!(system.satellites.len(), 1);
        assert_eq!(system.satellites[0].host_planet, "Earth");
        let earth = system.planets.iter().find(|p| p.name == "Earth").unwrap();
        assert_eq!(earth.mass, Some(5.9724e24));
    }

    #[test]
    fn venus_rotation_is_retrograde() {
        let system = solar_inner();
        let venus = system.planets.iter().find(|p| p.name == "Venus").unwrap();
        assert!(venus.rotation_speed < 0.0);
    }

    #[test]
    fn eccentricities_are_elliptical() {
        for key in SYSTEM_KEYS {
            let system = by_key(key).unwrap();
            for planet in &system.planets {
                assert!(
                    (0.0..1.0).contains(&planet.eccentricity),
                    "{key}/{} eccentricity out of range",
                    planet.name
                );
            }
        }
    }
}
