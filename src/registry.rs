//! Body registry: the engine's authoritative data model.
//!
//! Built once per configuration load from a [`StarSystemConfig`]. Static
//! orbital elements and live physical state are kept in parallel vectors
//! keyed by the same handle, so catalog data is never aliased by the
//! integrator. Host relationships are resolved by name exactly once, at
//! load time, and cached as indices on each satellite record.

use std::collections::HashMap;

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::catalog::{PlanetConfig, SatelliteConfig, ScalesConfig, StarSystemConfig};

/// Configuration errors. All are fatal to the load: the engine either has
/// a fully valid state for every body or refuses to start stepping.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Body names are primary keys and must be unique system-wide.
    #[error("duplicate body name `{0}`")]
    DuplicateName(String),
    /// A satellite names a host that is not a planet in this system.
    #[error("satellite `{satellite}` references unknown host planet `{host}`")]
    UnknownHost { satellite: String, host: String },
    /// Host mass is required to compute satellite orbits.
    #[error("planet `{0}` hosts satellites but has no mass")]
    MissingHostMass(String),
    /// Only elliptical orbits are supported; e >= 1 would give a
    /// non-finite semi-minor axis.
    #[error("body `{name}` has eccentricity {value}, outside [0, 1)")]
    InvalidEccentricity { name: String, value: f64 },
    #[error("body `{name}` has non-positive semi-major axis {value}")]
    InvalidSemiMajor { name: String, value: f64 },
    /// A zero-hour rotation period converts to an infinite angular speed.
    #[error("body `{name}` has non-finite rotation speed {value}")]
    InvalidRotationSpeed { name: String, value: f64 },
    #[error("star `{0}` has non-finite or non-positive mass")]
    InvalidStarMass(String),
    #[error("invalid system JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Handle to a planet in the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlanetId(pub(crate) usize);

/// Handle to a satellite in the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SatelliteId(pub(crate) usize);

/// Handle to any body, resolved from a name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyRef {
    Star,
    Planet(PlanetId),
    Satellite(SatelliteId),
}

/// Static orbital elements, immutable after construction. Distance scales
/// are applied at placement time, never stored here.
#[derive(Clone, Debug)]
pub struct OrbitalElements {
    /// Semi-major axis in distance units.
    pub semi_major: f64,
    /// Derived: semi_major * sqrt(1 - e^2).
    pub semi_minor: f64,
    /// Eccentricity, 0 <= e < 1.
    pub eccentricity: f64,
    /// Longitude of perihelion in degrees.
    pub longitude_perihelion: f64,
    /// Orbital-plane inclination in degrees.
    pub orbit_inclination: f64,
    /// Whether the global inclination toggle affects this body.
    pub tilted: bool,
    /// Mass in kilograms; required only for satellite hosts.
    pub mass: Option<f64>,
    /// Self-rotation speed in radians per time unit.
    pub rotation_speed: f64,
    /// Visual radius in distance units (renderer concern, stored
    /// alongside for glow/orbit sizing).
    pub radius: f64,
}

impl OrbitalElements {
    fn new(
        name: &str,
        semi_major: f64,
        eccentricity: f64,
        longitude_perihelion: f64,
        orbit_inclination: f64,
        tilted: bool,
        mass: Option<f64>,
        rotation_speed: f64,
        radius: f64,
    ) -> Result<Self, ConfigError> {
        if !(0.0..1.0).contains(&eccentricity) || !eccentricity.is_finite() {
            return Err(ConfigError::InvalidEccentricity {
                name: name.to_owned(),
                value: eccentricity,
            });
        }
        if !semi_major.is_finite() || semi_major <= 0.0 {
            return Err(ConfigError::InvalidSemiMajor {
                name: name.to_owned(),
                value: semi_major,
            });
        }
        if !rotation_speed.is_finite() {
            return Err(ConfigError::InvalidRotationSpeed {
                name: name.to_owned(),
                value: rotation_speed,
            });
        }
        Ok(Self {
            semi_major,
            semi_minor: semi_major * (1.0 - eccentricity * eccentricity).sqrt(),
            eccentricity,
            longitude_perihelion,
            orbit_inclination,
            tilted,
            mass,
            rotation_speed,
            radius,
        })
    }
}

/// The central star. Static at the origin; never integrated.
#[derive(Clone, Debug)]
pub struct Star {
    pub name: String,
    /// Mass in kilograms.
    pub mass: f64,
    /// Visual radius in distance units.
    pub radius: f64,
}

/// A planet record: name plus immutable elements. Live state lives in the
/// registry's parallel state vector.
#[derive(Clone, Debug)]
pub struct Planet {
    pub name: String,
    pub elements: OrbitalElements,
}

/// A satellite record with its host resolved to a planet handle.
#[derive(Clone, Debug)]
pub struct Satellite {
    pub name: String,
    pub host: PlanetId,
    pub elements: OrbitalElements,
}

/// Mutable per-body physical state. The initial condition solver writes it
/// on (re)initialization, the integrator during stepping, and the tilt
/// transform during inclination toggles; nothing else.
#[derive(Clone, Copy, Debug, Default)]
pub struct PhysicalState {
    /// Position in distance units.
    pub position: DVec3,
    /// Velocity in distance units per time unit.
    pub velocity: DVec3,
    /// Self-rotation angle in radians.
    pub spin: f64,
}

/// Read-only view of one body's live state, for external consumers
/// (camera targeting, UI readouts).
#[derive(Clone, Copy, Debug)]
pub struct BodySnapshot {
    pub position: DVec3,
    pub velocity: DVec3,
    pub spin: f64,
}

/// Distance and size scales, mutable via commands. Distance scales apply
/// at placement time only; size scales are renderer-only and carried here
/// so the whole visual configuration lives in one place.
#[derive(Resource, Clone, Copy, Debug)]
pub struct Scales {
    pub planet_distance_scale: f64,
    pub satellite_distance_scale: f64,
    pub star_scale: f64,
    pub planet_scale: f64,
    pub satellite_scale: f64,
}

impl From<ScalesConfig> for Scales {
    fn from(config: ScalesConfig) -> Self {
        Self {
            planet_distance_scale: config.planet_distance_scale,
            satellite_distance_scale: config.satellite_distance_scale,
            star_scale: config.star_scale,
            planet_scale: config.planet_scale,
            satellite_scale: config.satellite_scale,
        }
    }
}

/// Global orbit-inclination toggle state.
#[derive(Resource, Clone, Copy, Debug)]
pub struct OrbitInclination {
    pub enabled: bool,
}

impl Default for OrbitInclination {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// The body registry resource: star, planets, satellites, their live
/// states, and the name lookup table.
#[derive(Resource, Clone, Debug)]
pub struct BodyRegistry {
    star: Star,
    planets: Vec<Planet>,
    satellites: Vec<Satellite>,
    planet_states: Vec<PhysicalState>,
    satellite_states: Vec<PhysicalState>,
    names: HashMap<String, BodyRef>,
}

impl BodyRegistry {
    /// Validate a configuration and build the registry. Physical states
    /// are zeroed; the initial condition solver populates them.
    pub fn from_config(config: &StarSystemConfig) -> Result<Self, ConfigError> {
        if !config.star.mass.is_finite() || config.star.mass <= 0.0 {
            return Err(ConfigError::InvalidStarMass(config.star.name.clone()));
        }

        let mut names = HashMap::new();
        names.insert(config.star.name.clone(), BodyRef::Star);

        let mut planets = Vec::with_capacity(config.planets.len());
        for (index, planet) in config.planets.iter().enumerate() {
            if names
                .insert(planet.name.clone(), BodyRef::Planet(PlanetId(index)))
                .is_some()
            {
                return Err(ConfigError::DuplicateName(planet.name.clone()));
            }
            planets.push(Planet {
                name: planet.name.clone(),
                elements: planet_elements(planet)?,
            });
        }

        let mut satellites = Vec::with_capacity(config.satellites.len());
        for (index, satellite) in config.satellites.iter().enumerate() {
            if names
                .insert(
                    satellite.name.clone(),
                    BodyRef::Satellite(SatelliteId(index)),
                )
                .is_some()
            {
                return Err(ConfigError::DuplicateName(satellite.name.clone()));
            }
            let host = match names.get(&satellite.host_planet) {
                Some(BodyRef::Planet(id)) => *id,
                _ => {
                    return Err(ConfigError::UnknownHost {
                        satellite: satellite.name.clone(),
                        host: satellite.host_planet.clone(),
                    });
                }
            };
            // A host without mass cannot exert gravity on its satellite.
            if planets[host.0].elements.mass.is_none() {
                return Err(ConfigError::MissingHostMass(planets[host.0].name.clone()));
            }
            satellites.push(Satellite {
                name: satellite.name.clone(),
                host,
                elements: satellite_elements(satellite)?,
            });
        }

        let planet_states = vec![PhysicalState::default(); planets.len()];
        let satellite_states = vec![PhysicalState::default(); satellites.len()];

        Ok(Self {
            star: Star {
                name: config.star.name.clone(),
                mass: config.star.mass,
                radius: config.star.radius,
            },
            planets,
            satellites,
            planet_states,
            satellite_states,
            names,
        })
    }

    pub fn star(&self) -> &Star {
        &self.star
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn satellites(&self) -> &[Satellite] {
        &self.satellites
    }

    pub fn planet_states(&self) -> &[PhysicalState] {
        &self.planet_states
    }

    pub fn satellite_states(&self) -> &[PhysicalState] {
        &self.satellite_states
    }

    /// Split borrow for planet stepping: records immutable, states mutable.
    pub fn planet_parts_mut(&mut self) -> (&[Planet], &mut [PhysicalState]) {
        (&self.planets, &mut self.planet_states)
    }

    /// Split borrow for satellite stepping and solving: planet records and
    /// states immutable (host lookup), satellite states mutable.
    pub fn satellite_parts_mut(
        &mut self,
    ) -> (
        &[Planet],
        &[PhysicalState],
        &[Satellite],
        &mut [PhysicalState],
    ) {
        (
            &self.planets,
            &self.planet_states,
            &self.satellites,
            &mut self.satellite_states,
        )
    }

    /// Split borrow for the tilt transform, which rewrites both tiers in
    /// one pass.
    pub fn tilt_parts_mut(
        &mut self,
    ) -> (
        &[Planet],
        &mut [PhysicalState],
        &[Satellite],
        &mut [PhysicalState],
    ) {
        (
            &self.planets,
            &mut self.planet_states,
            &self.satellites,
            &mut self.satellite_states,
        )
    }

    /// The planet a satellite orbits.
    pub fn host_planet(&self, satellite: &Satellite) -> &Planet {
        &self.planets[satellite.host.0]
    }

    pub fn planet_state_mut(&mut self, id: PlanetId) -> &mut PhysicalState {
        &mut self.planet_states[id.0]
    }

    pub fn satellite_state_mut(&mut self, id: SatelliteId) -> &mut PhysicalState {
        &mut self.satellite_states[id.0]
    }

    /// Resolve a body name to a handle. Names are primary keys, so this
    /// is exact, case-sensitive lookup.
    pub fn lookup(&self, name: &str) -> Option<BodyRef> {
        self.names.get(name).copied()
    }

    /// Read-only snapshot of a body's live state by name. The star is
    /// static at the origin.
    pub fn snapshot(&self, name: &str) -> Option<BodySnapshot> {
        let state = match self.lookup(name)? {
            BodyRef::Star => {
                return Some(BodySnapshot {
                    position: DVec3::ZERO,
                    velocity: DVec3::ZERO,
                    spin: 0.0,
                });
            }
            BodyRef::Planet(id) => self.planet_states[id.0],
            BodyRef::Satellite(id) => self.satellite_states[id.0],
        };
        Some(BodySnapshot {
            position: state.position,
            velocity: state.velocity,
            spin: state.spin,
        })
    }
}

fn planet_elements(config: &PlanetConfig) -> Result<OrbitalElements, ConfigError> {
    OrbitalElements::new(
        &config.name,
        config.semi_major,
        config.eccentricity,
        config.longitude_perihelion,
        config.orbit_inclination,
        config.tilted,
        config.mass,
        config.rotation_speed,
        config.radius,
    )
}

fn satellite_elements(config: &SatelliteConfig) -> Result<OrbitalElements, ConfigError> {
    OrbitalElements::new(
        &config.name,
        config.semi_major,
        config.eccentricity,
        config.longitude_perihelion,
        config.orbit_inclination,
        config.tilted,
        None,
        config.rotation_speed,
        config.radius,
    )
}
