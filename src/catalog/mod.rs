//! Star-system catalog: the declarative body lists consumed by the engine.
//!
//! A [`StarSystemConfig`] comes from one of three places: the built-in
//! [`library`], the seeded [`random`] generator, or user-supplied JSON.
//! All three produce the same normalized record shape; the engine never
//! cares which one it was.

pub mod library;
pub mod random;

use serde::{Deserialize, Serialize};

/// Complete declarative description of a star system plus its
/// visualization scales and camera hints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarSystemConfig {
    /// Display name of the system.
    pub name: String,
    /// The central star. Static, at the origin.
    pub star: StarConfig,
    /// Bodies orbiting the star.
    #[serde(default)]
    pub planets: Vec<PlanetConfig>,
    /// Bodies orbiting planets, keyed to their host by name.
    #[serde(default)]
    pub satellites: Vec<SatelliteConfig>,
    /// Distance and size scales for visualization.
    pub scales: ScalesConfig,
    /// Camera placement hints for the renderer. Inert to the engine.
    #[serde(default)]
    pub camera_settings: Option<CameraSettings>,
}

/// The central star. It does not respond to forces and never moves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarConfig {
    /// Unique name, primary key across the whole system.
    pub name: String,
    /// Mass in kilograms.
    pub mass: f64,
    /// Visual radius in distance units.
    pub radius: f64,
    /// Display color (CSS name or hex), passed through to the renderer.
    #[serde(default)]
    pub color: String,
}

/// Orbital elements and visuals for a planet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetConfig {
    /// Unique name, primary key across the whole system.
    pub name: String,
    /// Visual radius in distance units.
    pub radius: f64,
    /// Semi-major axis in distance units, unscaled.
    pub semi_major: f64,
    /// Orbital eccentricity, 0 <= e < 1.
    pub eccentricity: f64,
    /// Longitude of perihelion in degrees.
    #[serde(default)]
    pub longitude_perihelion: f64,
    /// Orbital-plane inclination in degrees.
    #[serde(default)]
    pub orbit_inclination: f64,
    /// Display color, passed through to the renderer.
    #[serde(default)]
    pub color: String,
    /// Optional texture path, passed through to the renderer.
    #[serde(default)]
    pub texture: Option<String>,
    /// Self-rotation speed in radians per time unit.
    #[serde(default)]
    pub rotation_speed: f64,
    /// Axial obliquity in degrees. Carried but not simulated.
    #[serde(default)]
    pub obliquity: f64,
    /// Mass in kilograms. Required for any planet that hosts satellites.
    #[serde(default)]
    pub mass: Option<f64>,
    /// Initial visibility for the renderer.
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Whether the global inclination toggle affects this body.
    #[serde(default = "default_true")]
    pub tilted: bool,
}

/// Orbital elements and visuals for a satellite of a planet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SatelliteConfig {
    /// Unique name, primary key across the whole system.
    pub name: String,
    /// Name of the host planet. Must resolve within the same system.
    pub host_planet: String,
    /// Visual radius in distance units.
    pub radius: f64,
    /// Semi-major axis in distance units, relative to the host, unscaled.
    pub semi_major: f64,
    /// Orbital eccentricity, 0 <= e < 1.
    pub eccentricity: f64,
    /// Longitude of perihelion in degrees, relative to the host's plane.
    #[serde(default)]
    pub longitude_perihelion: f64,
    /// Orbital-plane inclination in degrees, added to the host's.
    #[serde(default)]
    pub orbit_inclination: f64,
    /// Display color, passed through to the renderer.
    #[serde(default)]
    pub color: String,
    /// Optional texture path, passed through to the renderer.
    #[serde(default)]
    pub texture: Option<String>,
    /// Self-rotation speed in radians per time unit.
    #[serde(default)]
    pub rotation_speed: f64,
    /// Axial obliquity in degrees. Carried but not simulated.
    #[serde(default)]
    pub obliquity: f64,
    /// Initial visibility for the renderer.
    #[serde(default)]
    pub visible: bool,
    /// Whether the global inclination toggle affects this body.
    #[serde(default = "default_true")]
    pub tilted: bool,
}

/// Visualization scales. Distance scales multiply semi-major/semi-minor
/// axes at placement time only; size scales are renderer-only.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScalesConfig {
    /// Visual size multiplier for the star.
    pub star_scale: f64,
    /// Visual size multiplier for planets.
    pub planet_scale: f64,
    /// Visual size multiplier for satellites.
    pub satellite_scale: f64,
    /// Distance multiplier for planet orbits.
    pub planet_distance_scale: f64,
    /// Distance multiplier for satellite orbits.
    pub satellite_distance_scale: f64,
    /// Camera distance for photometry measurement mode.
    pub measurement_distance: f64,
}

/// Camera placement hints derived from the system's extent.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraSettings {
    /// Initial camera position in distance units.
    pub position: [f64; 3],
    /// Distance for measurement mode.
    pub measurement_distance: f64,
    /// Field of view in degrees.
    pub fov: f64,
    /// Viewport aspect ratio.
    pub aspect: f64,
    /// Near clip plane.
    pub near: f64,
    /// Far clip plane.
    pub far: f64,
}

fn default_true() -> bool {
    true
}

impl StarSystemConfig {
    /// Parse a user-supplied JSON system description.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize back to JSON, for export of random/edited systems.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Largest planet semi-major axis, the characteristic extent used by
    /// the scale and camera heuristics.
    pub fn largest_semi_major(&self) -> f64 {
        self.planets.iter().fold(0.0, |acc, p| acc.max(p.semi_major))
    }

    /// Derive camera settings from the system's extent, assuming the
    /// star sits at the origin.
    pub fn calculate_camera_settings(&mut self) {
        let largest = self.largest_semi_major();
        self.camera_settings = Some(CameraSettings {
            position: [0.0, 0.0, largest * 7.0],
            measurement_distance: largest * 6.0,
            fov: 20.0,
            aspect: 2.0,
            near: 0.1,
            far: 50_000.0,
        });
    }

    /// Estimate scales from the system's extent. Rough heuristic for
    /// generated systems; curated library entries set scales explicitly.
    pub fn calculate_scales(&mut self) {
        let largest = self.largest_semi_major();
        self.scales = ScalesConfig {
            star_scale: largest / 50.0,
            planet_scale: largest / 2.0,
            satellite_scale: largest / 2.0,
            planet_distance_scale: 1.0,
            satellite_distance_scale: 50.0,
            measurement_distance: largest * 6.0,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn json_round_trip_preserves_config() {
        let system = library::solar_inner();
        let json = system.to_json().unwrap();
        let back = StarSystemConfig::from_json(&json).unwrap();
        assert_eq!(system, back);
    }

    #[test]
    fn camel_case_field_names_on_the_wire() {
        let system = library::solar_inner();
        let json = system.to_json().unwrap();
        assert!(json.contains("\"semiMajor\""));
        assert!(json.contains("\"longitudePerihelion\""));
        assert!(json.contains("\"hostPlanet\""));
        assert!(json.contains("\"planetDistanceScale\""));
    }

    #[test]
    fn minimal_custom_json_fills_defaults() {
        let json = r#"{
            "name": "Custom",
            "star": {"name": "X", "mass": 2e30, "radius": 5.0},
            "planets": [
                {"name": "b", "radius": 0.05, "semiMajor": 700.0, "eccentricity": 0.1}
            ],
            "scales": {
                "starScale": 10.0, "planetScale": 100.0, "satelliteScale": 100.0,
                "planetDistanceScale": 1.0, "satelliteDistanceScale": 50.0,
                "measurementDistance": 4000.0
            }
        }"#;
        let system = StarSystemConfig::from_json(json).unwrap();
        assert_eq!(system.planets.len(), 1);
        assert!(system.satellites.is_empty());
        let planet = &system.planets[0];
        assert!(planet.tilted);
        assert!(planet.visible);
        assert_eq!(planet.mass, None);
        assert_eq!(planet.longitude_perihelion, 0.0);
    }

    #[test]
    fn camera_heuristic_tracks_largest_orbit() {
        let mut system = library::solar_inner();
        system.calculate_camera_settings();
        let camera = system.camera_settings.unwrap();
        let largest = system.largest_semi_major();
        assert_relative_eq!(camera.position[2], largest * 7.0);
        assert_relative_eq!(camera.measurement_distance, largest * 6.0);
    }
}
