//! Scaled unit system and the simulation clock.
//!
//! All physics runs in a scaled unit system rather than SI: one distance
//! unit is 10^5 km (10^8 m) and one time unit is 24 hours. Masses stay in
//! kilograms. The gravitational constant below is expressed in those units,
//! so every formula in the solver and integrator is consistent as long as
//! it only uses values from this module.

use bevy::prelude::*;

/// System sets ordering engine work within a frame.
///
/// Command handling must complete before integration so that scale and
/// tilt changes are atomic with respect to the frame's physics step.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum EngineSet {
    /// Configuration command processing (loads, scales, tilt).
    Commands,
    /// Fixed sub-step integration.
    Integrate,
}

/// Hours per simulated time unit (one time unit ~ an Earth day).
pub const TIME_UNIT_HOURS: f64 = 24.0;

/// Time units per hour.
pub const HOURS_TO_TIME_UNIT: f64 = 1.0 / TIME_UNIT_HOURS;

/// Kilometers per distance unit.
pub const DISTANCE_UNIT_KM: f64 = 1e5;

/// Seconds per time unit.
pub const SECONDS_PER_TIME_UNIT: f64 = 86_400.0;

/// Astronomical unit expressed in distance units.
pub const AU_TO_UNITS: f64 = 1495.978707;

/// Gravitational constant in (distance-unit)^3 * kg^-1 * (time-unit)^-2.
///
/// Derived from the SI value: scaled by (time unit in seconds)^2 and by
/// (distance unit in meters)^-3 = 1e-24.
pub const G_SCALED: f64 = 6.6743e-11 * SECONDS_PER_TIME_UNIT * SECONDS_PER_TIME_UNIT * 1e-24;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Radians to degrees conversion factor
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Convert a self-rotation period in hours to an angular speed in
/// radians per time unit. Negative periods yield retrograde spin.
pub fn rotation_speed_from_period_hours(period_hours: f64) -> f64 {
    std::f64::consts::TAU / HOURS_TO_TIME_UNIT / period_hours
}

/// Simulation clock resource tracking accumulated time and stepping rate.
///
/// `time` only advances while `running` is true, by exactly `step * speed`
/// per frame tick. `speed` is the number of fixed sub-steps the integrator
/// executes per frame; zero effectively pauses the physics without
/// touching the `running` flag.
#[derive(Resource, Clone, Debug)]
pub struct SimulationClock {
    /// Accumulated simulated time since the last reset, in time units.
    pub time: f64,
    /// Fixed sub-step size in time units.
    step: f64,
    /// Sub-steps per frame.
    speed: u32,
    /// Whether physics advances at all.
    pub running: bool,
    /// Whether bodies spin on their own axis.
    pub rotation_enabled: bool,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self {
            time: 0.0,
            step: 0.01,
            speed: 5,
            running: true,
            rotation_enabled: false,
        }
    }
}

impl SimulationClock {
    /// Fixed sub-step size in time units.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Sub-steps per frame.
    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Set the number of sub-steps per frame. Negative values clamp to
    /// zero, which pauses the physics while keeping the frame loop alive.
    pub fn set_speed(&mut self, value: i64) {
        self.speed = value.clamp(0, u32::MAX as i64) as u32;
    }

    /// Set the sub-step size. Values above ~0.1 time units compromise
    /// integration stability; non-positive or non-finite values are
    /// rejected.
    pub fn set_step(&mut self, value: f64) {
        if value.is_finite() && value > 0.0 {
            self.step = value;
        } else {
            warn!("ignoring invalid simulation step {value}");
        }
    }

    /// Advance the clock by one frame tick.
    pub fn frame_advance(&mut self) {
        if self.running {
            self.time += self.step * self.speed as f64;
        }
    }

    /// Zero the accumulated time. Stepping rate and flags are preserved.
    pub fn reset(&mut self) {
        self.time = 0.0;
    }
}
