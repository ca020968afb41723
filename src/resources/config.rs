use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::utils::SimError;

/// Per-vehicle control configuration.
///
/// Read-only once the agent is running; validated eagerly at agent
/// construction so degenerate values never reach the control loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Vehicle mass [kg]
    pub mass: f64,
    /// Actuator force limit [N]
    pub max_force: f64,
    /// Magnitude of the constant downward gravity force [N]
    pub gravity: f64,
    /// Bounding-cube edge used for proximity checks [m]
    pub size: f64,
    /// Point approached during ascent [m]
    pub ascend_target: Vector3<f64>,
    /// Center of the roaming sphere [m]
    pub sphere_center: Vector3<f64>,
    /// Target orbit radius [m]
    pub sphere_radius: f64,
    /// Ground hold before takeoff [s]
    pub wait_seconds: f64,
    /// Speed bound while ascending [m/s]
    pub max_ascend_speed: f64,
    /// Lower bound of the tangential wander speed [m/s]
    pub min_tangential_speed: f64,
    /// Upper bound of the tangential wander speed [m/s]
    pub max_tangential_speed: f64,
    /// Seed for the vehicle's random stream. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            mass: 1.0,
            max_force: 20.0,
            gravity: 10.0,
            size: 0.20,
            ascend_target: Vector3::new(0.0, 0.0, 50.0),
            sphere_center: Vector3::new(0.0, 0.0, 50.0),
            sphere_radius: 10.0,
            wait_seconds: 5.0,
            max_ascend_speed: 2.0,
            min_tangential_speed: 2.0,
            max_tangential_speed: 10.0,
            seed: None,
        }
    }
}

impl AgentConfig {
    /// Load and validate a configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let contents = fs::read_to_string(path)?;
        let config: AgentConfig = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject configurations that would produce undefined motion.
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.mass > 0.0 && self.mass.is_finite()) {
            return Err(SimError::InvalidConfig(format!(
                "mass must be positive, got {}",
                self.mass
            )));
        }
        if !(self.max_force > 0.0 && self.max_force.is_finite()) {
            return Err(SimError::InvalidConfig(format!(
                "max_force must be positive, got {}",
                self.max_force
            )));
        }
        if !(self.gravity >= 0.0 && self.gravity.is_finite()) {
            return Err(SimError::InvalidConfig(format!(
                "gravity must be non-negative, got {}",
                self.gravity
            )));
        }
        if !(self.size > 0.0 && self.size.is_finite()) {
            return Err(SimError::InvalidConfig(format!(
                "size must be positive, got {}",
                self.size
            )));
        }
        if !(self.sphere_radius > 0.0 && self.sphere_radius.is_finite()) {
            return Err(SimError::InvalidConfig(format!(
                "sphere_radius must be positive, got {}",
                self.sphere_radius
            )));
        }
        if !(self.wait_seconds >= 0.0 && self.wait_seconds.is_finite()) {
            return Err(SimError::InvalidConfig(format!(
                "wait_seconds must be non-negative, got {}",
                self.wait_seconds
            )));
        }
        if !(self.max_ascend_speed > 0.0 && self.max_ascend_speed.is_finite()) {
            return Err(SimError::InvalidConfig(format!(
                "max_ascend_speed must be positive, got {}",
                self.max_ascend_speed
            )));
        }
        if !(self.min_tangential_speed >= 0.0 && self.min_tangential_speed.is_finite()) {
            return Err(SimError::InvalidConfig(format!(
                "min_tangential_speed must be non-negative, got {}",
                self.min_tangential_speed
            )));
        }
        if !(self.max_tangential_speed >= self.min_tangential_speed
            && self.max_tangential_speed.is_finite())
        {
            return Err(SimError::InvalidConfig(format!(
                "tangential speed range is inverted: min {} > max {}",
                self.min_tangential_speed, self.max_tangential_speed
            )));
        }
        Ok(())
    }
}
