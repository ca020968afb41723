use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Kinematic state of a single vehicle, world frame, z-up.
///
/// Mutated only by the stepper, under the agent's state lock, once per tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct KinematicState {
    /// Position in world space [m]
    pub position: Vector3<f64>,

    /// Linear velocity in world space [m/s]
    pub velocity: Vector3<f64>,

    /// Linear acceleration in world space [m/s²]
    pub acceleration: Vector3<f64>,
}

impl Default for KinematicState {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            acceleration: Vector3::zeros(),
        }
    }
}

impl KinematicState {
    /// Create a state at rest at a specific position.
    pub fn at_position(position: Vector3<f64>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }
}
