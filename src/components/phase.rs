use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::resources::AgentConfig;
use crate::utils::constants::CAPTURE_MARGIN;

/// Behavioral phase of a vehicle.
///
/// The phase is never stored as control state: it is rederived on every tick
/// from the wait timer and the distance to the ascend target, so the
/// transition logic stays testable apart from the force laws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightPhase {
    /// Resting on the ground until the wait timer elapses.
    Ground,
    /// Bounded-speed approach toward the ascend target.
    Ascend,
    /// Orbit maintenance around the sphere center.
    SphereRoam,
}

impl FlightPhase {
    /// Derive the phase for one tick.
    ///
    /// The distance test is evaluated on its own, independent of the ascend
    /// timing: a vehicle already inside the capture shell roams as soon as
    /// the wait window closes, without ever ascending.
    pub fn derive(elapsed: f64, position: &Vector3<f64>, config: &AgentConfig) -> Self {
        if elapsed < config.wait_seconds {
            return FlightPhase::Ground;
        }
        let dist = (config.ascend_target - position).norm();
        if dist <= config.sphere_radius + CAPTURE_MARGIN {
            FlightPhase::SphereRoam
        } else {
            FlightPhase::Ascend
        }
    }
}
