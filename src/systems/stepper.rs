use log::debug;
use nalgebra::Vector3;
use rand_chacha::ChaCha8Rng;

use crate::components::{FlightPhase, KinematicState};
use crate::resources::AgentConfig;
use crate::systems::forces::{ascend_force, roam_force};

/// Per-agent step engine.
///
/// Owns the agent's random stream and remembers the last derived phase for
/// transition logging. Everything else is pure: the caller supplies the
/// state snapshot, the measured time delta and the elapsed time, and stores
/// the result back under its own lock.
#[derive(Debug)]
pub struct Stepper {
    rng: ChaCha8Rng,
    phase: Option<FlightPhase>,
}

impl Stepper {
    pub fn new(rng: ChaCha8Rng) -> Self {
        Self { rng, phase: None }
    }

    pub fn from_seed(seed: u64) -> Self {
        use rand::SeedableRng;
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Phase derived on the most recent step, if any.
    pub fn phase(&self) -> Option<FlightPhase> {
        self.phase
    }

    /// Advance one tick: derive the phase, compute the actuator force and
    /// integrate over `dt`.
    pub fn step(
        &mut self,
        state: &KinematicState,
        config: &AgentConfig,
        dt: f64,
        elapsed: f64,
    ) -> KinematicState {
        let phase = FlightPhase::derive(elapsed, &state.position, config);
        if self.phase != Some(phase) {
            debug!("phase {:?} at t={:.2}s", phase, elapsed);
            self.phase = Some(phase);
        }

        match phase {
            FlightPhase::Ground => ground_hold(state),
            FlightPhase::Ascend => {
                integrate(state, ascend_force(state, config, dt), config, dt)
            }
            FlightPhase::SphereRoam => {
                let force = roam_force(state, config, dt, elapsed, &mut self.rng);
                integrate(state, force, config, dt)
            }
        }
    }
}

/// Ground phase: pin the vehicle to the ground plane with no motion,
/// whatever velocity it entered the tick with.
fn ground_hold(state: &KinematicState) -> KinematicState {
    KinematicState {
        position: Vector3::new(
            state.position.x,
            state.position.y,
            state.position.z.max(0.0),
        ),
        velocity: Vector3::zeros(),
        acceleration: Vector3::zeros(),
    }
}

/// Constant-acceleration kinematics over `dt`.
///
/// The clamped actuator force is the only force integrated: gravity acts
/// through the feed-forward term inside the force laws, never as a separate
/// term here, so the clamp bounds the entire commanded acceleration.
fn integrate(
    state: &KinematicState,
    actuator: Vector3<f64>,
    config: &AgentConfig,
    dt: f64,
) -> KinematicState {
    let acceleration = actuator / config.mass;

    let mut position = state.position + state.velocity * dt + 0.5 * acceleration * dt * dt;
    let mut velocity = state.velocity + acceleration * dt;

    if position.z < 0.0 {
        position.z = 0.0;
        velocity.z = 0.0;
    }

    KinematicState {
        position,
        velocity,
        acceleration,
    }
}
