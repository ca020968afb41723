mod worker;

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};

use log::{info, warn};
use nalgebra::Vector3;

use crate::components::KinematicState;
use crate::resources::AgentConfig;
use crate::utils::SimError;

use worker::WorkerContext;

static NEXT_AGENT_ID: AtomicU64 = AtomicU64::new(0);

/// One autonomous vehicle: lock-protected kinematic state plus the worker
/// thread that steps it on a fixed period.
///
/// The worker is started with [`UavAgent::start`], asked to stop with
/// [`UavAgent::stop`] and released with [`UavAgent::join`]. Stopping is
/// cooperative: `stop` only clears the running flag, and the loop notices
/// it within one tick period plus step time. Skipping `join` leaks the
/// thread until process exit.
#[derive(Debug)]
pub struct UavAgent {
    id: u64,
    seed: u64,
    config: Arc<AgentConfig>,
    state: Arc<Mutex<KinematicState>>,
    running: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl UavAgent {
    /// Create an agent at rest at `initial_position`.
    ///
    /// The configuration is validated eagerly so degenerate values fail here
    /// instead of producing unbounded motion later. An unseeded config gets
    /// an entropy seed, which is logged since it makes the run
    /// unreproducible.
    pub fn new(initial_position: Vector3<f64>, config: AgentConfig) -> Result<Self, SimError> {
        config.validate()?;

        let id = NEXT_AGENT_ID.fetch_add(1, Ordering::Relaxed);
        let seed = match config.seed {
            Some(seed) => seed,
            None => {
                let seed = rand::random();
                warn!("uav-{}: no seed configured, using entropy ({})", id, seed);
                seed
            }
        };

        Ok(Self {
            id,
            seed,
            config: Arc::new(config),
            state: Arc::new(Mutex::new(KinematicState::at_position(initial_position))),
            running: Arc::new(AtomicBool::new(false)),
            worker: None,
        })
    }

    /// Stable identity, unique for the process lifetime.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Spawn the worker thread. No-op when already running.
    pub fn start(&mut self) -> Result<(), SimError> {
        if self.running.load(Ordering::SeqCst) {
            return Ok(());
        }
        // A previous worker that was stopped but never joined must be
        // released before the flag is raised again, or both loops would see
        // it set.
        self.join()?;

        self.running.store(true, Ordering::SeqCst);
        let context = WorkerContext {
            state: Arc::clone(&self.state),
            config: Arc::clone(&self.config),
            running: Arc::clone(&self.running),
            seed: self.seed,
        };

        match thread::Builder::new()
            .name(format!("uav-{}", self.id))
            .spawn(move || worker::run(context))
        {
            Ok(handle) => {
                info!("uav-{}: worker started", self.id);
                self.worker = Some(handle);
                Ok(())
            }
            Err(err) => {
                self.running.store(false, Ordering::SeqCst);
                Err(err.into())
            }
        }
    }

    /// Request termination. Returns immediately; completion is only
    /// guaranteed after [`UavAgent::join`].
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// Block until the worker thread has fully exited.
    pub fn join(&mut self) -> Result<(), SimError> {
        if let Some(handle) = self.worker.take() {
            handle
                .join()
                .map_err(|_| SimError::AgentError(format!("uav-{}: worker panicked", self.id)))?;
            info!("uav-{}: worker joined", self.id);
        }
        Ok(())
    }

    /// Copy of the current position.
    pub fn position(&self) -> Vector3<f64> {
        self.lock_state().position
    }

    /// Copy of the current velocity.
    pub fn velocity(&self) -> Vector3<f64> {
        self.lock_state().velocity
    }

    /// Atomically consistent copy of the whole kinematic triple.
    pub fn snapshot(&self) -> KinematicState {
        *self.lock_state()
    }

    pub fn set_velocity(&self, velocity: Vector3<f64>) {
        self.lock_state().velocity = velocity;
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, KinematicState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[cfg(test)]
    pub(crate) fn set_position(&self, position: Vector3<f64>) {
        self.lock_state().position = position;
    }
}

impl Drop for UavAgent {
    fn drop(&mut self) {
        self.stop();
        let _ = self.join();
    }
}

/// Exchange the two agents' velocity vectors, leaving every other field
/// untouched.
///
/// Both state locks are taken internally, ordered by agent id, so any mix of
/// concurrent swaps stays deadlock-free without a caller-side locking
/// discipline. Swapping an agent with itself is a no-op.
pub fn swap_velocities(a: &UavAgent, b: &UavAgent) {
    if a.id == b.id {
        return;
    }
    let (first, second) = if a.id < b.id { (a, b) } else { (b, a) };

    let mut first_state = first.state.lock().unwrap_or_else(PoisonError::into_inner);
    let mut second_state = second.state.lock().unwrap_or_else(PoisonError::into_inner);
    std::mem::swap(&mut first_state.velocity, &mut second_state.velocity);
}
