use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

use crate::components::KinematicState;
use crate::resources::AgentConfig;
use crate::systems::Stepper;
use crate::utils::constants::{FALLBACK_DT, TICK_MILLIS};

/// Everything the worker thread owns or shares with its agent.
pub(crate) struct WorkerContext {
    pub state: Arc<Mutex<KinematicState>>,
    pub config: Arc<AgentConfig>,
    pub running: Arc<AtomicBool>,
    pub seed: u64,
}

/// The periodic tick loop.
///
/// Each iteration measures the wall-clock delta since the previous tick
/// (falling back to a nominal delta when the clock resolution yields zero),
/// steps the state under the lock, then sleeps a fixed interval. The sleep
/// is deliberately not delta-compensated: the true tick period is the sleep
/// interval plus step-execution time.
pub(crate) fn run(context: WorkerContext) {
    let mut stepper = Stepper::from_seed(context.seed);
    let tick = Duration::from_millis(TICK_MILLIS);

    let start = Instant::now();
    let mut last = start;

    while context.running.load(Ordering::SeqCst) {
        let now = Instant::now();
        let mut dt = now.duration_since(last).as_secs_f64();
        if dt <= 0.0 {
            dt = FALLBACK_DT;
        }
        last = now;
        let elapsed = now.duration_since(start).as_secs_f64();

        // Snapshot under the lock, step outside it, commit the result.
        // A velocity injected between the two lock scopes is overwritten
        // by this tick, the same as any other mid-tick write.
        let snapshot = *context.state.lock().unwrap_or_else(PoisonError::into_inner);
        let next = stepper.step(&snapshot, &context.config, dt, elapsed);
        *context.state.lock().unwrap_or_else(PoisonError::into_inner) = next;

        thread::sleep(tick);
    }
}
