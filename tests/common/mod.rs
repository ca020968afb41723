#![allow(dead_code)]

use skyswarm::{AgentConfig, KinematicState};

/// Standard seeded test configuration: the literal launch scenario
/// (wait 5 s, target (0,0,50), radius 10, mass 1, 20 N, 10 N gravity).
pub fn test_config(seed: u64) -> AgentConfig {
    AgentConfig::default().with_seed(seed)
}

/// Same scenario with a short ground hold, for tests that run the real
/// worker thread and cannot wait out the full window.
pub fn quick_start_config(seed: u64) -> AgentConfig {
    AgentConfig {
        wait_seconds: 0.1,
        ..test_config(seed)
    }
}

/// Assert that a kinematic state is physically sane: finite everywhere and
/// never below the ground plane.
#[track_caller]
pub fn assert_state_valid(state: &KinematicState) {
    assert!(state.position.iter().all(|c| c.is_finite()), "position is not finite");
    assert!(state.velocity.iter().all(|c| c.is_finite()), "velocity is not finite");
    assert!(
        state.acceleration.iter().all(|c| c.is_finite()),
        "acceleration is not finite"
    );
    assert!(
        state.position.z >= 0.0,
        "vehicle below ground: z = {}",
        state.position.z
    );
}
