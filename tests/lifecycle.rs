mod common;

use std::thread;
use std::time::{Duration, Instant};

use nalgebra::Vector3;
use skyswarm::UavAgent;

use common::{assert_state_valid, quick_start_config, test_config};

#[test]
fn agent_holds_the_ground_during_the_wait_window() {
    let mut agent = UavAgent::new(Vector3::zeros(), test_config(1)).unwrap();
    agent.start().unwrap();

    thread::sleep(Duration::from_millis(200));
    assert_eq!(agent.position(), Vector3::zeros());
    assert_eq!(agent.velocity(), Vector3::zeros());

    // An injected velocity is wiped by the next ground tick.
    agent.set_velocity(Vector3::new(3.0, 1.0, 2.0));
    thread::sleep(Duration::from_millis(100));
    assert_eq!(agent.velocity(), Vector3::zeros());
    assert_eq!(agent.position(), Vector3::zeros());

    agent.stop();
    agent.join().unwrap();
}

#[test]
fn agent_lifts_off_after_the_wait_window() {
    let mut agent = UavAgent::new(Vector3::zeros(), quick_start_config(2)).unwrap();
    agent.start().unwrap();

    thread::sleep(Duration::from_millis(800));

    let snapshot = agent.snapshot();
    assert_state_valid(&snapshot);
    assert!(snapshot.position.z > 0.0, "vehicle never lifted off");
    assert!(snapshot.velocity.z > 0.0, "vehicle not climbing");

    agent.stop();
    agent.join().unwrap();
}

#[test]
fn start_is_idempotent() {
    let mut agent = UavAgent::new(Vector3::zeros(), test_config(3)).unwrap();

    agent.start().unwrap();
    assert!(agent.is_running());
    // A second start while running must not spawn another worker; if it
    // did, the first handle would be dropped and join would leave a live
    // thread mutating freed-for-reuse state.
    agent.start().unwrap();
    assert!(agent.is_running());

    agent.stop();
    agent.join().unwrap();
    assert!(!agent.is_running());
}

#[test]
fn stop_then_join_completes_within_a_bounded_time() {
    let mut agent = UavAgent::new(Vector3::zeros(), test_config(4)).unwrap();
    agent.start().unwrap();
    thread::sleep(Duration::from_millis(50));

    agent.stop();
    let before = Instant::now();
    agent.join().unwrap();

    // Worst case is one tick period plus step time; a full second means
    // the cancellation flag is not being honored.
    assert!(before.elapsed() < Duration::from_secs(1));
}

#[test]
fn stop_without_start_is_harmless() {
    let mut agent = UavAgent::new(Vector3::zeros(), test_config(5)).unwrap();
    agent.stop();
    agent.join().unwrap();
    assert!(!agent.is_running());
}

#[test]
fn agent_can_be_restarted_after_join() {
    let mut agent = UavAgent::new(Vector3::zeros(), test_config(6)).unwrap();

    agent.start().unwrap();
    thread::sleep(Duration::from_millis(50));
    agent.stop();
    agent.join().unwrap();

    agent.start().unwrap();
    assert!(agent.is_running());
    thread::sleep(Duration::from_millis(50));
    assert_state_valid(&agent.snapshot());

    agent.stop();
    agent.join().unwrap();
}

#[test]
fn accessors_stay_responsive_while_running() {
    let mut agent = UavAgent::new(Vector3::zeros(), quick_start_config(7)).unwrap();
    agent.start().unwrap();

    // Hammer the accessors against the live worker; every snapshot must be
    // internally consistent and sane.
    for _ in 0..200 {
        let snapshot = agent.snapshot();
        assert_state_valid(&snapshot);
        thread::sleep(Duration::from_millis(1));
    }

    agent.stop();
    agent.join().unwrap();
}
