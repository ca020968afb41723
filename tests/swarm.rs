mod common;

use std::thread;
use std::time::Duration;

use nalgebra::Vector3;
use skyswarm::{swap_velocities, Swarm, UavAgent};

use common::{assert_state_valid, test_config};

#[test]
fn velocity_exchange_scenario() {
    // Two agents heading at each other exchange velocities exactly;
    // positions are untouched.
    let a = UavAgent::new(Vector3::new(-1.0, 0.0, 0.0), test_config(21)).unwrap();
    let b = UavAgent::new(Vector3::new(1.0, 0.0, 0.0), test_config(22)).unwrap();

    a.set_velocity(Vector3::new(1.0, 0.0, 0.0));
    b.set_velocity(Vector3::new(-1.0, 0.0, 0.0));

    swap_velocities(&a, &b);

    assert_eq!(a.velocity(), Vector3::new(-1.0, 0.0, 0.0));
    assert_eq!(b.velocity(), Vector3::new(1.0, 0.0, 0.0));
    assert_eq!(a.position(), Vector3::new(-1.0, 0.0, 0.0));
    assert_eq!(b.position(), Vector3::new(1.0, 0.0, 0.0));
}

#[test]
fn formation_flies_together() {
    let mut swarm = Swarm::launch_formation(10.0, 50.0, &test_config(23), 23).unwrap();
    assert_eq!(swarm.len(), 15);

    swarm.start_all().unwrap();

    // Everyone sits in the ground-hold window: the sweep sees the launch
    // grid, no pair in contact.
    thread::sleep(Duration::from_millis(100));
    assert_eq!(swarm.resolve_collisions(), 0);
    for agent in swarm.agents() {
        assert_state_valid(&agent.snapshot());
        assert_eq!(agent.snapshot().position.z, 0.0);
    }

    swarm.stop_all();
    swarm.join_all().unwrap();
}

#[test]
fn concurrent_swaps_do_not_deadlock() {
    // Cross-threaded swaps in both argument orders exercise the internal
    // id-ordered locking.
    let a = UavAgent::new(Vector3::zeros(), test_config(24)).unwrap();
    let b = UavAgent::new(Vector3::zeros(), test_config(25)).unwrap();

    a.set_velocity(Vector3::new(1.0, 0.0, 0.0));
    b.set_velocity(Vector3::new(-1.0, 0.0, 0.0));

    thread::scope(|scope| {
        let first = scope.spawn(|| {
            for _ in 0..10_000 {
                swap_velocities(&a, &b);
            }
        });
        let second = scope.spawn(|| {
            for _ in 0..10_000 {
                swap_velocities(&b, &a);
            }
        });
        first.join().unwrap();
        second.join().unwrap();
    });

    // 20 000 total exchanges: an even count leaves the pair holding the
    // same two vectors it started with.
    let velocities = [a.velocity(), b.velocity()];
    assert_eq!(velocities, [Vector3::new(1.0, 0.0, 0.0), Vector3::new(-1.0, 0.0, 0.0)]);
}
