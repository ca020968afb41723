use std::thread;
use std::time::Duration;

use log::info;
use nalgebra::Vector3;
use skyswarm::{AgentConfig, Swarm};

/// Headless stand-in for a rendering layer: launch the formation, poll
/// positions at frame rate, run the proximity sweep, shut down cleanly.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // A short hold and a low roam sphere, so a 20 s run shows the whole
    // mission: ground wait, climb, and orbit.
    let config = AgentConfig {
        wait_seconds: 2.0,
        ascend_target: Vector3::new(0.0, 0.0, 15.0),
        sphere_center: Vector3::new(0.0, 0.0, 15.0),
        sphere_radius: 5.0,
        ..Default::default()
    };
    config.validate()?;

    let mut swarm = Swarm::launch_formation(10.0, 50.0, &config, 42)?;
    swarm.start_all()?;
    info!("{} vehicles launched", swarm.len());

    let frame = Duration::from_millis(33);
    let frames = 20 * 30; // ~20 seconds of simulated flight
    let mut swaps = 0;

    for i in 0..frames {
        swaps += swarm.resolve_collisions();

        if i % 30 == 0 {
            let positions = swarm.positions();
            let mean_altitude =
                positions.iter().map(|p| p.z).sum::<f64>() / positions.len() as f64;
            println!(
                "t={:>3}s  mean altitude {:6.2} m  velocity exchanges {}",
                i / 30,
                mean_altitude,
                swaps
            );
        }

        thread::sleep(frame);
    }

    swarm.stop_all();
    swarm.join_all()?;
    info!("all workers joined");

    Ok(())
}
