use nalgebra::Vector3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::components::KinematicState;
use crate::resources::AgentConfig;
use crate::utils::constants::{
    HEADING_JITTER, HEADING_RATE, MIN_DT, NORM_EPSILON, RADIAL_STIFFNESS, TANGENTIAL_DAMPING,
};
use crate::utils::math::{clamp_magnitude, normalize_or, tangent_basis};

/// Constant external gravity force acting on the vehicle [N].
#[inline]
pub fn gravity_force(config: &AgentConfig) -> Vector3<f64> {
    Vector3::new(0.0, 0.0, -config.gravity)
}

/// Actuator force for the ascend phase.
///
/// Drives velocity toward the ascend target at the configured speed bound
/// and carries the gravity feed-forward term that opposes the constant
/// downward pull. The returned force is clamped to the actuator limit.
pub fn ascend_force(state: &KinematicState, config: &AgentConfig, dt: f64) -> Vector3<f64> {
    let to_target = config.ascend_target - state.position;
    let direction = normalize_or(to_target, Vector3::z());

    let desired_velocity = direction * config.max_ascend_speed;
    let desired_accel = (desired_velocity - state.velocity) / dt.max(MIN_DT);

    let force = config.mass * desired_accel - gravity_force(config);
    clamp_magnitude(force, config.max_force)
}

/// Actuator force for the sphere-roam phase.
///
/// A radial spring regulates the distance to the sphere center toward the
/// target radius while the tangential velocity chases a randomly wandering
/// heading, with damping to suppress oscillation. Gravity compensation and
/// the actuator clamp are applied as in the ascend phase.
pub fn roam_force(
    state: &KinematicState,
    config: &AgentConfig,
    dt: f64,
    elapsed: f64,
    rng: &mut ChaCha8Rng,
) -> Vector3<f64> {
    let mut rel = state.position - config.sphere_center;
    let mut r = rel.norm();
    if r < NORM_EPSILON {
        // Degenerate at the exact center: treat the vehicle as sitting at
        // the top of the sphere.
        rel = Vector3::new(0.0, 0.0, config.sphere_radius);
        r = config.sphere_radius;
    }
    let radial_dir = rel / r;

    // Positive error means outside the shell, so the spring points inward.
    let radial_error = r - config.sphere_radius;
    let spring = -RADIAL_STIFFNESS * radial_error * radial_dir;

    let v_radial = state.velocity.dot(&radial_dir) * radial_dir;
    let v_tangential = state.velocity - v_radial;

    // One fresh draw per tick feeds both the speed target and the heading.
    let draw: f64 = rng.gen();
    let target_speed = config.min_tangential_speed
        + draw * (config.max_tangential_speed - config.min_tangential_speed);

    let (t1, t2) = tangent_basis(&radial_dir);
    let heading = HEADING_RATE * elapsed + draw * HEADING_JITTER;
    let desired_dir = normalize_or(heading.cos() * t1 + heading.sin() * t2, t1);
    let desired_tangential = desired_dir * target_speed;

    let correction = (desired_tangential - v_tangential) / dt.max(MIN_DT);
    let damping = -TANGENTIAL_DAMPING * v_tangential;

    let force = config.mass * (correction + damping) + spring - gravity_force(config);
    clamp_magnitude(force, config.max_force)
}
