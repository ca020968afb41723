mod forces;
mod stepper;

pub use forces::{ascend_force, gravity_force, roam_force};
pub use stepper::Stepper;
