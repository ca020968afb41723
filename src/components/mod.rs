mod kinematics;
mod phase;

pub use kinematics::KinematicState;
pub use phase::FlightPhase;
