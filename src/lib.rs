pub mod agent;
pub mod components;
pub mod resources;
pub mod swarm;
pub mod systems;
pub mod utils;

pub use agent::{swap_velocities, UavAgent};
pub use components::{FlightPhase, KinematicState};
pub use resources::AgentConfig;
pub use swarm::Swarm;
pub use systems::Stepper;
pub use utils::SimError;
