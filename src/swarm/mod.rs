use log::{debug, info};
use nalgebra::Vector3;

use crate::agent::{swap_velocities, UavAgent};
use crate::resources::AgentConfig;
use crate::utils::{RngManager, SimError};

/// Launch ranks as fractions of the field length, goal line to goal line,
/// following the field's 0/25/50/25/0 yard-line markings.
const RANK_FRACTIONS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// A fleet of agents with collective lifecycle and proximity handling.
///
/// The swarm is an orchestrator over the per-agent workers: it owns the
/// agents, starts and stops them together, and runs the pairwise proximity
/// sweep that exchanges velocities on contact. Each sweep reads positions
/// that the workers keep updating, so it is a best-effort snapshot, the
/// same as any external observer of the fleet.
#[derive(Debug)]
pub struct Swarm {
    agents: Vec<UavAgent>,
    /// One latch per unordered pair, row-major over the upper triangle:
    /// a pair swaps once on contact and re-arms after it separates.
    contact: Vec<bool>,
}

impl Swarm {
    pub fn new(agents: Vec<UavAgent>) -> Self {
        let pairs = agents.len() * agents.len().saturating_sub(1) / 2;
        Self {
            agents,
            contact: vec![false; pairs],
        }
    }

    /// Build the launch formation: three columns across the field width,
    /// one rank per yard line, everyone on the ground.
    ///
    /// Every member gets its own random stream derived from `master_seed`
    /// and its formation slot, so a formation is reproducible end to end.
    pub fn launch_formation(
        field_width: f64,
        field_length: f64,
        config: &AgentConfig,
        master_seed: u64,
    ) -> Result<Self, SimError> {
        let manager = RngManager::new(master_seed);
        let columns = [-field_width / 2.0, 0.0, field_width / 2.0];

        let mut agents = Vec::with_capacity(RANK_FRACTIONS.len() * columns.len());
        for (rank, fraction) in RANK_FRACTIONS.iter().enumerate() {
            let y = (fraction - 0.5) * field_length;
            for (file, &x) in columns.iter().enumerate() {
                let label = format!("uav-{}-{}", rank, file);
                let member_config = config.clone().with_seed(manager.seed_for(&label));
                agents.push(UavAgent::new(Vector3::new(x, y, 0.0), member_config)?);
            }
        }

        info!(
            "formation of {} vehicles on a {}x{} field",
            agents.len(),
            field_width,
            field_length
        );
        Ok(Self::new(agents))
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn agents(&self) -> &[UavAgent] {
        &self.agents
    }

    pub fn agent(&self, index: usize) -> Option<&UavAgent> {
        self.agents.get(index)
    }

    /// Current positions of every member, one lock acquisition each.
    pub fn positions(&self) -> Vec<Vector3<f64>> {
        self.agents.iter().map(UavAgent::position).collect()
    }

    pub fn start_all(&mut self) -> Result<(), SimError> {
        for agent in &mut self.agents {
            agent.start()?;
        }
        Ok(())
    }

    pub fn stop_all(&self) {
        for agent in &self.agents {
            agent.stop();
        }
    }

    pub fn join_all(&mut self) -> Result<(), SimError> {
        for agent in &mut self.agents {
            agent.join()?;
        }
        Ok(())
    }

    /// One pairwise proximity sweep.
    ///
    /// Two members are in contact when their centers are closer than the
    /// mean of their bounding sizes. A contact exchanges the pair's
    /// velocities exactly once; the latch re-arms after they separate.
    /// Returns the number of exchanges performed.
    pub fn resolve_collisions(&mut self) -> usize {
        let mut swaps = 0;
        let mut pair = 0;

        for i in 0..self.agents.len() {
            for j in (i + 1)..self.agents.len() {
                let a = &self.agents[i];
                let b = &self.agents[j];

                let threshold = 0.5 * (a.config().size + b.config().size);
                let touching = (a.position() - b.position()).norm() <= threshold;

                if touching && !self.contact[pair] {
                    swap_velocities(a, b);
                    swaps += 1;
                    debug!("uav-{} and uav-{} exchanged velocities", a.id(), b.id());
                }
                self.contact[pair] = touching;
                pair += 1;
            }
        }
        swaps
    }
}
