//! Uniform random agent.

use crate::core::{AgentId, GameRng};
use crate::rules::GameState;

use super::Agent;

/// Plays a uniformly random legal action for its agent index.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    agent: AgentId,
    rng: GameRng,
}

impl RandomAgent {
    /// Random agent playing `agent`.
    pub fn new(agent: AgentId, rng: GameRng) -> Self {
        Self { agent, rng }
    }
}

impl<S: GameState> Agent<S> for RandomAgent {
    fn choose_action(&mut self, state: &S) -> Option<S::Action> {
        let actions = state.legal_actions(self.agent);
        self.rng.choose(&actions).cloned()
    }

    fn name(&self) -> &'static str {
        "random"
    }

    fn agent(&self) -> AgentId {
        self.agent
    }
}
