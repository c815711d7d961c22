//! Agents the external driver talks to.
//!
//! Every agent answers one question: given the current state, which
//! action should it play? Agents take the state by reference and keep
//! nothing from it between calls, so the driver can call them again on
//! each freshly advanced state.
//!
//! - `ReflexAgent`: one-ply lookahead with random tie-breaking
//! - `RandomAgent`: uniform choice, the adversary model expectimax assumes
//! - The searchers in [`crate::search`] also implement `Agent`
//! - `build_agent` constructs any of them by name

pub mod factory;
pub mod random;
pub mod reflex;

pub use factory::{build_agent, AgentKind, AgentOptions, EvaluatorKind};
pub use random::RandomAgent;
pub use reflex::{ReflexAgent, ReflexEvaluation};

use crate::core::AgentId;
use crate::rules::GameState;

/// A decision maker for one agent index.
pub trait Agent<S: GameState> {
    /// Choose an action for [`Agent::agent`] in `state`.
    ///
    /// Returns `None` if that agent has no legal action.
    fn choose_action(&mut self, state: &S) -> Option<S::Action>;

    /// Short name, as accepted by [`AgentKind`].
    fn name(&self) -> &'static str;

    /// The agent index this agent plays. Defaults to the maximizer.
    fn agent(&self) -> AgentId {
        AgentId::MAXIMIZER
    }
}
