//! Read-only query contract the search core consumes.
//!
//! Games implement `GameState` to expose:
//! - Which agents exist and which actions each may take
//! - Successor generation (a new state, never mutation)
//! - Win/loss predicates and the running score
//!
//! Evaluation functions that reason about the board additionally need
//! `PursuitWorld`.

use std::fmt::Debug;

use crate::core::{AgentId, Position};

/// An immutable game state as seen by the search core.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Return empty if the agent can't act (or the game is over)
/// - `successor`: Must be pure; `action` must come from `legal_actions(agent)`
/// - `is_win` / `is_lose`: Mutually exclusive terminal predicates
/// - `agent_count`: At least 1; agent 0 is the maximizer
pub trait GameState: Clone {
    /// The action token. Compared, never interpreted.
    type Action: Clone + PartialEq + Debug;

    /// Number of agents in the game, including the maximizer.
    fn agent_count(&self) -> usize;

    /// Legal actions for `agent`, in a stable order.
    fn legal_actions(&self, agent: AgentId) -> Vec<Self::Action>;

    /// The state after `agent` plays `action`.
    ///
    /// Calling this with an action not returned by `legal_actions` is a
    /// precondition violation; implementations may panic.
    fn successor(&self, agent: AgentId, action: &Self::Action) -> Self;

    /// Whether the maximizer has won.
    fn is_win(&self) -> bool;

    /// Whether the maximizer has lost.
    fn is_lose(&self) -> bool;

    /// Current game score, from the maximizer's point of view.
    fn score(&self) -> f64;

    /// Whether the game is over.
    fn is_terminal(&self) -> bool {
        self.is_win() || self.is_lose()
    }
}

/// A snapshot of one adversary as seen by evaluation functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdversaryView {
    /// Which agent this is.
    pub agent: AgentId,
    /// Where it stands.
    pub position: Position,
    /// Remaining moves during which it is harmless (0 = dangerous).
    pub scared_timer: u32,
}

impl AdversaryView {
    /// Whether the adversary is currently scared.
    #[must_use]
    pub fn is_scared(&self) -> bool {
        self.scared_timer > 0
    }
}

/// World accessors used only by evaluation functions.
pub trait PursuitWorld: GameState {
    /// Where the maximizer stands.
    fn maximizer_position(&self) -> Position;

    /// Remaining food pellets.
    fn food(&self) -> Vec<Position>;

    /// Remaining capsules.
    fn capsules(&self) -> Vec<Position>;

    /// All adversaries, ordered by agent index.
    fn adversaries(&self) -> Vec<AdversaryView>;

    /// Number of remaining food pellets.
    fn food_count(&self) -> usize {
        self.food().len()
    }

    /// Number of remaining capsules.
    fn capsule_count(&self) -> usize {
        self.capsules().len()
    }

    /// Adversary positions, ordered by agent index.
    fn adversary_positions(&self) -> Vec<Position> {
        self.adversaries().iter().map(|a| a.position).collect()
    }
}
