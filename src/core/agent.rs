//! Agent identification and round bookkeeping.
//!
//! ## AgentId
//!
//! Agent indices are 0-based. Agent 0 is always the maximizer; agents
//! `1..N` are adversaries and move in strictly increasing index order.
//!
//! A round is one move by every agent. The round counter ("depth")
//! advances only when the index wraps from `N - 1` back to 0.

use serde::{Deserialize, Serialize};

/// Largest supported agent count, maximizer included.
pub const MAX_AGENTS: usize = u8::MAX as usize;

/// Agent identifier supporting up to [`MAX_AGENTS`] agents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AgentId(pub u8);

impl AgentId {
    /// The maximizing agent. Always index 0.
    pub const MAXIMIZER: AgentId = AgentId(0);

    /// Create a new agent ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw agent index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether this is the maximizing agent.
    #[must_use]
    pub const fn is_maximizer(self) -> bool {
        self.0 == 0
    }

    /// The agent that moves after this one, together with the round
    /// counter that applies to it.
    ///
    /// ```
    /// use pursuit_search::core::AgentId;
    ///
    /// // Three agents: 0 -> 1 -> 2 -> 0 (next round)
    /// assert_eq!(AgentId::new(0).advance(3, 4), (AgentId::new(1), 3));
    /// assert_eq!(AgentId::new(1).advance(3, 4), (AgentId::new(2), 3));
    /// assert_eq!(AgentId::new(2).advance(3, 4), (AgentId::MAXIMIZER, 4));
    /// ```
    #[must_use]
    pub fn advance(self, agent_count: usize, depth: u32) -> (AgentId, u32) {
        debug_assert!(
            (1..=MAX_AGENTS).contains(&agent_count),
            "agent count {} out of range",
            agent_count
        );
        let next = (self.index() + 1) % agent_count.max(1);
        if next == 0 {
            (AgentId::MAXIMIZER, depth + 1)
        } else {
            (AgentId(next as u8), depth)
        }
    }

    /// Iterate over the adversary IDs (`1..agent_count`).
    ///
    /// Counts above [`MAX_AGENTS`] are capped.
    pub fn adversaries(agent_count: usize) -> impl Iterator<Item = AgentId> {
        (1..agent_count.min(MAX_AGENTS) as u8).map(AgentId)
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_maximizer() {
            write!(f, "Agent 0 (max)")
        } else {
            write!(f, "Agent {}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_id_basics() {
        let a0 = AgentId::new(0);
        let a2 = AgentId::new(2);

        assert_eq!(a0, AgentId::MAXIMIZER);
        assert!(a0.is_maximizer());
        assert!(!a2.is_maximizer());
        assert_eq!(a2.index(), 2);
        assert_eq!(format!("{}", a0), "Agent 0 (max)");
        assert_eq!(format!("{}", a2), "Agent 2");
    }

    #[test]
    fn test_advance_wraps_and_counts_rounds() {
        assert_eq!(AgentId::new(0).advance(2, 0), (AgentId::new(1), 0));
        assert_eq!(AgentId::new(1).advance(2, 0), (AgentId::MAXIMIZER, 1));
    }

    #[test]
    fn test_advance_single_agent() {
        // A lone maximizer starts a new round on every move.
        assert_eq!(AgentId::MAXIMIZER.advance(1, 5), (AgentId::MAXIMIZER, 6));
    }

    #[test]
    fn test_adversaries() {
        let adversaries: Vec<_> = AgentId::adversaries(4).collect();
        assert_eq!(adversaries, vec![AgentId(1), AgentId(2), AgentId(3)]);
        assert_eq!(AgentId::adversaries(1).count(), 0);
        assert_eq!(AgentId::adversaries(MAX_AGENTS).last(), Some(AgentId(254)));
        assert_eq!(AgentId::adversaries(MAX_AGENTS + 10).count(), MAX_AGENTS - 1);
    }

    #[test]
    fn test_agent_id_serialization() {
        let id = AgentId::new(3);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: AgentId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
