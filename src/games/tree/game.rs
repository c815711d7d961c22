//! Explicit game tree implementation.

use std::sync::Arc;

use smallvec::SmallVec;

use crate::core::{AgentId, MAX_AGENTS};
use crate::rules::GameState;

/// Terminal status of a tree node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TreeOutcome {
    /// Game continues.
    #[default]
    Open,
    /// Maximizer won.
    Win,
    /// Maximizer lost.
    Lose,
}

/// Declarative description of a game tree.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeSpec {
    /// Static value of this node, returned by `score()`.
    pub value: f64,
    /// Terminal status.
    pub outcome: TreeOutcome,
    /// Children in action order.
    pub children: Vec<TreeSpec>,
}

/// A childless node with a static value.
pub fn leaf(value: f64) -> TreeSpec {
    scored(value, Vec::new())
}

/// An interior node with static value 0.
pub fn node(children: Vec<TreeSpec>) -> TreeSpec {
    scored(0.0, children)
}

/// An interior node with its own static value.
pub fn scored(value: f64, children: Vec<TreeSpec>) -> TreeSpec {
    TreeSpec {
        value,
        outcome: TreeOutcome::Open,
        children,
    }
}

/// A winning terminal node.
pub fn win(value: f64) -> TreeSpec {
    TreeSpec {
        value,
        outcome: TreeOutcome::Win,
        children: Vec::new(),
    }
}

/// A losing terminal node.
pub fn lose(value: f64) -> TreeSpec {
    TreeSpec {
        value,
        outcome: TreeOutcome::Lose,
        children: Vec::new(),
    }
}

impl TreeSpec {
    /// Total number of nodes in this subtree.
    #[must_use]
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(TreeSpec::size).sum::<usize>()
    }
}

/// Action selecting the `n`th child.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TreeAction(pub usize);

#[derive(Clone, Debug)]
struct FlatNode {
    value: f64,
    outcome: TreeOutcome,
    children: SmallVec<[usize; 4]>,
}

/// A position in an explicit game tree.
///
/// Cloning shares the flattened tree; only the cursor is copied.
#[derive(Clone, Debug)]
pub struct TreeGame {
    nodes: Arc<Vec<FlatNode>>,
    current: usize,
    level: usize,
    agent_count: usize,
}

impl TreeGame {
    /// Create a game rooted at `spec` with `agent_count` agents.
    pub fn new(spec: TreeSpec, agent_count: usize) -> Self {
        assert!(
            (1..=MAX_AGENTS).contains(&agent_count),
            "agent count {} out of range",
            agent_count
        );

        let mut nodes = Vec::with_capacity(spec.size());
        flatten(&spec, &mut nodes);

        Self {
            nodes: Arc::new(nodes),
            current: 0,
            level: 0,
            agent_count,
        }
    }

    /// The agent to move at this node.
    #[must_use]
    pub fn to_move(&self) -> AgentId {
        AgentId::new((self.level % self.agent_count) as u8)
    }

    /// Tree level of this node (root = 0).
    #[must_use]
    pub fn level(&self) -> usize {
        self.level
    }

    /// Number of children of this node.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.node().children.len()
    }

    fn node(&self) -> &FlatNode {
        &self.nodes[self.current]
    }
}

fn flatten(spec: &TreeSpec, out: &mut Vec<FlatNode>) -> usize {
    let index = out.len();
    out.push(FlatNode {
        value: spec.value,
        outcome: spec.outcome,
        children: SmallVec::new(),
    });

    let children: SmallVec<[usize; 4]> = spec.children.iter().map(|c| flatten(c, out)).collect();
    out[index].children = children;
    index
}

impl GameState for TreeGame {
    type Action = TreeAction;

    fn agent_count(&self) -> usize {
        self.agent_count
    }

    fn legal_actions(&self, agent: AgentId) -> Vec<TreeAction> {
        if agent != self.to_move() || self.is_terminal() {
            return Vec::new();
        }
        (0..self.child_count()).map(TreeAction).collect()
    }

    fn successor(&self, agent: AgentId, action: &TreeAction) -> Self {
        assert_eq!(agent, self.to_move(), "{} is not to move", agent);
        let child = *self
            .node()
            .children
            .get(action.0)
            .unwrap_or_else(|| panic!("illegal tree action {:?}", action));

        Self {
            nodes: Arc::clone(&self.nodes),
            current: child,
            level: self.level + 1,
            agent_count: self.agent_count,
        }
    }

    fn is_win(&self) -> bool {
        self.node().outcome == TreeOutcome::Win
    }

    fn is_lose(&self) -> bool {
        self.node().outcome == TreeOutcome::Lose
    }

    fn score(&self) -> f64 {
        self.node().value
    }
}
