//! # pursuit-search
//!
//! Adversarial game-tree search for turn-based pursuit games.
//!
//! ## Design Principles
//!
//! 1. **N-Agent First**: Agent 0 maximizes; every other agent is an
//!    adversary. Nothing assumes exactly one adversary.
//!
//! 2. **Game-Agnostic Search**: Searchers only see the `GameState`
//!    contract. Evaluation functions that need positions, food or
//!    adversaries ask for `PursuitWorld` instead.
//!
//! 3. **Stateless Between Calls**: Agents take the state by reference and
//!    keep only configuration and last-search statistics.
//!
//! ## Architecture
//!
//! - **Depth in Rounds**: One round is one move by every agent. The
//!   recursion stops at terminal states or when the maximizer is about to
//!   move after `max_depth` completed rounds.
//!
//! - **Persistent Data Structures**: Grid successors share their food and
//!   capsule sets via `im-rs`, so expanding a node is cheap.
//!
//! ## Modules
//!
//! - `core`: Agent indices, directions, positions, RNG
//! - `rules`: `GameState` and `PursuitWorld` traits
//! - `eval`: Evaluation functions and board features
//! - `search`: Minimax, alpha-beta and expectimax
//! - `agents`: `Agent` trait, reflex and random agents, factory
//! - `games`: Grid pursuit game and explicit game trees
//! - `error`: Configuration and layout errors

pub mod agents;
pub mod core;
pub mod error;
pub mod eval;
pub mod games;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{AgentId, Direction, GameRng, Position};

pub use crate::rules::{AdversaryView, GameState, PursuitWorld};

pub use crate::eval::{
    BetterEvaluation, EvaluationBreakdown, EvaluationWeights, Evaluator, ScoreEvaluation,
};

pub use crate::search::{
    AlphaBetaSearch, Decision, ExpectimaxSearch, MinimaxSearch, SearchAgent, SearchConfig,
    SearchStats,
};

pub use crate::agents::{
    build_agent, Agent, AgentKind, AgentOptions, EvaluatorKind, RandomAgent, ReflexAgent,
    ReflexEvaluation,
};

pub use crate::error::{ConfigError, LayoutError};

pub use crate::games::grid::{GridState, Layout};
pub use crate::games::tree::{TreeAction, TreeGame, TreeSpec};
