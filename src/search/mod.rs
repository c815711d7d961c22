//! Adversarial tree search.
//!
//! ## Overview
//!
//! Three searchers share one recursive shape over `(state, depth, agent)`:
//!
//! - **Minimax**: adversaries play optimally against the maximizer
//! - **Alpha-beta**: minimax with branch-and-bound pruning, same result
//! - **Expectimax**: adversaries choose uniformly at random
//!
//! Agent 0 maximizes; agents `1..N` move in index order. Depth counts
//! completed rounds and only grows when the turn wraps back to agent 0.
//! The recursion stops at win/loss states and when the maximizer is to
//! move after `max_depth` rounds; there the evaluation function is the
//! only source of value.
//!
//! ## Usage
//!
//! ```rust
//! use pursuit_search::eval::BetterEvaluation;
//! use pursuit_search::games::grid::GridState;
//! use pursuit_search::search::{AlphaBetaSearch, SearchConfig};
//!
//! let state = GridState::parse(
//!     "%%%%%%%\n\
//!      %P  . %\n\
//!      %   G %\n\
//!      %%%%%%%",
//! )
//! .unwrap();
//!
//! let mut search = AlphaBetaSearch::with_evaluator(
//!     BetterEvaluation::default(),
//!     SearchConfig::default().with_max_depth(2),
//! );
//!
//! if let Some(decision) = search.decide(&state) {
//!     println!("Best action: {} ({:.1})", decision.action, decision.value);
//! }
//! println!("Visited {} nodes", search.stats().nodes_visited);
//! ```

pub mod alpha_beta;
pub mod base;
pub mod config;
pub mod expectimax;
pub mod minimax;
pub mod stats;

pub use alpha_beta::AlphaBetaSearch;
pub use base::{Decision, SearchAgent};
pub use config::SearchConfig;
pub use expectimax::ExpectimaxSearch;
pub use minimax::MinimaxSearch;
pub use stats::SearchStats;
