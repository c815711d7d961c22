//! Static evaluation functions.
//!
//! An evaluation function maps a state to a finite utility, higher is
//! better for the maximizer. Searchers call it at the depth limit and at
//! terminal states; it must be pure.
//!
//! Anything callable as `Fn(&S) -> f64` is an evaluator, so closures
//! work out of the box:
//!
//! ```
//! use pursuit_search::eval::Evaluator;
//! use pursuit_search::games::tree::{leaf, TreeGame};
//!
//! let state = TreeGame::new(leaf(4.0), 2);
//! let doubled = |s: &TreeGame| 2.0 * pursuit_search::rules::GameState::score(s);
//! assert_eq!(doubled.evaluate(&state), 8.0);
//! ```

pub mod better;
pub mod features;

pub use better::{BetterEvaluation, EvaluationBreakdown, EvaluationWeights};
pub use features::{nearest_adversary_distance, nearest_food_distance, within_danger};

use crate::rules::GameState;

/// Something that can score a game state.
pub trait Evaluator<S> {
    /// Utility of `state` for the maximizer.
    fn evaluate(&self, state: &S) -> f64;
}

impl<S, F: Fn(&S) -> f64> Evaluator<S> for F {
    fn evaluate(&self, state: &S) -> f64 {
        (self)(state)
    }
}

/// The default evaluation: the state's current score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreEvaluation;

impl<S: GameState> Evaluator<S> for ScoreEvaluation {
    fn evaluate(&self, state: &S) -> f64 {
        state.score()
    }
}
