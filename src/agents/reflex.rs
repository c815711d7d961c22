//! One-ply reflex agent.
//!
//! Scores the successor of every legal maximizer action and plays one
//! of the best, picked uniformly at random. The random source is
//! injected so tests can pin the choice.

use tracing::trace;

use crate::core::{AgentId, GameRng};
use crate::eval::{nearest_food_distance, within_danger, Evaluator};
use crate::rules::{GameState, PursuitWorld};

use super::Agent;

/// Reflex heuristic: successor score plus inverse distance to the
/// nearest pellet, vetoed when an adversary gets too close.
#[derive(Clone, Debug, PartialEq)]
pub struct ReflexEvaluation {
    /// Adversaries strictly closer than this veto the move.
    pub danger_radius: u32,
    /// Score of a vetoed move.
    pub danger_utility: f64,
}

impl Default for ReflexEvaluation {
    fn default() -> Self {
        Self {
            danger_radius: 2,
            danger_utility: -1_000_000.0,
        }
    }
}

impl<S: PursuitWorld> Evaluator<S> for ReflexEvaluation {
    fn evaluate(&self, state: &S) -> f64 {
        if within_danger(state, self.danger_radius) {
            return self.danger_utility;
        }

        let food = nearest_food_distance(state).map_or(0.0, |d| 1.0 / f64::from(d.max(1)));
        state.score() + food
    }
}

/// Agent that maximizes a one-ply evaluation.
#[derive(Clone, Debug)]
pub struct ReflexAgent<E = ReflexEvaluation> {
    evaluator: E,
    rng: GameRng,
}

impl ReflexAgent<ReflexEvaluation> {
    /// Reflex agent with the default heuristic.
    pub fn new(rng: GameRng) -> Self {
        Self::with_evaluator(ReflexEvaluation::default(), rng)
    }
}

impl<E> ReflexAgent<E> {
    /// Reflex agent with a custom one-ply evaluation.
    pub fn with_evaluator(evaluator: E, rng: GameRng) -> Self {
        Self { evaluator, rng }
    }

    /// Score every legal maximizer action by its successor.
    pub fn score_actions<S>(&self, state: &S) -> Vec<(S::Action, f64)>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        state
            .legal_actions(AgentId::MAXIMIZER)
            .into_iter()
            .map(|action| {
                let successor = state.successor(AgentId::MAXIMIZER, &action);
                let score = self.evaluator.evaluate(&successor);
                (action, score)
            })
            .collect()
    }
}

impl<S, E> Agent<S> for ReflexAgent<E>
where
    S: GameState,
    E: Evaluator<S>,
{
    fn choose_action(&mut self, state: &S) -> Option<S::Action> {
        let scored = self.score_actions(state);
        trace!(candidates = ?scored, "reflex scores");

        let best = scored
            .iter()
            .map(|(_, score)| *score)
            .fold(f64::NEG_INFINITY, f64::max);
        let ties: Vec<&S::Action> = scored
            .iter()
            .filter(|(_, score)| *score == best)
            .map(|(action, _)| action)
            .collect();

        self.rng.choose(&ties).map(|action| (*action).clone())
    }

    fn name(&self) -> &'static str {
        "reflex"
    }
}
