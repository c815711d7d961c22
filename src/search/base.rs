//! State shared by every tree-search agent.

use crate::core::AgentId;
use crate::eval::{Evaluator, ScoreEvaluation};
use crate::rules::GameState;

use super::config::SearchConfig;
use super::stats::SearchStats;

/// A chosen root action and its backed-up value.
#[derive(Clone, Debug, PartialEq)]
pub struct Decision<A> {
    /// Action for the maximizer.
    pub action: A,
    /// Value the search assigns to playing it.
    pub value: f64,
}

/// Evaluation function and depth limit, composed into each searcher.
#[derive(Clone, Debug, Default)]
pub struct SearchAgent<E = ScoreEvaluation> {
    evaluator: E,
    config: SearchConfig,
}

impl SearchAgent<ScoreEvaluation> {
    /// Score-based evaluation with the given config.
    pub fn new(config: SearchConfig) -> Self {
        Self::with_evaluator(ScoreEvaluation, config)
    }
}

impl<E> SearchAgent<E> {
    /// Custom evaluation function with the given config.
    pub fn with_evaluator(evaluator: E, config: SearchConfig) -> Self {
        Self { evaluator, config }
    }

    /// Replace the configuration.
    pub fn configure(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Replace the evaluation function.
    pub fn set_evaluator(&mut self, evaluator: E) {
        self.evaluator = evaluator;
    }

    /// The current configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Depth limit in rounds.
    pub fn max_depth(&self) -> u32 {
        self.config.max_depth
    }

    /// The evaluation function.
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Whether the node stops the recursion: a win or loss, or the
    /// maximizer's turn once `max_depth` rounds are complete.
    pub fn is_cutoff<S: GameState>(&self, state: &S, depth: u32, agent: AgentId) -> bool {
        state.is_terminal() || (agent.is_maximizer() && depth >= self.config.max_depth)
    }

    pub(crate) fn evaluate<S>(&self, state: &S, stats: &mut SearchStats) -> f64
    where
        E: Evaluator<S>,
    {
        stats.leaves_evaluated += 1;
        self.evaluator.evaluate(state)
    }

    /// Pick the root action with the strictly greatest child value; the
    /// first action seen wins ties.
    ///
    /// `child_value` receives each successor with the depth and agent
    /// that move next. With `max_depth == 0` successors are evaluated
    /// directly instead.
    pub(crate) fn select_root<S, F>(
        &self,
        state: &S,
        stats: &mut SearchStats,
        mut child_value: F,
    ) -> Option<Decision<S::Action>>
    where
        S: GameState,
        E: Evaluator<S>,
        F: FnMut(&S, u32, AgentId, &mut SearchStats) -> f64,
    {
        stats.visit(0);
        let (next, next_depth) = AgentId::MAXIMIZER.advance(state.agent_count(), 0);
        let mut best: Option<Decision<S::Action>> = None;

        for action in state.legal_actions(AgentId::MAXIMIZER) {
            let child = state.successor(AgentId::MAXIMIZER, &action);
            let value = if self.config.max_depth == 0 {
                self.evaluate(&child, stats)
            } else {
                child_value(&child, next_depth, next, stats)
            };

            if best.as_ref().map_or(true, |b| value > b.value) {
                best = Some(Decision { action, value });
            }
        }

        best
    }
}
