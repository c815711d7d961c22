//! Exhaustive minimax over N agents.
//!
//! Agent 0 maximizes, every adversary minimizes, and adversaries move
//! in index order within a round. Values are always from the
//! maximizer's point of view.

use std::time::Instant;

use tracing::{debug, debug_span};

use crate::agents::Agent;
use crate::core::AgentId;
use crate::eval::{Evaluator, ScoreEvaluation};
use crate::rules::GameState;

use super::base::{Decision, SearchAgent};
use super::config::SearchConfig;
use super::stats::SearchStats;

/// Minimax search agent.
#[derive(Clone, Debug, Default)]
pub struct MinimaxSearch<E = ScoreEvaluation> {
    base: SearchAgent<E>,
    stats: SearchStats,
}

impl MinimaxSearch<ScoreEvaluation> {
    /// Score-based minimax with the given config.
    pub fn new(config: SearchConfig) -> Self {
        Self::with_evaluator(ScoreEvaluation, config)
    }
}

impl<E> MinimaxSearch<E> {
    /// Minimax with a custom evaluation function.
    pub fn with_evaluator(evaluator: E, config: SearchConfig) -> Self {
        Self {
            base: SearchAgent::with_evaluator(evaluator, config),
            stats: SearchStats::default(),
        }
    }

    /// Replace the configuration.
    pub fn configure(&mut self, config: SearchConfig) {
        self.base.configure(config);
    }

    /// Replace the evaluation function.
    pub fn set_evaluator(&mut self, evaluator: E) {
        self.base.set_evaluator(evaluator);
    }

    /// Shared search settings.
    pub fn base(&self) -> &SearchAgent<E> {
        &self.base
    }

    /// Statistics from the last search.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Search from `state` (maximizer to move) and return the best
    /// root action with its value.
    ///
    /// Returns `None` if the maximizer has no legal action.
    pub fn decide<S>(&mut self, state: &S) -> Option<Decision<S::Action>>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        let span = debug_span!("minimax", max_depth = self.base.max_depth());
        let _enter = span.enter();

        let start = Instant::now();
        self.stats.reset();

        let base = &self.base;
        let decision = base.select_root(state, &mut self.stats, |child, depth, agent, stats| {
            minimax_value(base, stats, child, depth, agent)
        });

        self.stats.time_us = start.elapsed().as_micros() as u64;
        if let Some(ref d) = decision {
            debug!(
                action = ?d.action,
                value = d.value,
                nodes = self.stats.nodes_visited,
                leaves = self.stats.leaves_evaluated,
                "minimax decision"
            );
        }

        decision
    }

    /// Minimax value of `state` with `agent` to move after `depth`
    /// completed rounds.
    pub fn value_at<S>(&mut self, state: &S, depth: u32, agent: AgentId) -> f64
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.stats.reset();
        minimax_value(&self.base, &mut self.stats, state, depth, agent)
    }

    /// Minimax value of `state` with the maximizer to move.
    pub fn value<S>(&mut self, state: &S) -> f64
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.value_at(state, 0, AgentId::MAXIMIZER)
    }
}

fn minimax_value<S, E>(
    base: &SearchAgent<E>,
    stats: &mut SearchStats,
    state: &S,
    depth: u32,
    agent: AgentId,
) -> f64
where
    S: GameState,
    E: Evaluator<S>,
{
    stats.visit(depth);

    if base.is_cutoff(state, depth, agent) {
        return base.evaluate(state, stats);
    }

    let (next, next_depth) = agent.advance(state.agent_count(), depth);
    let children = state.legal_actions(agent).into_iter().map(|action| {
        let child = state.successor(agent, &action);
        minimax_value(base, stats, &child, next_depth, next)
    });

    // No actions leaves the sentinel in place.
    if agent.is_maximizer() {
        children.fold(f64::NEG_INFINITY, f64::max)
    } else {
        children.fold(f64::INFINITY, f64::min)
    }
}

impl<S, E> Agent<S> for MinimaxSearch<E>
where
    S: GameState,
    E: Evaluator<S>,
{
    fn choose_action(&mut self, state: &S) -> Option<S::Action> {
        self.decide(state).map(|d| d.action)
    }

    fn name(&self) -> &'static str {
        "minimax"
    }
}
