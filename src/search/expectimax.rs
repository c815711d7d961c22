//! Expectimax: adversaries move uniformly at random.
//!
//! The maximizer rule is the same as minimax. An adversary node is worth
//! the arithmetic mean of its children; an adversary with no legal
//! action is worth 0.

use std::time::Instant;

use tracing::{debug, debug_span};

use crate::agents::Agent;
use crate::core::AgentId;
use crate::eval::{Evaluator, ScoreEvaluation};
use crate::rules::GameState;

use super::base::{Decision, SearchAgent};
use super::config::SearchConfig;
use super::stats::SearchStats;

/// Expectimax search agent.
#[derive(Clone, Debug, Default)]
pub struct ExpectimaxSearch<E = ScoreEvaluation> {
    base: SearchAgent<E>,
    stats: SearchStats,
}

impl ExpectimaxSearch<ScoreEvaluation> {
    /// Score-based expectimax with the given config.
    pub fn new(config: SearchConfig) -> Self {
        Self::with_evaluator(ScoreEvaluation, config)
    }
}

impl<E> ExpectimaxSearch<E> {
    /// Expectimax with a custom evaluation function.
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

    /// Search from `state` (maximizer to move) and return the root
    /// action with the best expected value.
    ///
    /// Returns `None` if the maximizer has no legal action.
    pub fn decide<S>(&mut self, state: &S) -> Option<Decision<S::Action>>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        let span = debug_span!("expectimax", max_depth = self.base.max_depth());
        let _enter = span.enter();

        let start = Instant::now();
        self.stats.reset();

        let base = &self.base;
        let decision = base.select_root(state, &mut self.stats, |child, depth, agent, stats| {
            expectimax_value(base, stats, child, depth, agent)
        });

        self.stats.time_us = start.elapsed().as_micros() as u64;
        if let Some(ref d) = decision {
            debug!(
                action = ?d.action,
                value = d.value,
                nodes = self.stats.nodes_visited,
                "expectimax decision"
            );
        }

        decision
    }

    /// Expectimax value of `state` with `agent` to move after `depth`
    /// completed rounds.
    pub fn value_at<S>(&mut self, state: &S, depth: u32, agent: AgentId) -> f64
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.stats.reset();
        expectimax_value(&self.base, &mut self.stats, state, depth, agent)
    }

    /// Expectimax value of `state` with the maximizer to move.
    pub fn value<S>(&mut self, state: &S) -> f64
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.value_at(state, 0, AgentId::MAXIMIZER)
    }
}

fn expectimax_value<S, E>(
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
    let actions = state.legal_actions(agent);

    if agent.is_maximizer() {
        return actions
            .iter()
            .map(|action| {
                let child = state.successor(agent, action);
                expectimax_value(base, stats, &child, next_depth, next)
            })
            .fold(f64::NEG_INFINITY, f64::max);
    }

    if actions.is_empty() {
        return 0.0;
    }

    let total: f64 = actions
        .iter()
        .map(|action| {
            let child = state.successor(agent, action);
            expectimax_value(base, stats, &child, next_depth, next)
        })
        .sum();
    total / actions.len() as f64
}

impl<S, E> Agent<S> for ExpectimaxSearch<E>
where
    S: GameState,
    E: Evaluator<S>,
{
    fn choose_action(&mut self, state: &S) -> Option<S::Action> {
        self.decide(state).map(|d| d.action)
    }

    fn name(&self) -> &'static str {
        "expectimax"
    }
}
