//! Minimax with alpha-beta pruning.
//!
//! Same values as [`MinimaxSearch`](super::MinimaxSearch), fewer nodes.
//!
//! - `alpha`: best value the maximizer can already guarantee on the path
//! - `beta`: best value the minimizers can already guarantee on the path
//!
//! A node stops expanding siblings once its running value is strictly
//! outside the window. Bounds are updated only after the prune check and
//! are passed down by value, so a sibling never sees a widened window.
//! Sibling order matters for correctness of the bounds, so this search
//! is strictly sequential.

use std::time::Instant;

use tracing::{debug, debug_span};

use crate::agents::Agent;
use crate::core::AgentId;
use crate::eval::{Evaluator, ScoreEvaluation};
use crate::rules::GameState;

use super::base::{Decision, SearchAgent};
use super::config::SearchConfig;
use super::stats::SearchStats;

/// Alpha-beta search agent.
#[derive(Clone, Debug, Default)]
pub struct AlphaBetaSearch<E = ScoreEvaluation> {
    base: SearchAgent<E>,
    stats: SearchStats,
}

impl AlphaBetaSearch<ScoreEvaluation> {
    /// Score-based alpha-beta with the given config.
    pub fn new(config: SearchConfig) -> Self {
        Self::with_evaluator(ScoreEvaluation, config)
    }
}

impl<E> AlphaBetaSearch<E> {
    /// Alpha-beta with a custom evaluation function.
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
        let span = debug_span!("alpha_beta", max_depth = self.base.max_depth());
        let _enter = span.enter();

        let start = Instant::now();
        self.stats.reset();

        let decision = self.root(state);

        self.stats.time_us = start.elapsed().as_micros() as u64;
        if let Some(ref d) = decision {
            debug!(
                action = ?d.action,
                value = d.value,
                nodes = self.stats.nodes_visited,
                prunes = self.stats.prunes,
                "alpha-beta decision"
            );
        }

        decision
    }

    fn root<S>(&mut self, state: &S) -> Option<Decision<S::Action>>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.stats.visit(0);
        let (next, next_depth) = AgentId::MAXIMIZER.advance(state.agent_count(), 0);

        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;
        let mut best: Option<Decision<S::Action>> = None;

        for action in state.legal_actions(AgentId::MAXIMIZER) {
            let child = state.successor(AgentId::MAXIMIZER, &action);
            let value = if self.base.max_depth() == 0 {
                self.base.evaluate(&child, &mut self.stats)
            } else {
                alpha_beta_value(
                    &self.base,
                    &mut self.stats,
                    &child,
                    next_depth,
                    next,
                    alpha,
                    beta,
                )
            };

            if best.as_ref().map_or(true, |b| value > b.value) {
                best = Some(Decision { action, value });
            }
            if value > beta {
                self.stats.prunes += 1;
                break;
            }
            alpha = alpha.max(value);
        }

        best
    }

    /// Alpha-beta value of `state` with `agent` to move after `depth`
    /// completed rounds, searched with a full window.
    pub fn value_at<S>(&mut self, state: &S, depth: u32, agent: AgentId) -> f64
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.stats.reset();
        alpha_beta_value(
            &self.base,
            &mut self.stats,
            state,
            depth,
            agent,
            f64::NEG_INFINITY,
            f64::INFINITY,
        )
    }

    /// Alpha-beta value of `state` with the maximizer to move.
    pub fn value<S>(&mut self, state: &S) -> f64
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.value_at(state, 0, AgentId::MAXIMIZER)
    }
}

fn alpha_beta_value<S, E>(
    base: &SearchAgent<E>,
    stats: &mut SearchStats,
    state: &S,
    depth: u32,
    agent: AgentId,
    mut alpha: f64,
    mut beta: f64,
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

    if agent.is_maximizer() {
        let mut best = f64::NEG_INFINITY;
        for action in state.legal_actions(agent) {
            let child = state.successor(agent, &action);
            best = best.max(alpha_beta_value(base, stats, &child, next_depth, next, alpha, beta));
            if best > beta {
                stats.prunes += 1;
                return best;
            }
            alpha = alpha.max(best);
        }
        best
    } else {
        let mut best = f64::INFINITY;
        for action in state.legal_actions(agent) {
            let child = state.successor(agent, &action);
            best = best.min(alpha_beta_value(base, stats, &child, next_depth, next, alpha, beta));
            if best < alpha {
                stats.prunes += 1;
                return best;
            }
            beta = beta.min(best);
        }
        best
    }
}

impl<S, E> Agent<S> for AlphaBetaSearch<E>
where
    S: GameState,
    E: Evaluator<S>,
{
    fn choose_action(&mut self, state: &S) -> Option<S::Action> {
        self.decide(state).map(|d| d.action)
    }

    fn name(&self) -> &'static str {
        "alphabeta"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tree::{leaf, node, scored, TreeGame};
    use crate::search::MinimaxSearch;

    fn textbook() -> TreeGame {
        TreeGame::new(
            node(vec![
                node(vec![leaf(3.0), leaf(12.0), leaf(8.0)]),
                node(vec![leaf(2.0), leaf(4.0), leaf(6.0)]),
                node(vec![leaf(14.0), leaf(5.0), leaf(2.0)]),
            ]),
            2,
        )
    }

    #[test]
    fn test_textbook_tree_prunes() {
        let mut search = AlphaBetaSearch::new(SearchConfig::default().with_max_depth(1));
        let decision = search.decide(&textbook()).unwrap();

        assert_eq!(decision.action.0, 0);
        assert_eq!(decision.value, 3.0);
        // Both later min nodes stop once they see 2 < alpha = 3.
        assert_eq!(search.stats().prunes, 2);
        assert_eq!(search.stats().nodes_visited, 11);
    }

    #[test]
    fn test_equal_value_is_not_pruned() {
        // A sibling equal to alpha must not cut the loop.
        let state = TreeGame::new(
            node(vec![
                node(vec![leaf(3.0)]),
                node(vec![leaf(3.0), leaf(1.0)]),
            ]),
            2,
        );
        let mut search = AlphaBetaSearch::new(SearchConfig::default().with_max_depth(1));
        let decision = search.decide(&state).unwrap();

        assert_eq!(decision.action.0, 0);
        assert_eq!(decision.value, 3.0);
        assert_eq!(search.stats().leaves_evaluated, 3);
    }

    #[test]
    fn test_matches_minimax_on_two_rounds() {
        let tree = node(vec![
            node(vec![
                scored(1.0, vec![node(vec![leaf(4.0), leaf(-2.0)]), node(vec![leaf(7.0)])]),
                scored(2.0, vec![node(vec![leaf(0.0), leaf(9.0)])]),
            ]),
            node(vec![
                scored(3.0, vec![node(vec![leaf(5.0), leaf(6.0)])]),
                scored(4.0, vec![node(vec![leaf(-1.0)]), node(vec![leaf(8.0), leaf(3.0)])]),
            ]),
        ]);
        let state = TreeGame::new(tree, 2);
        let config = SearchConfig::default().with_max_depth(2);

        let mut minimax = MinimaxSearch::new(config.clone());
        let mut alpha_beta = AlphaBetaSearch::new(config);

        assert_eq!(minimax.decide(&state), alpha_beta.decide(&state));
        assert!(alpha_beta.stats().nodes_visited <= minimax.stats().nodes_visited);
    }

    #[test]
    fn test_zero_depth_evaluates_successors() {
        let state = TreeGame::new(node(vec![leaf(2.0), leaf(5.0)]), 2);
        let mut search = AlphaBetaSearch::new(SearchConfig::default().with_max_depth(0));
        let decision = search.decide(&state).unwrap();

        assert_eq!(decision.action.0, 1);
        assert_eq!(decision.value, 5.0);
    }
}
