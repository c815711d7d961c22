//! The "better" evaluation function for pursuit games.
//!
//! A weighted sum of board features plus an outcome bonus:
//!
//! - fewer food pellets left: `food / (food_count + 1)`
//! - closer to food: `nearest_food / (nearest_food_distance + 1)`
//! - fewer capsules left: `capsules / (capsule_count + 1)`
//! - farther from adversaries: `adversary_distance * nearest_adversary_distance`
//!
//! The weighted sum is computed first and the win bonus (or loss
//! penalty) is added to the whole total afterwards.
//!
//! A hard safety rule overrides everything: if an adversary is closer
//! than `danger_radius`, the state is worth `danger_utility`.

use serde::{Deserialize, Serialize};

use crate::rules::PursuitWorld;

use super::features::{nearest_adversary_distance, nearest_food_distance};
use super::Evaluator;

/// Weights for [`BetterEvaluation`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvaluationWeights {
    /// Weight of the inverse remaining-food term.
    pub food: f64,

    /// Weight of the inverse nearest-food distance term.
    pub nearest_food: f64,

    /// Weight of the inverse remaining-capsule term.
    pub capsules: f64,

    /// Weight of the nearest-adversary distance term.
    pub adversary_distance: f64,

    /// Added to the total in a win state.
    pub win_bonus: f64,

    /// Subtracted from the total in a loss state.
    pub lose_penalty: f64,

    /// Adversaries strictly closer than this trigger the safety rule.
    pub danger_radius: u32,

    /// Utility of a state caught by the safety rule.
    /// Must stay below every value the weighted sum can reach.
    pub danger_utility: f64,
}

impl Default for EvaluationWeights {
    fn default() -> Self {
        Self {
            food: 900_000.0,
            nearest_food: 900.0,
            capsules: 9_000.0,
            adversary_distance: 1.0,
            win_bonus: 50_000.0,
            lose_penalty: 50_000.0,
            danger_radius: 2,
            danger_utility: -1_000_000.0,
        }
    }
}

impl EvaluationWeights {
    /// Use a different danger radius.
    pub fn with_danger_radius(mut self, radius: u32) -> Self {
        self.danger_radius = radius;
        self
    }

    /// Use a different win bonus / loss penalty.
    pub fn with_outcome_bonus(mut self, win_bonus: f64, lose_penalty: f64) -> Self {
        self.win_bonus = win_bonus;
        self.lose_penalty = lose_penalty;
        self
    }
}

/// The individual weighted terms of one evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EvaluationBreakdown {
    /// Weighted inverse remaining food.
    pub food: f64,
    /// Weighted inverse distance to the closest pellet.
    pub nearest_food: f64,
    /// Weighted inverse remaining capsules.
    pub capsules: f64,
    /// Weighted distance to the closest adversary.
    pub adversary: f64,
    /// Win bonus, loss penalty, or zero.
    pub outcome: f64,
}

impl EvaluationBreakdown {
    /// The weighted sum of the board terms, without the outcome bonus.
    #[must_use]
    pub fn linear_sum(&self) -> f64 {
        self.food + self.nearest_food + self.capsules + self.adversary
    }

    /// The full utility: linear sum first, then the outcome bonus.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.linear_sum() + self.outcome
    }
}

/// Feature-weighted evaluation with a safety veto.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BetterEvaluation {
    weights: EvaluationWeights,
}

impl BetterEvaluation {
    /// Create with custom weights.
    pub fn new(weights: EvaluationWeights) -> Self {
        Self { weights }
    }

    /// The weights in use.
    pub fn weights(&self) -> &EvaluationWeights {
        &self.weights
    }

    /// Compute the weighted terms for a state.
    ///
    /// Returns `None` when the safety rule fires.
    pub fn breakdown<S: PursuitWorld>(&self, state: &S) -> Option<EvaluationBreakdown> {
        let w = &self.weights;
        let adversary = nearest_adversary_distance(state);

        if adversary.is_some_and(|d| d < w.danger_radius) {
            return None;
        }

        let outcome = if state.is_win() {
            w.win_bonus
        } else if state.is_lose() {
            -w.lose_penalty
        } else {
            0.0
        };

        Some(EvaluationBreakdown {
            food: w.food / (state.food_count() as f64 + 1.0),
            nearest_food: nearest_food_distance(state)
                .map_or(0.0, |d| w.nearest_food / (f64::from(d) + 1.0)),
            capsules: w.capsules / (state.capsule_count() as f64 + 1.0),
            adversary: adversary.map_or(0.0, |d| w.adversary_distance * f64::from(d)),
            outcome,
        })
    }
}

impl<S: PursuitWorld> Evaluator<S> for BetterEvaluation {
    fn evaluate(&self, state: &S) -> f64 {
        self.breakdown(state)
            .map_or(self.weights.danger_utility, |terms| terms.total())
    }
}
