//! Build agents from names and option strings.
//!
//! Option strings are comma-separated `key=value` pairs, as handed over
//! by an external driver:
//!
//! ```
//! use pursuit_search::agents::{AgentKind, AgentOptions, EvaluatorKind};
//!
//! let kind: AgentKind = "AlphaBetaAgent".parse().unwrap();
//! let options = AgentOptions::parse("depth=3,evalFn=better").unwrap();
//!
//! assert_eq!(kind, AgentKind::AlphaBeta);
//! assert_eq!(options.config.max_depth, 3);
//! assert_eq!(options.evaluator, EvaluatorKind::Better);
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{AgentId, GameRng};
use crate::error::ConfigError;
use crate::eval::{BetterEvaluation, Evaluator, ScoreEvaluation};
use crate::rules::PursuitWorld;
use crate::search::{AlphaBetaSearch, ExpectimaxSearch, MinimaxSearch, SearchConfig};

use super::{Agent, RandomAgent, ReflexAgent};

/// The agents that can be built by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Reflex,
    Minimax,
    AlphaBeta,
    Expectimax,
    Random,
}

impl FromStr for AgentKind {
    type Err = ConfigError;

    /// Case-insensitive; accepts short names and the `*Agent` class names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reflex" | "reflexagent" => Ok(Self::Reflex),
            "minimax" | "minimaxagent" => Ok(Self::Minimax),
            "alphabeta" | "alpha-beta" | "alphabetaagent" => Ok(Self::AlphaBeta),
            "expectimax" | "expectimaxagent" => Ok(Self::Expectimax),
            "random" | "randomagent" => Ok(Self::Random),
            _ => Err(ConfigError::UnknownAgent(s.to_string())),
        }
    }
}

/// The evaluation functions that can be selected by name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluatorKind {
    /// [`ScoreEvaluation`]
    #[default]
    Score,
    /// [`BetterEvaluation`] with default weights
    Better,
}

impl FromStr for EvaluatorKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "score" | "scoreevaluationfunction" => Ok(Self::Score),
            "better" | "betterevaluationfunction" => Ok(Self::Better),
            _ => Err(ConfigError::UnknownEvaluator(s.to_string())),
        }
    }
}

impl<S: PursuitWorld> Evaluator<S> for EvaluatorKind {
    fn evaluate(&self, state: &S) -> f64 {
        match self {
            Self::Score => ScoreEvaluation.evaluate(state),
            Self::Better => BetterEvaluation::default().evaluate(state),
        }
    }
}

/// Settings for [`build_agent`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentOptions {
    /// Search depth, ignored by non-searching agents.
    pub config: SearchConfig,
    /// Evaluation function for the searchers.
    pub evaluator: EvaluatorKind,
    /// Seed for agents that randomize.
    pub seed: u64,
}

impl AgentOptions {
    /// Parse `key=value` pairs separated by commas.
    ///
    /// Keys: `depth`, `evalFn` (or `eval`), `seed`. Missing keys keep
    /// their defaults; an empty string yields the defaults. A negative
    /// depth is clamped to 0, which scores root moves without search.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let mut options = Self::default();

        for pair in text.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| ConfigError::MalformedOption(pair.to_string()))?;
            let value = value.trim();

            match key.trim() {
                "depth" => options.config = options.config.with_max_depth(parse_depth(value)?),
                "evalFn" | "eval" => options.evaluator = value.parse()?,
                "seed" => {
                    options.seed = value
                        .parse()
                        .map_err(|_| ConfigError::MalformedOption(pair.to_string()))?;
                }
                other => return Err(ConfigError::UnknownOption(other.to_string())),
            }
        }

        Ok(options)
    }
}

fn parse_depth(value: &str) -> Result<u32, ConfigError> {
    if value.parse::<i64>().is_ok_and(|depth| depth < 0) {
        return Ok(0);
    }

    value.parse().map_err(|source| ConfigError::InvalidDepth {
        value: value.to_string(),
        source,
    })
}

/// Construct an agent for the maximizer.
pub fn build_agent<S>(kind: AgentKind, options: &AgentOptions) -> Box<dyn Agent<S>>
where
    S: PursuitWorld + 'static,
{
    let config = options.config.clone();
    let evaluator = options.evaluator;
    let rng = GameRng::new(options.seed);

    match kind {
        AgentKind::Reflex => Box::new(ReflexAgent::new(rng)),
        AgentKind::Minimax => Box::new(MinimaxSearch::with_evaluator(evaluator, config)),
        AgentKind::AlphaBeta => Box::new(AlphaBetaSearch::with_evaluator(evaluator, config)),
        AgentKind::Expectimax => Box::new(ExpectimaxSearch::with_evaluator(evaluator, config)),
        AgentKind::Random => Box::new(RandomAgent::new(AgentId::MAXIMIZER, rng)),
    }
}
