//! Error types.
//!
//! Search itself never fails. Errors only come from building agents
//! out of textual options and from parsing grid layouts.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors raised while turning names and option strings into agents.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("unknown agent '{0}' (expected reflex, minimax, alphabeta, expectimax or random)")]
    UnknownAgent(String),

    #[error("unknown evaluation function '{0}' (expected score or better)")]
    UnknownEvaluator(String),

    #[error("invalid search depth '{value}': {source}")]
    InvalidDepth {
        value: String,
        source: ParseIntError,
    },

    #[error("unknown agent option '{0}' (expected depth, evalFn or seed)")]
    UnknownOption(String),

    #[error("malformed agent option '{0}' (expected key=value)")]
    MalformedOption(String),
}

/// Errors raised while parsing a grid layout.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum LayoutError {
    #[error("layout is empty")]
    Empty,

    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("invalid character '{character}' at row {row}, column {column}")]
    InvalidCharacter {
        character: char,
        row: usize,
        column: usize,
    },

    #[error("layout has no maximizer ('P')")]
    MissingMaximizer,

    #[error("layout has more than one maximizer ('P')")]
    MultipleMaximizers,

    #[error("layout has {count} adversaries, at most {max} are supported")]
    TooManyAdversaries { count: usize, max: usize },
}
