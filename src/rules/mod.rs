//! The game-state contract for search.
//!
//! Games implement `GameState` to define:
//! - Legal actions for each agent
//! - Successor states
//! - Win/loss conditions and score
//!
//! The search core calls into `GameState` but never interprets
//! game-specific concepts directly.

pub mod state;

pub use state::{AdversaryView, GameState, PursuitWorld};
