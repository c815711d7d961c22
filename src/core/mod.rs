//! Core types: agent indices, actions, positions, RNG.
//!
//! These are the building blocks shared by the search core and the
//! concrete games. None of them know anything about search.

pub mod action;
pub mod agent;
pub mod position;
pub mod rng;

pub use action::Direction;
pub use agent::{AgentId, MAX_AGENTS};
pub use position::Position;
pub use rng::GameRng;
