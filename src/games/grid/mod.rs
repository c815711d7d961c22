//! A grid pursuit world.
//!
//! The maximizer walks a walled grid eating food while adversaries
//! chase it:
//! - Every maximizer move costs a point; food is worth 10
//! - Eating the last pellet wins (+500)
//! - Sharing a cell with an adversary loses (-500)
//! - A capsule scares every adversary for 40 of its moves; a scared
//!   adversary that is caught goes back to its start (+200)
//!
//! Adversaries may not stand still unless boxed in.

mod game;
mod layout;

pub use game::{
    GridOutcome, GridState, ADVERSARY_REWARD, FOOD_REWARD, LOSE_PENALTY, SCARED_TIME,
    TIME_PENALTY, WIN_REWARD,
};
pub use layout::Layout;
