//! Concrete games implementing the search contract.
//!
//! - `grid`: pursuit on a walled grid (food, capsules, adversaries)
//! - `tree`: explicit game trees for exhaustive checks

pub mod grid;
pub mod tree;
