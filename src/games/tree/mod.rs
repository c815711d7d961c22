//! Explicit game trees for exercising the searchers.
//!
//! A `TreeSpec` spells out every node: its static value (returned by
//! `score()`), whether it is a win or loss, and its children. The agent
//! to move at tree level `k` is `k % agent_count`, so a two-agent tree
//! alternates max and min levels.
//!
//! ```
//! use pursuit_search::games::tree::{leaf, node, TreeGame};
//! use pursuit_search::search::{MinimaxSearch, SearchConfig};
//!
//! // Classic textbook tree: max over three min nodes.
//! let tree = node(vec![
//!     node(vec![leaf(3.0), leaf(12.0), leaf(8.0)]),
//!     node(vec![leaf(2.0), leaf(4.0), leaf(6.0)]),
//!     node(vec![leaf(14.0), leaf(5.0), leaf(2.0)]),
//! ]);
//! let state = TreeGame::new(tree, 2);
//!
//! let mut search = MinimaxSearch::new(SearchConfig::default().with_max_depth(1));
//! let decision = search.decide(&state).unwrap();
//! assert_eq!(decision.value, 3.0);
//! ```

mod game;

pub use game::{leaf, lose, node, scored, win, TreeAction, TreeGame, TreeOutcome, TreeSpec};
