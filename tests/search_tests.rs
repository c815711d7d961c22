//! Search integration tests on explicit game trees.

use proptest::prelude::*;

use pursuit_search::games::tree::{leaf, node, scored, TreeAction, TreeGame, TreeSpec};
use pursuit_search::search::{AlphaBetaSearch, ExpectimaxSearch, MinimaxSearch, SearchConfig};

fn config(depth: u32) -> SearchConfig {
    SearchConfig::default().with_max_depth(depth)
}

fn textbook() -> TreeSpec {
    node(vec![
        node(vec![leaf(3.0), leaf(12.0), leaf(8.0)]),
        node(vec![leaf(2.0), leaf(4.0), leaf(6.0)]),
        node(vec![leaf(14.0), leaf(5.0), leaf(2.0)]),
    ])
}

/// Uniform-height tree with integer leaves and 1..=`max_branch` children.
fn tree_strategy(levels: u32, max_branch: usize) -> BoxedStrategy<TreeSpec> {
    if levels == 0 {
        (-100i32..100).prop_map(|v| leaf(f64::from(v))).boxed()
    } else {
        prop::collection::vec(tree_strategy(levels - 1, max_branch), 1..=max_branch)
            .prop_map(node)
            .boxed()
    }
}

fn reversed(spec: &TreeSpec) -> TreeSpec {
    TreeSpec {
        value: spec.value,
        outcome: spec.outcome,
        children: spec.children.iter().rev().map(reversed).collect(),
    }
}

/// Max at agent-0 levels, uniform mean elsewhere, down to the leaves.
fn brute_force_expectimax(spec: &TreeSpec, level: usize, agent_count: usize) -> f64 {
    if spec.children.is_empty() {
        return spec.value;
    }

    let values = spec
        .children
        .iter()
        .map(|child| brute_force_expectimax(child, level + 1, agent_count));

    if level % agent_count == 0 {
        values.fold(f64::NEG_INFINITY, f64::max)
    } else {
        values.sum::<f64>() / spec.children.len() as f64
    }
}

// =============================================================================
// Alpha-Beta vs Minimax
// =============================================================================

#[test]
fn test_alpha_beta_expands_fewer_nodes_on_textbook_tree() {
    let state = TreeGame::new(textbook(), 2);

    let mut minimax = MinimaxSearch::new(config(1));
    let mut alpha_beta = AlphaBetaSearch::new(config(1));

    let expected = minimax.decide(&state).unwrap();
    let actual = alpha_beta.decide(&state).unwrap();

    assert_eq!(expected, actual);
    assert!(alpha_beta.stats().nodes_visited < minimax.stats().nodes_visited);
    assert!(alpha_beta.stats().leaves_evaluated < minimax.stats().leaves_evaluated);
}

proptest! {
    #[test]
    fn prop_alpha_beta_matches_minimax_two_agents(spec in tree_strategy(4, 3)) {
        let state = TreeGame::new(spec, 2);

        let mut minimax = MinimaxSearch::new(config(2));
        let mut alpha_beta = AlphaBetaSearch::new(config(2));

        prop_assert_eq!(minimax.decide(&state), alpha_beta.decide(&state));
        prop_assert!(alpha_beta.stats().nodes_visited <= minimax.stats().nodes_visited);
        prop_assert_eq!(minimax.value(&state), alpha_beta.value(&state));
    }

    #[test]
    fn prop_alpha_beta_matches_minimax_three_agents(spec in tree_strategy(6, 2)) {
        let state = TreeGame::new(spec, 3);

        let mut minimax = MinimaxSearch::new(config(2));
        let mut alpha_beta = AlphaBetaSearch::new(config(2));

        prop_assert_eq!(minimax.decide(&state), alpha_beta.decide(&state));
        prop_assert!(alpha_beta.stats().nodes_visited <= minimax.stats().nodes_visited);
    }

    #[test]
    fn prop_value_ignores_action_order(spec in tree_strategy(4, 3)) {
        let forward = TreeGame::new(spec.clone(), 2);
        let backward = TreeGame::new(reversed(&spec), 2);

        let mut minimax = MinimaxSearch::new(config(2));
        let mut expectimax = ExpectimaxSearch::new(config(2));

        prop_assert_eq!(minimax.value(&forward), minimax.value(&backward));
        prop_assert!((expectimax.value(&forward) - expectimax.value(&backward)).abs() < 1e-9);
    }

    #[test]
    fn prop_expectimax_is_probability_weighted(spec in tree_strategy(4, 3)) {
        let expected = brute_force_expectimax(&spec, 0, 2);
        let state = TreeGame::new(spec, 2);

        let mut expectimax = ExpectimaxSearch::new(config(2));
        prop_assert!((expectimax.value(&state) - expected).abs() < 1e-9);
    }

    #[test]
    fn prop_expectimax_at_least_minimax(spec in tree_strategy(4, 3)) {
        let state = TreeGame::new(spec, 2);

        let mut minimax = MinimaxSearch::new(config(2));
        let mut expectimax = ExpectimaxSearch::new(config(2));

        prop_assert!(expectimax.value(&state) >= minimax.value(&state));
    }
}

// =============================================================================
// Depth
// =============================================================================

#[test]
fn test_deeper_search_avoids_trap() {
    // Action 0 looks better after one round but collapses in the second.
    let tree = node(vec![
        node(vec![scored(10.0, vec![node(vec![leaf(-100.0)])])]),
        node(vec![scored(5.0, vec![node(vec![leaf(50.0)])])]),
    ]);
    let state = TreeGame::new(tree, 2);

    let shallow = MinimaxSearch::new(config(1)).decide(&state).unwrap();
    assert_eq!(shallow.action, TreeAction(0));
    assert_eq!(shallow.value, 10.0);

    let deep = MinimaxSearch::new(config(2)).decide(&state).unwrap();
    assert_eq!(deep.action, TreeAction(1));
    assert_eq!(deep.value, 50.0);

    let deep = AlphaBetaSearch::new(config(2)).decide(&state).unwrap();
    assert_eq!(deep.action, TreeAction(1));
}

#[test]
fn test_single_agent_counts_each_move_as_a_round() {
    let tree = node(vec![
        scored(2.0, vec![leaf(1.0), leaf(9.0)]),
        scored(6.0, vec![leaf(5.0)]),
    ]);
    let state = TreeGame::new(tree, 1);

    let one = MinimaxSearch::new(config(1)).decide(&state).unwrap();
    assert_eq!(one.action, TreeAction(1));
    assert_eq!(one.value, 6.0);

    let two = MinimaxSearch::new(config(2)).decide(&state).unwrap();
    assert_eq!(two.action, TreeAction(0));
    assert_eq!(two.value, 9.0);

    // No adversary: expectimax is plain maximization.
    let two = ExpectimaxSearch::new(config(2)).decide(&state).unwrap();
    assert_eq!(two.value, 9.0);
}

#[test]
fn test_search_agents_are_reusable() {
    let state = TreeGame::new(textbook(), 2);
    let mut search = AlphaBetaSearch::new(config(1));

    let first = search.decide(&state);
    let first_nodes = search.stats().nodes_visited;
    let second = search.decide(&state);

    assert_eq!(first, second);
    assert_eq!(search.stats().nodes_visited, first_nodes);
}
