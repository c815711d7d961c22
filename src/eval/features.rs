//! Board features shared by the evaluation functions and the reflex agent.

use crate::rules::PursuitWorld;

/// Manhattan distance from the maximizer to the closest food pellet.
///
/// `None` when no food is left.
pub fn nearest_food_distance<S: PursuitWorld>(state: &S) -> Option<u32> {
    let me = state.maximizer_position();
    state.food().into_iter().map(|food| me.manhattan(food)).min()
}

/// Manhattan distance from the maximizer to the closest adversary.
///
/// `None` when there are no adversaries.
pub fn nearest_adversary_distance<S: PursuitWorld>(state: &S) -> Option<u32> {
    let me = state.maximizer_position();
    state
        .adversary_positions()
        .into_iter()
        .map(|adversary| me.manhattan(adversary))
        .min()
}

/// Whether any adversary is strictly closer than `radius`.
pub fn within_danger<S: PursuitWorld>(state: &S, radius: u32) -> bool {
    nearest_adversary_distance(state).is_some_and(|d| d < radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::grid::GridState;

    #[test]
    fn test_nearest_distances() {
        let state = GridState::parse(
            "%%%%%%\n\
             %P  .%\n\
             %.  G%\n\
             %%%%%%",
        )
        .unwrap();

        assert_eq!(nearest_food_distance(&state), Some(1));
        assert_eq!(nearest_adversary_distance(&state), Some(4));
        assert!(!within_danger(&state, 2));
        assert!(within_danger(&state, 5));
    }

    #[test]
    fn test_missing_features() {
        let state = GridState::parse("%%%\n%P%\n%%%").unwrap();

        assert_eq!(nearest_food_distance(&state), None);
        assert_eq!(nearest_adversary_distance(&state), None);
        assert!(!within_danger(&state, 2));
    }
}
