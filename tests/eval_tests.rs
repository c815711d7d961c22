//! Evaluation function tests on hand-built worlds.

use pursuit_search::agents::{Agent, ReflexAgent};
use pursuit_search::core::{AgentId, Direction, GameRng, Position};
use pursuit_search::eval::{BetterEvaluation, EvaluationWeights, Evaluator};
use pursuit_search::rules::{AdversaryView, GameState, PursuitWorld};

/// A frozen world: every field is set directly, successors just move
/// the maximizer.
#[derive(Clone, Debug, Default)]
struct Snapshot {
    me: Position,
    food: Vec<Position>,
    capsules: Vec<Position>,
    adversaries: Vec<Position>,
    win: bool,
    lose: bool,
    score: f64,
}

impl Snapshot {
    fn at(x: i32, y: i32) -> Self {
        Self {
            me: Position::new(x, y),
            ..Self::default()
        }
    }

    fn pellet(mut self, x: i32, y: i32) -> Self {
        self.food.push(Position::new(x, y));
        self
    }

    fn capsule(mut self, x: i32, y: i32) -> Self {
        self.capsules.push(Position::new(x, y));
        self
    }

    fn adversary(mut self, x: i32, y: i32) -> Self {
        self.adversaries.push(Position::new(x, y));
        self
    }
}

impl GameState for Snapshot {
    type Action = Direction;

    fn agent_count(&self) -> usize {
        1 + self.adversaries.len()
    }

    fn legal_actions(&self, agent: AgentId) -> Vec<Direction> {
        if agent.is_maximizer() && !self.is_terminal() {
            Direction::MOVES.to_vec()
        } else {
            Vec::new()
        }
    }

    fn successor(&self, _agent: AgentId, action: &Direction) -> Self {
        let mut next = self.clone();
        next.me = action.apply(self.me);
        next.food.retain(|&f| f != next.me);
        next
    }

    fn is_win(&self) -> bool {
        self.win
    }

    fn is_lose(&self) -> bool {
        self.lose
    }

    fn score(&self) -> f64 {
        self.score
    }
}

impl PursuitWorld for Snapshot {
    fn maximizer_position(&self) -> Position {
        self.me
    }

    fn food(&self) -> Vec<Position> {
        self.food.clone()
    }

    fn capsules(&self) -> Vec<Position> {
        self.capsules.clone()
    }

    fn adversaries(&self) -> Vec<AdversaryView> {
        self.adversaries
            .iter()
            .enumerate()
            .map(|(i, &position)| AdversaryView {
                agent: AgentId::new(i as u8 + 1),
                position,
                scared_timer: 0,
            })
            .collect()
    }
}

// =============================================================================
// BetterEvaluation
// =============================================================================

#[test]
fn test_win_outranks_identical_open_state() {
    let eval = BetterEvaluation::default();
    let open = Snapshot::at(0, 0).pellet(3, 0).adversary(0, 5);
    let mut won = open.clone();
    won.win = true;

    assert!(eval.evaluate(&won) > eval.evaluate(&open));
    assert_eq!(eval.evaluate(&won) - eval.evaluate(&open), 50_000.0);
}

#[test]
fn test_loss_underranks_identical_open_state() {
    let eval = BetterEvaluation::default();
    let open = Snapshot::at(0, 0).pellet(3, 0).adversary(0, 5);
    let mut lost = open.clone();
    lost.lose = true;

    assert!(eval.evaluate(&lost) < eval.evaluate(&open));
}

#[test]
fn test_danger_dominates_everything() {
    let eval = BetterEvaluation::default();
    let adjacent = Snapshot::at(0, 0).pellet(1, 0).adversary(0, 1);
    let mut lost_far = Snapshot::at(0, 0).pellet(9, 9).pellet(8, 8).adversary(0, 9);
    lost_far.lose = true;

    let danger = eval.evaluate(&adjacent);
    assert_eq!(danger, eval.weights().danger_utility);
    assert!(danger < eval.evaluate(&lost_far));
}

#[test]
fn test_distance_two_is_safe() {
    let eval = BetterEvaluation::default();
    let state = Snapshot::at(0, 0).pellet(1, 0).adversary(1, 1);

    assert!(eval.breakdown(&state).is_some());
    assert!(eval.evaluate(&state) > 0.0);
}

#[test]
fn test_terms_follow_board() {
    let eval = BetterEvaluation::default();
    let state = Snapshot::at(0, 0)
        .pellet(2, 0)
        .pellet(0, 4)
        .capsule(5, 5)
        .adversary(3, 0)
        .adversary(0, 7);

    let terms = eval.breakdown(&state).unwrap();
    assert_eq!(terms.food, 900_000.0 / 3.0);
    assert_eq!(terms.nearest_food, 900.0 / 3.0);
    assert_eq!(terms.capsules, 9_000.0 / 2.0);
    // Closest adversary, not the last one.
    assert_eq!(terms.adversary, 3.0);
    assert_eq!(terms.outcome, 0.0);
}

#[test]
fn test_bonus_added_after_weighted_sum() {
    let weights = EvaluationWeights {
        food: 2.0,
        nearest_food: 0.0,
        capsules: 0.0,
        adversary_distance: 10.0,
        ..EvaluationWeights::default()
    }
    .with_outcome_bonus(1_000.0, 1_000.0);
    let eval = BetterEvaluation::new(weights);

    let mut state = Snapshot::at(0, 0).adversary(0, 4);
    state.win = true;

    let terms = eval.breakdown(&state).unwrap();
    assert_eq!(terms.linear_sum(), 2.0 + 40.0);
    assert_eq!(eval.evaluate(&state), 42.0 + 1_000.0);
}

#[test]
fn test_empty_board_terms() {
    let eval = BetterEvaluation::default();
    let state = Snapshot::at(0, 0);

    let terms = eval.breakdown(&state).unwrap();
    assert_eq!(terms.nearest_food, 0.0);
    assert_eq!(terms.adversary, 0.0);
    assert_eq!(terms.food, 900_000.0);
}

#[test]
fn test_custom_danger_radius() {
    let eval = BetterEvaluation::new(EvaluationWeights::default().with_danger_radius(4));
    let state = Snapshot::at(0, 0).pellet(1, 0).adversary(0, 3);

    assert_eq!(eval.evaluate(&state), eval.weights().danger_utility);
}

// =============================================================================
// Reflex Agent
// =============================================================================

#[test]
fn test_reflex_takes_safe_move_over_adjacent_one() {
    // North eats a pellet but lands adjacent to the adversary; South
    // keeps distance 3.
    let state = Snapshot::at(0, 0).pellet(0, 1).pellet(0, -2).adversary(0, 2);

    let mut agent = ReflexAgent::new(GameRng::new(0));
    let scored = agent.score_actions(&state);
    let north = scored.iter().find(|(a, _)| *a == Direction::North).unwrap().1;
    let south = scored.iter().find(|(a, _)| *a == Direction::South).unwrap().1;

    assert_eq!(north, -1_000_000.0);
    assert!(south > north);
    assert_eq!(agent.choose_action(&state), Some(Direction::South));
}

#[test]
fn test_reflex_tie_break_is_seeded() {
    // Food straight north and straight south: a tie.
    let state = Snapshot::at(0, 0).pellet(0, 3).pellet(0, -3);

    let picks = |seed: u64| {
        let mut agent = ReflexAgent::new(GameRng::new(seed));
        (0..20)
            .map(|_| agent.choose_action(&state).unwrap())
            .collect::<Vec<_>>()
    };

    assert_eq!(picks(99), picks(99));

    let seen: std::collections::HashSet<_> = picks(99).into_iter().collect();
    assert_eq!(
        seen,
        [Direction::North, Direction::South].into_iter().collect()
    );
}
