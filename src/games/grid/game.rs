//! Grid pursuit rules.

use std::sync::Arc;

use im::OrdSet;
use smallvec::SmallVec;

use crate::core::{AgentId, Direction, Position};
use crate::error::LayoutError;
use crate::rules::{AdversaryView, GameState, PursuitWorld};

use super::layout::Layout;

/// Points lost per maximizer move.
pub const TIME_PENALTY: f64 = 1.0;
/// Points for eating a food pellet.
pub const FOOD_REWARD: f64 = 10.0;
/// Points for eating the last pellet.
pub const WIN_REWARD: f64 = 500.0;
/// Points lost when caught.
pub const LOSE_PENALTY: f64 = 500.0;
/// Points for catching a scared adversary.
pub const ADVERSARY_REWARD: f64 = 200.0;
/// Adversary moves a capsule keeps adversaries scared.
pub const SCARED_TIME: u32 = 40;

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridOutcome {
    /// All food eaten.
    Win,
    /// Caught by an adversary.
    Lose,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Adversary {
    position: Position,
    start: Position,
    scared_timer: u32,
}

/// A grid pursuit game state.
///
/// Food and capsules live in persistent `im` sets and the layout is
/// shared, so successor generation copies only a few words.
#[derive(Clone, Debug)]
pub struct GridState {
    layout: Arc<Layout>,
    maximizer: Position,
    food: OrdSet<Position>,
    capsules: OrdSet<Position>,
    adversaries: SmallVec<[Adversary; 4]>,
    score: f64,
    outcome: Option<GridOutcome>,
}

impl GridState {
    /// Initial state for a layout.
    pub fn new(layout: Layout) -> Self {
        let adversaries = layout
            .adversaries()
            .iter()
            .map(|&start| Adversary {
                position: start,
                start,
                scared_timer: 0,
            })
            .collect();

        Self {
            maximizer: layout.maximizer(),
            food: layout.food().iter().copied().collect(),
            capsules: layout.capsules().iter().copied().collect(),
            adversaries,
            score: 0.0,
            outcome: None,
            layout: Arc::new(layout),
        }
    }

    /// Parse a layout and build its initial state.
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        Layout::parse(text).map(Self::new)
    }

    /// The static board.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// How the game ended, if it has.
    #[must_use]
    pub fn outcome(&self) -> Option<GridOutcome> {
        self.outcome
    }

    /// View of one adversary, `None` for agent 0 or unknown indices.
    #[must_use]
    pub fn adversary(&self, agent: AgentId) -> Option<AdversaryView> {
        let slot = agent.index().checked_sub(1)?;
        self.adversaries.get(slot).map(|a| AdversaryView {
            agent,
            position: a.position,
            scared_timer: a.scared_timer,
        })
    }

    fn move_maximizer(&mut self, action: Direction) {
        self.maximizer = action.apply(self.maximizer);
        self.score -= TIME_PENALTY;

        if self.food.remove(&self.maximizer).is_some() {
            self.score += FOOD_REWARD;
            if self.food.is_empty() {
                self.score += WIN_REWARD;
                self.outcome = Some(GridOutcome::Win);
                return;
            }
        }

        if self.capsules.remove(&self.maximizer).is_some() {
            for adversary in self.adversaries.iter_mut() {
                adversary.scared_timer = SCARED_TIME;
            }
        }

        for slot in 0..self.adversaries.len() {
            self.resolve_collision(slot);
        }
    }

    fn move_adversary(&mut self, slot: usize, action: Direction) {
        let adversary = &mut self.adversaries[slot];
        adversary.scared_timer = adversary.scared_timer.saturating_sub(1);
        adversary.position = action.apply(adversary.position);
        self.resolve_collision(slot);
    }

    fn resolve_collision(&mut self, slot: usize) {
        if self.outcome.is_some() || self.adversaries[slot].position != self.maximizer {
            return;
        }

        let adversary = &mut self.adversaries[slot];
        if adversary.scared_timer > 0 {
            self.score += ADVERSARY_REWARD;
            adversary.position = adversary.start;
            adversary.scared_timer = 0;
        } else {
            self.score -= LOSE_PENALTY;
            self.outcome = Some(GridOutcome::Lose);
        }
    }
}

impl GameState for GridState {
    type Action = Direction;

    fn agent_count(&self) -> usize {
        1 + self.adversaries.len()
    }

    fn legal_actions(&self, agent: AgentId) -> Vec<Direction> {
        if self.outcome.is_some() {
            return Vec::new();
        }

        if agent.is_maximizer() {
            let mut actions = self.layout.open_moves(self.maximizer).into_vec();
            actions.push(Direction::Stop);
            return actions;
        }

        match self.adversary(agent) {
            Some(view) => {
                let moves = self.layout.open_moves(view.position);
                if moves.is_empty() {
                    vec![Direction::Stop]
                } else {
                    moves.into_vec()
                }
            }
            None => Vec::new(),
        }
    }

    fn successor(&self, agent: AgentId, action: &Direction) -> Self {
        assert!(
            self.legal_actions(agent).contains(action),
            "illegal action {} for {}",
            action,
            agent
        );

        let mut next = self.clone();
        if agent.is_maximizer() {
            next.move_maximizer(*action);
        } else {
            next.move_adversary(agent.index() - 1, *action);
        }
        next
    }

    fn is_win(&self) -> bool {
        self.outcome == Some(GridOutcome::Win)
    }

    fn is_lose(&self) -> bool {
        self.outcome == Some(GridOutcome::Lose)
    }

    fn score(&self) -> f64 {
        self.score
    }
}

impl PursuitWorld for GridState {
    fn maximizer_position(&self) -> Position {
        self.maximizer
    }

    fn food(&self) -> Vec<Position> {
        self.food.iter().copied().collect()
    }

    fn capsules(&self) -> Vec<Position> {
        self.capsules.iter().copied().collect()
    }

    fn adversaries(&self) -> Vec<AdversaryView> {
        AgentId::adversaries(self.agent_count())
            .filter_map(|agent| self.adversary(agent))
            .collect()
    }

    fn food_count(&self) -> usize {
        self.food.len()
    }

    fn capsule_count(&self) -> usize {
        self.capsules.len()
    }
}

impl std::fmt::Display for GridState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in (0..self.layout.height()).rev() {
            for x in 0..self.layout.width() {
                let pos = Position::new(x, y);
                let cell = if pos == self.maximizer {
                    'P'
                } else if self.adversaries.iter().any(|a| a.position == pos) {
                    'G'
                } else if self.layout.is_wall(pos) {
                    '%'
                } else if self.food.contains(&pos) {
                    '.'
                } else if self.capsules.contains(&pos) {
                    'o'
                } else {
                    ' '
                };
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        write!(f, "Score: {}", self.score)
    }
}
