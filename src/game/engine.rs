use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{
    config::GameConfig,
    direction::Direction,
    state::{Cell, GameState, Phase},
};

/// What a single tick did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing happened: the game has not started or is already over
    Idle,
    /// The snake moved one cell
    Moved,
    /// The snake moved onto the food and grew
    Ate,
    /// The next head left the grid; the game is now over
    HitWall,
    /// The next head landed on the snake; the game is now over
    HitSelf,
}

impl TickOutcome {
    /// True when this tick ended the game
    pub fn is_game_over(&self) -> bool {
        matches!(self, TickOutcome::HitWall | TickOutcome::HitSelf)
    }
}

/// Owns the game state and advances it on ticks and direction input
///
/// Both mutating operations take `&mut self`, so a tick and an input can
/// never interleave on the same state.
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
    rng: StdRng,
    revision: u64,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Like [`GameEngine::new`], with reproducible food placement
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    /// Start from an arbitrary state instead of the configured initial one
    ///
    /// `reset` still returns to the configured initial state.
    pub fn from_state(config: GameConfig, state: GameState, seed: u64) -> Self {
        Self {
            config,
            state,
            rng: StdRng::seed_from_u64(seed),
            revision: 0,
        }
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let state = Self::initial_state(&config);
        Self {
            config,
            state,
            rng,
            revision: 0,
        }
    }

    fn initial_state(config: &GameConfig) -> GameState {
        GameState::new(config.initial_head, config.initial_food, config.grid_size)
    }

    /// Request a new direction
    ///
    /// The first request starts the game. There is no guard against reversing
    /// into the body; the next tick reports that as a collision.
    pub fn set_direction(&mut self, requested: Direction) {
        if self.state.over {
            return;
        }

        let changed = !self.state.started || self.state.direction != requested;
        self.state.started = true;
        self.state.direction = requested;

        if changed {
            self.revision += 1;
        }
    }

    /// Advance the game by one step
    pub fn tick(&mut self) -> TickOutcome {
        if self.state.over || !self.state.started {
            return TickOutcome::Idle;
        }

        let new_head = self
            .state
            .snake
            .head()
            .moved_in_direction(self.state.direction);

        // Checked against the snake as it stands, tail included
        if let Some(collision) = self.check_collision(new_head) {
            debug!(
                "collision {:?} at ({}, {}) with score {}",
                collision, new_head.x, new_head.y, self.state.score
            );
            self.state.over = true;
            self.revision += 1;
            return collision;
        }

        self.state.snake.push_head(new_head);

        let outcome = if new_head == self.state.food {
            self.state.food = self.spawn_food();
            self.state.score += 1;
            debug!(
                "food eaten, score {}, next food at ({}, {})",
                self.state.score, self.state.food.x, self.state.food.y
            );
            TickOutcome::Ate
        } else {
            self.state.snake.pop_tail();
            TickOutcome::Moved
        };

        self.revision += 1;
        outcome
    }

    /// Return to the configured initial state
    pub fn reset(&mut self) {
        self.state = Self::initial_state(&self.config);
        self.revision += 1;
    }

    /// An owned copy of the current state; changing it never touches the engine
    pub fn query(&self) -> GameState {
        self.state.clone()
    }

    /// Borrow the current state read-only
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Counter bumped on every state change; compare values to know when to redraw
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    fn check_collision(&self, cell: Cell) -> Option<TickOutcome> {
        if !self.state.is_in_bounds(cell) {
            return Some(TickOutcome::HitWall);
        }

        if self.state.is_occupied_by_snake(cell) {
            return Some(TickOutcome::HitSelf);
        }

        None
    }

    /// Uniform over the whole grid; the snake's own cells are not excluded
    fn spawn_food(&mut self) -> Cell {
        let size = self.state.grid_size as i32;
        Cell::new(self.rng.gen_range(0..size), self.rng.gen_range(0..size))
    }
}
