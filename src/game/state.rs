use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// A cell on the game grid, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move cell by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The neighbouring cell one step in `direction`
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    /// Check whether the cell lies inside a square grid of `grid_size` cells per side
    pub fn is_within(&self, grid_size: usize) -> bool {
        let size = grid_size as i32;
        self.x >= 0 && self.x < size && self.y >= 0 && self.y < size
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// The snake, head first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: Vec<Cell>,
}

impl Snake {
    /// A one-cell snake
    pub fn new(head: Cell) -> Self {
        Self { body: vec![head] }
    }

    /// Build a snake from its segments, head first. Returns `None` for an empty body.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Option<Self> {
        let body: Vec<Cell> = cells.into_iter().collect();
        if body.is_empty() { None } else { Some(Self { body }) }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    /// All segments, head first
    pub fn cells(&self) -> &[Cell] {
        &self.body
    }

    /// Check if a cell is covered by any segment, tail included
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Put a new head in front of the current one
    pub(crate) fn push_head(&mut self, head: Cell) {
        self.body.insert(0, head);
    }

    /// Drop the last segment, never shrinking below one cell
    pub(crate) fn pop_tail(&mut self) {
        if self.body.len() > 1 {
            self.body.pop();
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false: a snake has at least one segment
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Where a game is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the first direction input
    NotStarted,
    Running,
    /// Hit a wall or itself; only a reset leaves this phase
    Over,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Cell,
    pub direction: Direction,
    pub started: bool,
    pub over: bool,
    pub score: u32,
    pub grid_size: usize,
}

impl GameState {
    /// Fresh state: one-cell snake, idle, not started
    pub fn new(head: Cell, food: Cell, grid_size: usize) -> Self {
        Self {
            snake: Snake::new(head),
            food,
            direction: Direction::Idle,
            started: false,
            over: false,
            score: 0,
            grid_size,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.over {
            Phase::Over
        } else if self.started {
            Phase::Running
        } else {
            Phase::NotStarted
        }
    }

    /// Check if a cell is within the grid bounds
    pub fn is_in_bounds(&self, cell: Cell) -> bool {
        cell.is_within(self.grid_size)
    }

    /// Check if a cell is occupied by the snake
    pub fn is_occupied_by_snake(&self, cell: Cell) -> bool {
        self.snake.occupies(cell)
    }
}
