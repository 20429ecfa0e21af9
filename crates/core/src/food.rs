//! Food placement.
//!
//! Food is drawn uniformly from the whole grid. Cells under the snake are not
//! excluded, so food can appear beneath the body; it becomes edible once the
//! head reaches that cell.

use crate::rng::SimpleRng;
use crate::types::{Board, Position, CELL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    position: Position,
}

impl Food {
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Food at a random cell of `board`.
    pub fn random(board: &Board, rng: &mut SimpleRng) -> Self {
        let mut food = Self::new(Position::default());
        food.randomize(board, rng);
        food
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Move to a uniformly random grid cell.
    pub fn randomize(&mut self, board: &Board, rng: &mut SimpleRng) {
        let col = rng.next_range(board.cols() as u32) as i32;
        let row = rng.next_range(board.rows() as u32) as i32;
        self.position = Position::new(col * CELL, row * CELL);
    }
}
