//! Snake module - body, heading, movement and collision
//!
//! The body is a head-first list of grid-aligned positions. Movement shifts a
//! new head in and drops the tail; growing duplicates the tail so that the next
//! move keeps it. Bounds are never enforced while moving: leaving the board is
//! reported by [`Snake::check_collision`] and ends the session.

use crate::types::{Board, Direction, Position};

/// What the head ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Head left `[0, width) x [0, height)`.
    Wall,
    /// Head landed on one of its own segments.
    SelfHit,
}

impl Collision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collision::Wall => "wall",
            Collision::SelfHit => "self",
        }
    }
}

/// The player's snake.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    board: Board,
    /// Head at index 0; never empty.
    body: Vec<Position>,
    direction: Direction,
}

impl Snake {
    /// A length-1 snake at the board centre, heading up.
    pub fn new(board: Board) -> Self {
        let mut snake = Self {
            board,
            body: Vec::with_capacity(64),
            direction: Direction::Up,
        };
        snake.reset();
        snake
    }

    /// Reinitialize for a new session.
    pub fn reset(&mut self) {
        self.body.clear();
        self.body.push(self.board.center());
        self.direction = Direction::Up;
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn body(&self) -> &[Position] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// A snake always has a head.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Advance one cell in the current direction, preserving length.
    pub fn move_forward(&mut self) {
        let new_head = self.head() + self.direction;
        self.body.insert(0, new_head);
        self.body.pop();
    }

    /// Duplicate the tail; the next move turns the copy into a real segment.
    pub fn grow(&mut self) {
        let tail = self.body[self.body.len() - 1];
        self.body.push(tail);
    }

    /// Request a new heading. The exact reverse of the stored heading is ignored.
    ///
    /// Returns whether the request was accepted.
    pub fn change_dir(&mut self, requested: Direction) -> bool {
        if requested == self.direction.opposite() {
            return false;
        }
        self.direction = requested;
        true
    }

    /// Classify the current head position.
    pub fn collision(&self) -> Option<Collision> {
        let head = self.head();
        if !self.board.contains(head) {
            return Some(Collision::Wall);
        }
        if self.body[1..].contains(&head) {
            return Some(Collision::SelfHit);
        }
        None
    }

    /// True if the head is off the board or on any other segment.
    pub fn check_collision(&self) -> bool {
        self.collision().is_some()
    }
}
