//! Game module - one snake, one food, and the scoreboard
//!
//! `Game` owns all session state explicitly; the loop in the engine crate
//! drives it. A session runs from [`Game::start_session`] until
//! [`Game::step`] reports a collision. The high score survives sessions and
//! lives as long as the `Game` value.

use crate::food::Food;
use crate::rng::SimpleRng;
use crate::scoring::Scoreboard;
use crate::snake::{Collision, Snake};
use crate::snapshot::GameFrame;
use crate::types::{Board, Difficulty, Direction};

/// What happened on one move tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Moved onto an empty (or food-free) cell.
    Moved,
    /// Ate the food: the snake will be one longer after the next move.
    Ate { score: u32 },
    /// The session is over; the high score has already been updated.
    Collided {
        collision: Collision,
        score: u32,
        high_score: u32,
    },
}

#[derive(Debug, Clone)]
pub struct Game {
    pub board: Board,
    pub snake: Snake,
    pub food: Food,
    pub rng: SimpleRng,
    pub scoreboard: Scoreboard,
    difficulty: Option<Difficulty>,
}

impl Game {
    /// Create a game on `board` with a deterministic food sequence.
    pub fn new(board: Board, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let food = Food::random(&board, &mut rng);
        Self {
            board,
            snake: Snake::new(board),
            food,
            rng,
            scoreboard: Scoreboard::new(),
            difficulty: None,
        }
    }

    /// Reset snake, food and score for a fresh session at `difficulty`.
    pub fn start_session(&mut self, difficulty: Difficulty) {
        self.snake.reset();
        self.food.randomize(&self.board, &mut self.rng);
        self.scoreboard.begin();
        self.difficulty = Some(difficulty);
    }

    /// Difficulty of the current (or last) session.
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn score(&self) -> u32 {
        self.scoreboard.score()
    }

    pub fn high_score(&self) -> u32 {
        self.scoreboard.high_score()
    }

    /// Forward a direction request; it applies on the next [`Game::step`].
    pub fn steer(&mut self, direction: Direction) -> bool {
        self.snake.change_dir(direction)
    }

    /// One move tick: advance, then check collision, then check food.
    pub fn step(&mut self) -> StepOutcome {
        self.snake.move_forward();

        if let Some(collision) = self.snake.collision() {
            let high_score = self.scoreboard.finish();
            return StepOutcome::Collided {
                collision,
                score: self.scoreboard.score(),
                high_score,
            };
        }

        if self.snake.head() == self.food.position() {
            self.snake.grow();
            self.scoreboard.record_food();
            self.food.randomize(&self.board, &mut self.rng);
            return StepOutcome::Ate {
                score: self.scoreboard.score(),
            };
        }

        StepOutcome::Moved
    }

    pub fn frame(&self) -> GameFrame<'_> {
        GameFrame {
            board: self.board,
            snake: self.snake.body(),
            food: self.food.position(),
            score: self.scoreboard.score(),
            high_score: self.scoreboard.high_score(),
            bar_fraction: self.scoreboard.bar_fraction(),
        }
    }
}
