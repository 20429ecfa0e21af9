//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and session state. It has **zero
//! dependencies** on terminals, timers, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical food sequences
//! - **Testable**: Every rule is a plain method call
//! - **Portable**: The same rules drive the terminal front end and the headless tests
//!
//! # Module Structure
//!
//! - [`snake`]: Body, heading, movement, growth and collision
//! - [`food`]: Random grid-aligned food placement
//! - [`menu`]: Difficulty selector state machine
//! - [`scoring`]: Session score, high score, progress bar
//! - [`game`]: Everything above wired into one session-owning value
//! - [`rng`]: Seedable LCG
//! - [`snapshot`]: Borrowed frame data for the presentation layer
//!
//! # Game Rules
//!
//! - The snake starts at the board centre, one segment long, heading up
//! - Reversing straight into the neck is ignored
//! - Leaving the board or touching the body ends the session
//! - Each food is worth one point and one segment
//! - The high score is the best finished session of this process
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{Food, Game, StepOutcome};
//! use tui_snake_types::{Board, Difficulty, Position};
//!
//! let mut game = Game::new(Board::default(), 12345);
//! game.start_session(Difficulty::Beginner);
//!
//! // Put food right in front of the snake.
//! game.food = Food::new(Position::new(300, 280));
//! assert_eq!(game.step(), StepOutcome::Ate { score: 1 });
//! assert_eq!(game.score(), 1);
//! ```

pub mod food;
pub mod game;
pub mod menu;
pub mod rng;
pub mod scoring;
pub mod snake;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use food::Food;
pub use game::{Game, StepOutcome};
pub use menu::{Menu, MenuOutcome};
pub use rng::SimpleRng;
pub use scoring::{bar_fraction, Scoreboard};
pub use snake::{Collision, Snake};
pub use snapshot::{GameFrame, MenuScreen};
