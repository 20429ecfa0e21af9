//! Read-only views handed to the presentation layer.
//!
//! Frames borrow from the game so drawing a frame never allocates.

use crate::types::{Board, Position};

/// Everything the game screen draws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameFrame<'a> {
    pub board: Board,
    /// Head first.
    pub snake: &'a [Position],
    pub food: Position,
    pub score: u32,
    pub high_score: u32,
    /// Sidebar progress in `[0.0, 1.0]`.
    pub bar_fraction: f32,
}

/// Everything the start menu draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuScreen {
    pub high_score: u32,
    /// Button under the pointer, if any.
    pub hovered: Option<usize>,
}

impl MenuScreen {
    /// `HI-SCORE: <n>`, or `HI-SCORE: --` before any point has been scored.
    pub fn high_score_text(&self) -> String {
        if self.high_score > 0 {
            format!("HI-SCORE: {}", self.high_score)
        } else {
            "HI-SCORE: --".to_string()
        }
    }
}
