//! The seam between the game loop and the presentation layer.

use std::time::Duration;

use anyhow::Result;

use crate::core::{GameFrame, MenuScreen};
use crate::types::{CursorShape, InputEvent, Rect};

/// Window/terminal, audio and input collaborator.
///
/// The loop owns all game state and only calls into the platform to read the
/// clock, collect input, and present frames.
pub trait Platform {
    /// Monotonic milliseconds since an arbitrary origin.
    fn now_ms(&self) -> u64;

    /// Wait at most `timeout` for input, then append every pending event to `out`.
    fn poll_events(&mut self, timeout: Duration, out: &mut Vec<InputEvent>) -> Result<()>;

    /// Current hit regions of the three menu buttons (top to bottom).
    fn menu_buttons(&self) -> [Rect; 3];

    fn draw_menu(&mut self, screen: &MenuScreen) -> Result<()>;

    /// Present one game frame. Returns `false` when the board could not be
    /// shown (for example a terminal smaller than the minimum layout).
    fn draw_game(&mut self, frame: &GameFrame<'_>) -> Result<bool>;

    /// Food feedback. Must not fail: an unavailable cue is simply skipped.
    fn play_feedback_cue(&mut self);

    fn set_cursor(&mut self, shape: CursorShape) -> Result<()>;
}
