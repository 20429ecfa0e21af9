//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids widget/layout frameworks and instead renders into a
//! simple framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Views are pure functions of a frame and a viewport
//! - Allow precise control over aspect ratio (2 chars wide per grid cell)

pub mod cue;
pub mod fb;
pub mod game_view;
pub mod menu_view;
pub mod palette;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use cue::FeedbackCue;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{bar_cols, GameView, Scale, Viewport, BAR_COLS, SIDEBAR_COLS};
pub use menu_view::MenuView;
pub use renderer::{encode_diff_into, encode_full_into, SetPointerShape, TerminalRenderer};
