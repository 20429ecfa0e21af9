//! Terminal Snake runner (default binary).
//!
//! Start menu → session → start menu, until the player quits. Rendering goes
//! through the framebuffer renderer in `term`; all timing lives in the engine.
//!
//! Optional environment:
//! - `SNAKE_LOG_PATH`: append a JSON-lines session log
//! - `SNAKE_MUTE=1`: no bell when food is eaten
//! - `SNAKE_SEED`: fixed food sequence

mod terminal;

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

use tui_snake::core::Game;
use tui_snake::engine::{EngineConfig, GameLoop, SessionLog};
use tui_snake::term::FeedbackCue;
use tui_snake::types::Board;

use terminal::TerminalPlatform;

fn main() -> Result<()> {
    let config = EngineConfig::from_env();
    let seed = config.seed.unwrap_or_else(clock_seed);
    let log = SessionLog::open_or_disabled(config.log_path.as_deref());

    let mut platform = TerminalPlatform::new(FeedbackCue::new(!config.mute));
    if let Err(err) = platform.enter() {
        let _ = platform.exit();
        return Err(err);
    }

    let mut game_loop = GameLoop::new(platform, Game::new(Board::default(), seed), log);
    let result = game_loop.run();

    // Always try to restore terminal state.
    let _ = game_loop.platform_mut().exit();
    result
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
