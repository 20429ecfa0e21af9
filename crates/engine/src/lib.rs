//! Game loop engine.
//!
//! Drives [`tui_snake_core::Game`] through a [`Platform`]: the start menu,
//! the dual-rate session loop, the optional session log, and environment
//! configuration. The engine never touches a terminal directly, so the whole
//! loop runs headless in tests against a scripted platform.

pub mod config;
pub mod game_loop;
pub mod platform;
pub mod session_log;
pub mod ticker;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use config::EngineConfig;
pub use game_loop::{GameLoop, SessionEnd};
pub use platform::Platform;
pub use session_log::{LogEvent, SessionLog};
pub use ticker::Ticker;
