//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key and mouse events into [`crate::types::InputEvent`] and
//! provides a polling source that drains every pending event per frame.

pub mod map;
pub mod source;

pub use tui_snake_types as types;

pub use map::{map_event, map_key, map_mouse, should_quit};
pub use source::EventSource;
