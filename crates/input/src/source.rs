//! Blocking terminal event source with a bounded wait.

use std::time::Duration;

use anyhow::Result;
use crossterm::event;

use crate::map::map_event;
use crate::types::InputEvent;

/// Reads crossterm events from the controlling terminal.
#[derive(Debug, Default)]
pub struct EventSource;

impl EventSource {
    pub fn new() -> Self {
        Self
    }

    /// Wait up to `timeout` for the first event, then drain everything already queued.
    ///
    /// Events that carry no game input are skipped.
    pub fn poll_into(&mut self, timeout: Duration, out: &mut Vec<InputEvent>) -> Result<()> {
        if !event::poll(timeout)? {
            return Ok(());
        }
        loop {
            if let Some(input) = map_event(event::read()?) {
                out.push(input);
            }
            if !event::poll(Duration::ZERO)? {
                return Ok(());
            }
        }
    }
}
