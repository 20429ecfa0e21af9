//! Food feedback cue: the terminal bell.
//!
//! A cue that is muted, or whose output fails once, stays silent for the rest
//! of the process. The game never stops because of it.

use std::io::Write;

#[derive(Debug, Clone)]
pub struct FeedbackCue {
    enabled: bool,
}

impl FeedbackCue {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn play(&mut self, out: &mut impl Write) {
        if !self.enabled {
            return;
        }
        if out.write_all(b"\x07").and_then(|_| out.flush()).is_err() {
            self.enabled = false;
        }
    }
}
