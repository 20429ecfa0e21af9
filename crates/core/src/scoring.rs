//! Scoring module - per-session score and the process-lifetime high score.

use crate::types::MAX_BAR_LEN;

/// Score of the running session plus the best finished session so far.
///
/// The high score only changes when a session ends, and never decreases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    score: u32,
    high_score: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Zero the session score. The high score is kept.
    pub fn begin(&mut self) {
        self.score = 0;
    }

    /// One food eaten.
    pub fn record_food(&mut self) {
        self.score = self.score.saturating_add(1);
    }

    /// Fold the session score into the high score and return the new high score.
    pub fn finish(&mut self) -> u32 {
        self.high_score = self.high_score.max(self.score);
        self.high_score
    }

    /// Sidebar progress, `min(score, MAX_BAR_LEN) / MAX_BAR_LEN`.
    pub fn bar_fraction(&self) -> f32 {
        bar_fraction(self.score)
    }
}

/// Capped linear fill in `[0.0, 1.0]`.
pub fn bar_fraction(score: u32) -> f32 {
    score.min(MAX_BAR_LEN) as f32 / MAX_BAR_LEN as f32
}
