/// Fixed-interval trigger driven by an external millisecond clock.
///
/// The render tick and the move tick are two of these, checked once per loop
/// iteration. A trigger that fires late keeps its cadence; if it is more than
/// one interval behind it re-arms from `now` instead of bursting to catch up.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval_ms: u64,
    next_due_ms: u64,
}

impl Ticker {
    /// First fire at `now_ms + interval_ms`.
    pub fn new(interval_ms: u64, now_ms: u64) -> Self {
        let interval_ms = interval_ms.max(1);
        Self {
            interval_ms,
            next_due_ms: now_ms.saturating_add(interval_ms),
        }
    }

    /// First fire at `now_ms`.
    pub fn immediate(interval_ms: u64, now_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            next_due_ms: now_ms,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Returns true (at most once per call) when the deadline has passed.
    pub fn fire(&mut self, now_ms: u64) -> bool {
        if now_ms < self.next_due_ms {
            return false;
        }
        self.next_due_ms = self.next_due_ms.saturating_add(self.interval_ms);
        if self.next_due_ms <= now_ms {
            self.next_due_ms = now_ms.saturating_add(self.interval_ms);
        }
        true
    }

    /// Push the next fire to a full interval after `now_ms`.
    pub fn restart(&mut self, now_ms: u64) {
        self.next_due_ms = now_ms.saturating_add(self.interval_ms);
    }

    /// Milliseconds until the next fire (0 if already due).
    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        self.next_due_ms.saturating_sub(now_ms)
    }
}
