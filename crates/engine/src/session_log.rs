//! Optional JSON-lines session log.
//!
//! Enabled by `SNAKE_LOG_PATH`. Each line is one record:
//!
//! ```text
//! {"t_ms":0,"type":"session_start","difficulty":"beginner","tick_rate":5}
//! {"t_ms":2400,"type":"food_eaten","score":1}
//! {"t_ms":6100,"type":"session_end","cause":"wall","score":1,"high_score":1}
//! {"t_ms":9000,"type":"quit","high_score":1}
//! ```
//!
//! The terminal is in raw mode while the game runs, so nothing is ever printed;
//! a log that cannot be opened or written is dropped silently.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Result;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LogEvent {
    SessionStart {
        difficulty: &'static str,
        tick_rate: u32,
    },
    FoodEaten {
        score: u32,
    },
    SessionEnd {
        cause: &'static str,
        score: u32,
        high_score: u32,
    },
    Quit {
        high_score: u32,
    },
}

#[derive(Serialize)]
struct LogRecord<'a> {
    t_ms: u64,
    #[serde(flatten)]
    event: &'a LogEvent,
}

pub struct SessionLog {
    writer: Option<Box<dyn Write>>,
    buf: Vec<u8>,
}

impl SessionLog {
    /// A log that records nothing.
    pub fn disabled() -> Self {
        Self {
            writer: None,
            buf: Vec::new(),
        }
    }

    /// Append to `path`, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file: File = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::to_writer(BufWriter::new(file)))
    }

    /// Open `path` if given; any failure yields a disabled log.
    pub fn open_or_disabled(path: Option<&str>) -> Self {
        match path {
            Some(p) => Self::open(p).unwrap_or_else(|_| Self::disabled()),
            None => Self::disabled(),
        }
    }

    pub fn to_writer(writer: impl Write + 'static) -> Self {
        Self {
            writer: Some(Box::new(writer)),
            buf: Vec::with_capacity(256),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }

    pub fn record(&mut self, t_ms: u64, event: &LogEvent) {
        let Some(writer) = self.writer.as_mut() else {
            return;
        };

        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, &LogRecord { t_ms, event }).is_err() {
            return;
        }
        self.buf.push(b'\n');

        // Flush per record: the process may be torn down right after a quit.
        if writer.write_all(&self.buf).and_then(|_| writer.flush()).is_err() {
            self.writer = None;
        }
    }
}
