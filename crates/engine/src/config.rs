//! Runtime configuration.
//!
//! The game has no flags and no config file. A few optional environment
//! variables tune the ambient behaviour; missing or malformed values fall
//! back to defaults.

/// Engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// `SNAKE_LOG_PATH`: append a JSON-lines session log here.
    pub log_path: Option<String>,
    /// `SNAKE_MUTE`: disable the food feedback cue.
    pub mute: bool,
    /// `SNAKE_SEED`: fixed seed for food placement.
    pub seed: Option<u32>,
}

impl EngineConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_path = lookup("SNAKE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let mute = lookup("SNAKE_MUTE")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let seed = lookup("SNAKE_SEED").and_then(|s| s.trim().parse().ok());

        Self {
            log_path,
            mute,
            seed,
        }
    }
}
