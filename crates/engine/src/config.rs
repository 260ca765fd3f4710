//! Host configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::core::types::DEFAULT_FRAME_MS;

/// Host configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Frame interval in milliseconds (at least 1).
    pub frame_ms: u32,
    /// Log file; `None` logs to stderr.
    pub log_path: Option<PathBuf>,
    /// Where to write the stage snapshot at shutdown.
    pub dump_path: Option<PathBuf>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            frame_ms: DEFAULT_FRAME_MS,
            log_path: None,
            dump_path: None,
        }
    }
}

impl HostConfig {
    /// Create from environment variables
    ///
    /// - `TETRIS_FRAME_MS`: frame interval (default 16)
    /// - `TETRIS_LOG_PATH`: log file path
    /// - `TETRIS_STAGE_DUMP_PATH`: stage snapshot path
    ///
    /// Unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let frame_ms = lookup("TETRIS_FRAME_MS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_FRAME_MS);

        let path = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) })
        };

        Self {
            frame_ms,
            log_path: path("TETRIS_LOG_PATH"),
            dump_path: path("TETRIS_STAGE_DUMP_PATH"),
        }
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(self.frame_ms as u64)
    }
}
