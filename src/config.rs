//! Configuration for the local instant upload daemon.

use std::env;
use std::path::PathBuf;

/// Configuration for local deployment.
#[cfg(feature = "local")]
#[derive(Clone, Debug)]
pub struct LocalConfig {
    /// JSON file holding the user's preferences
    pub preferences_path: PathBuf,
    /// File admitted upload requests are appended to, one JSON object per line
    pub spool_path: PathBuf,
    /// Capacity of the media event broadcast channel
    pub event_capacity: usize,
}

#[cfg(feature = "local")]
impl LocalConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            preferences_path: env::var("PREFERENCES_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./preferences.json")),
            spool_path: env::var("UPLOAD_SPOOL_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./upload_queue.jsonl")),
            event_capacity: env::var("EVENT_CAPACITY")
                .ok()
                .and_then(|capacity| capacity.parse().ok())
                .filter(|capacity| *capacity > 0)
                .unwrap_or(100),
        }
    }
}
