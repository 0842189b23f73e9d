use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dispatch behavior of a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Notify subscribers even when no reducer matched (default: false).
    #[serde(default)]
    pub notify_on_unmatched: bool,
    /// Drop panorama responses answering a superseded fetch (default: true).
    #[serde(default = "default_drop_stale_responses")]
    pub drop_stale_responses: bool,
    /// Number of recovered faults kept for inspection (default: 100).
    #[serde(default = "default_error_history")]
    pub error_history: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter used when `RUST_LOG` is not set (default: "info").
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_drop_stale_responses() -> bool {
    true
}

fn default_error_history() -> usize {
    100
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            notify_on_unmatched: false,
            drop_stale_responses: default_drop_stale_responses(),
            error_history: default_error_history(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}
