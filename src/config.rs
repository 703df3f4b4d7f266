//! Engine configuration.

use crate::rules::DEFAULT_PRIORITY;
use serde::{Deserialize, Serialize};

/// Number of history entries returned by state machine read queries.
pub const DEFAULT_HISTORY_WINDOW: usize = 20;

/// Settings applied when a [`DecisionService`](crate::DecisionService) is built.
///
/// Every field has a default, so a partial (or empty) JSON document is a
/// valid configuration.
///
/// # Example
///
/// ```rust
/// use ruleflow::EngineConfig;
///
/// let config = EngineConfig::from_json(r#"{"history_window": 5}"#).unwrap();
/// assert_eq!(config.history_window, 5);
/// assert_eq!(config.default_priority, 100);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Name reported by the health check
    pub service_name: String,
    /// Priority given to rules created without one
    pub default_priority: i64,
    /// How many recent history entries a snapshot exposes
    pub history_window: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            service_name: "rule-based-model-system".to_string(),
            default_priority: DEFAULT_PRIORITY,
            history_window: DEFAULT_HISTORY_WINDOW,
        }
    }
}

impl EngineConfig {
    /// Parse a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = name.into();
        self
    }

    pub fn with_default_priority(mut self, priority: i64) -> Self {
        self.default_priority = priority;
        self
    }

    pub fn with_history_window(mut self, window: usize) -> Self {
        self.history_window = window;
        self
    }
}
