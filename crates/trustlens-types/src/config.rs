//! Configuration types for the TrustLens assistant.
//!
//! `AssistantConfig` represents the top-level `config.toml` that controls
//! the simulated response latency, the clearing delay, the welcome message,
//! and where the rule table comes from.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Seeded assistant message at the start of every session.
pub const DEFAULT_WELCOME_MESSAGE: &str = "Hello! I'm your TrustLens AI assistant. I can help you understand legal documents, verify information, and answer questions about your uploaded content. To get started, you can upload a new document in the 'Documents' section or ask me about existing ones. What would you like to know?";

/// Top-level configuration for the assistant.
///
/// Loaded from `~/.trustlens/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Simulated "thinking time" between a submit and its reply.
    #[serde(default = "default_response_delay_ms")]
    pub response_delay_ms: u64,

    /// Delay between wiping the history and seeding the fresh welcome message.
    #[serde(default = "default_clear_delay_ms")]
    pub clear_delay_ms: u64,

    #[serde(default = "default_welcome_message")]
    pub welcome_message: String,

    /// Capacity of the session event broadcast channel.
    #[serde(default = "default_event_capacity")]
    pub event_capacity: usize,

    /// Optional TOML rule file replacing the built-in rule table.
    #[serde(default)]
    pub rules_path: Option<PathBuf>,
}

fn default_response_delay_ms() -> u64 {
    1500
}

fn default_clear_delay_ms() -> u64 {
    1000
}

fn default_welcome_message() -> String {
    DEFAULT_WELCOME_MESSAGE.to_string()
}

fn default_event_capacity() -> usize {
    256
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            response_delay_ms: default_response_delay_ms(),
            clear_delay_ms: default_clear_delay_ms(),
            welcome_message: default_welcome_message(),
            event_capacity: default_event_capacity(),
            rules_path: None,
        }
    }
}

impl AssistantConfig {
    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }

    pub fn clear_delay(&self) -> Duration {
        Duration::from_millis(self.clear_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assistant_config_default_values() {
        let config = AssistantConfig::default();
        assert_eq!(config.response_delay_ms, 1500);
        assert_eq!(config.clear_delay_ms, 1000);
        assert_eq!(config.event_capacity, 256);
        assert!(config.welcome_message.starts_with("Hello! I'm your TrustLens"));
        assert!(config.rules_path.is_none());
    }

    #[test]
    fn test_assistant_config_deserialize_with_defaults() {
        let config: AssistantConfig = toml::from_str("").unwrap();
        assert_eq!(config, AssistantConfig::default());
    }

    #[test]
    fn test_assistant_config_deserialize_with_values() {
        let toml_str = r#"
response_delay_ms = 250
clear_delay_ms = 0
welcome_message = "Hi."
rules_path = "/etc/trustlens/rules.toml"
"#;
        let config: AssistantConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.response_delay(), Duration::from_millis(250));
        assert_eq!(config.clear_delay(), Duration::ZERO);
        assert_eq!(config.welcome_message, "Hi.");
        assert_eq!(
            config.rules_path.as_deref(),
            Some(std::path::Path::new("/etc/trustlens/rules.toml"))
        );
        assert_eq!(config.event_capacity, 256);
    }
}
