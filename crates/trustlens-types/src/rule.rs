//! Intent rule definitions.
//!
//! A rule pairs one or more trigger phrases with a fixed response. Rules are
//! evaluated in table order and the first one with a matching trigger wins.
//! The on-disk form is a TOML file:
//!
//! ```toml
//! fallback = "Could you rephrase that?"
//!
//! [[rules]]
//! triggers = ["hello"]
//! response = "Hello there!"
//! ```

use serde::{Deserialize, Serialize};

/// A single (triggers, response) entry of the rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Phrases matched as case-insensitive substrings of the input.
    pub triggers: Vec<String>,
    /// Text returned when any trigger matches.
    pub response: String,
}

impl Rule {
    pub fn new<I, S>(triggers: I, response: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            triggers: triggers.into_iter().map(Into::into).collect(),
            response: response.into(),
        }
    }

    /// Whether any trigger occurs in `normalized` (already trimmed and lower-cased).
    pub fn matches(&self, normalized: &str) -> bool {
        self.triggers
            .iter()
            .any(|trigger| normalized.contains(trigger.as_str()))
    }
}

/// Deserialized shape of a rule file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleFile {
    /// Response used when no rule matches. Falls back to the built-in text when absent.
    #[serde(default)]
    pub fallback: Option<String>,
    #[serde(default)]
    pub rules: Vec<Rule>,
}
