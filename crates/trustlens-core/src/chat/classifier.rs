//! Rule-based intent classifier.
//!
//! Maps raw user input to a fixed response using an ordered rule table.
//! Input is trimmed and lower-cased; the first rule with a trigger contained
//! in the normalized input wins. When nothing matches, the fallback asking
//! for clarification is returned. Classification is pure and total.

use trustlens_types::error::ConfigError;
use trustlens_types::rule::{Rule, RuleFile};

use super::builtin::{builtin_rules, FALLBACK_RESPONSE};

/// Result of classifying one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification<'a> {
    /// Index of the matching rule in priority order, `None` for the fallback.
    pub rule_index: Option<usize>,
    pub response: &'a str,
}

impl Classification<'_> {
    pub fn is_fallback(&self) -> bool {
        self.rule_index.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentClassifier {
    rules: Vec<Rule>,
    fallback: String,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::builtin()
    }
}

impl IntentClassifier {
    /// Build a classifier from an ordered rule list.
    ///
    /// Triggers are trimmed and lower-cased so matching stays case-insensitive.
    /// Rejects empty tables, rules without triggers, blank triggers, and blank
    /// responses.
    pub fn new(rules: Vec<Rule>, fallback: impl Into<String>) -> Result<Self, ConfigError> {
        if rules.is_empty() {
            return Err(ConfigError::EmptyRuleTable);
        }

        let fallback = fallback.into();
        if fallback.trim().is_empty() {
            return Err(ConfigError::BlankFallback);
        }

        let mut normalized_rules = Vec::with_capacity(rules.len());
        for (index, rule) in rules.into_iter().enumerate() {
            if rule.triggers.is_empty() {
                return Err(ConfigError::NoTriggers { index });
            }
            if rule.response.trim().is_empty() {
                return Err(ConfigError::BlankResponse { index });
            }

            let mut triggers = Vec::with_capacity(rule.triggers.len());
            for trigger in &rule.triggers {
                let trigger = normalize(trigger);
                if trigger.is_empty() {
                    return Err(ConfigError::BlankTrigger { index });
                }
                triggers.push(trigger);
            }

            normalized_rules.push(Rule {
                triggers,
                response: rule.response,
            });
        }

        Ok(Self {
            rules: normalized_rules,
            fallback,
        })
    }

    /// The built-in legal-assistant rule table.
    pub fn builtin() -> Self {
        Self {
            rules: builtin_rules(),
            fallback: FALLBACK_RESPONSE.to_string(),
        }
    }

    /// Build from a deserialized rule file. A missing fallback uses the built-in text.
    pub fn from_rule_file(file: RuleFile) -> Result<Self, ConfigError> {
        let fallback = file
            .fallback
            .unwrap_or_else(|| FALLBACK_RESPONSE.to_string());
        Self::new(file.rules, fallback)
    }

    /// Response text for `input`.
    pub fn classify(&self, input: &str) -> &str {
        self.classify_rule(input).response
    }

    /// Response text for `input` together with the index of the rule that fired.
    pub fn classify_rule(&self, input: &str) -> Classification<'_> {
        let normalized = normalize(input);

        match self
            .rules
            .iter()
            .position(|rule| rule.matches(&normalized))
        {
            Some(index) => Classification {
                rule_index: Some(index),
                response: &self.rules[index].response,
            },
            None => Classification {
                rule_index: None,
                response: &self.fallback,
            },
        }
    }

    /// Rules in priority order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}
