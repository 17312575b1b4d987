//! Configuration and rule-table loading.
//!
//! Reads `config.toml` from the data directory (`~/.trustlens/` unless
//! `TRUSTLENS_HOME` points elsewhere) into [`AssistantConfig`]. A missing or
//! malformed config falls back to defaults. The rule file named by
//! `rules_path` is stricter: any problem with it is an error, because a typo
//! there should not silently swap in the built-in table.

use std::path::{Path, PathBuf};

use trustlens_types::config::AssistantConfig;
use trustlens_types::error::ConfigError;
use trustlens_types::rule::RuleFile;

use crate::chat::IntentClassifier;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "TRUSTLENS_HOME";

const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolve the data directory: `$TRUSTLENS_HOME`, else `~/.trustlens`, else `./.trustlens`.
pub fn default_data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|value| !value.is_empty()) {
        return PathBuf::from(dir);
    }

    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".trustlens")
}

/// Path of `config.toml` inside `data_dir`.
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CONFIG_FILE_NAME)
}

/// Load the assistant configuration from `config_path`.
///
/// - If the file does not exist, returns [`AssistantConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and returns the default.
/// - A relative `rules_path` is resolved against the config file's directory.
pub async fn load_assistant_config(config_path: &Path) -> AssistantConfig {
    let content = match tokio::fs::read_to_string(config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(
                "No config found at {}, using defaults",
                config_path.display()
            );
            return AssistantConfig::default();
        }
        Err(err) => {
            tracing::warn!(
                "Failed to read {}: {err}, using defaults",
                config_path.display()
            );
            return AssistantConfig::default();
        }
    };

    let mut config = match toml::from_str::<AssistantConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            return AssistantConfig::default();
        }
    };

    if let Some(rules_path) = config.rules_path.take() {
        let resolved = if rules_path.is_relative() {
            config_path
                .parent()
                .map(|dir| dir.join(&rules_path))
                .unwrap_or(rules_path)
        } else {
            rules_path
        };
        config.rules_path = Some(resolved);
    }

    config
}

/// Load and validate a TOML rule file.
pub async fn load_rule_file(path: &Path) -> Result<IntentClassifier, ConfigError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let file: RuleFile = toml::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;

    let classifier = IntentClassifier::from_rule_file(file)?;
    tracing::info!(
        rules = classifier.rules().len(),
        "Loaded rule table from {}",
        path.display()
    );
    Ok(classifier)
}

/// The classifier selected by `config`: the rule file when configured, else the built-in table.
pub async fn load_classifier(config: &AssistantConfig) -> Result<IntentClassifier, ConfigError> {
    match &config.rules_path {
        Some(path) => load_rule_file(path).await,
        None => Ok(IntentClassifier::builtin()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const RULES: &str = r#"
fallback = "Say again?"

[[rules]]
triggers = ["Refund"]
response = "Refunds take five business days."
"#;

    #[tokio::test]
    async fn load_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_assistant_config(&config_path(tmp.path())).await;
        assert_eq!(config, AssistantConfig::default());
    }

    #[tokio::test]
    async fn load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let path = config_path(tmp.path());
        tokio::fs::write(&path, "response_delay_ms = 20\nclear_delay_ms = 5\n")
            .await
            .unwrap();

        let config = load_assistant_config(&path).await;
        assert_eq!(config.response_delay_ms, 20);
        assert_eq!(config.clear_delay_ms, 5);
        assert!(config.rules_path.is_none());
    }

    #[tokio::test]
    async fn load_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let path = config_path(tmp.path());
        tokio::fs::write(&path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_assistant_config(&path).await;
        assert_eq!(config, AssistantConfig::default());
    }

    #[tokio::test]
    async fn load_config_resolves_relative_rules_path() {
        let tmp = TempDir::new().unwrap();
        let path = config_path(tmp.path());
        tokio::fs::write(&path, "rules_path = \"rules.toml\"\n")
            .await
            .unwrap();

        let config = load_assistant_config(&path).await;
        assert_eq!(config.rules_path, Some(tmp.path().join("rules.toml")));
    }

    #[tokio::test]
    async fn load_rule_file_builds_classifier() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("rules.toml");
        tokio::fs::write(&path, RULES).await.unwrap();

        let classifier = load_rule_file(&path).await.unwrap();
        assert_eq!(
            classifier.classify("what is the refund window"),
            "Refunds take five business days."
        );
        assert_eq!(classifier.classify("hello"), "Say again?");
    }

    #[tokio::test]
    async fn load_rule_file_missing_is_error() {
        let tmp = TempDir::new().unwrap();
        let err = load_rule_file(&tmp.path().join("nope.toml"))
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[tokio::test]
    async fn load_rule_file_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("rules.toml");
        tokio::fs::write(&path, "[[rules]\ntriggers = ").await.unwrap();

        let err = load_rule_file(&path).await.unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[tokio::test]
    async fn load_rule_file_empty_table_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("rules.toml");
        tokio::fs::write(&path, "fallback = \"x\"\n").await.unwrap();

        let err = load_rule_file(&path).await.unwrap_err();
        assert!(matches!(err, ConfigError::EmptyRuleTable));
    }

    #[tokio::test]
    async fn load_classifier_defaults_to_builtin() {
        let classifier = load_classifier(&AssistantConfig::default()).await.unwrap();
        assert_eq!(classifier, IntentClassifier::builtin());
    }

    #[tokio::test]
    async fn load_classifier_uses_configured_rule_file() {
        let tmp = TempDir::new().unwrap();
        let rules_path = tmp.path().join("rules.toml");
        tokio::fs::write(&rules_path, RULES).await.unwrap();

        let config = AssistantConfig {
            rules_path: Some(rules_path),
            ..AssistantConfig::default()
        };
        let classifier = load_classifier(&config).await.unwrap();
        assert_eq!(classifier.rules().len(), 1);
        assert_eq!(classifier.rules()[0].triggers, vec!["refund"]);
    }
}
