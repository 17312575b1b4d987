//! One-shot question answering: `tlens ask <text>`.

use anyhow::Result;
use console::style;
use serde::Serialize;

use trustlens_core::chat::IntentClassifier;

/// JSON shape printed by `tlens ask --json`.
#[derive(Debug, Serialize, PartialEq)]
pub struct AskOutput<'a> {
    pub input: &'a str,
    /// 1-based position in the rule table, `None` for the fallback.
    pub rule: Option<usize>,
    pub fallback: bool,
    pub response: &'a str,
}

pub fn answer<'a>(classifier: &'a IntentClassifier, text: &'a str) -> AskOutput<'a> {
    let classification = classifier.classify_rule(text);
    AskOutput {
        input: text,
        rule: classification.rule_index.map(|index| index + 1),
        fallback: classification.is_fallback(),
        response: classification.response,
    }
}

/// Classify `text` and print the reply.
pub fn ask(classifier: &IntentClassifier, text: &str, json: bool) -> Result<()> {
    if text.trim().is_empty() {
        anyhow::bail!("Nothing to ask: the question is blank");
    }

    let output = answer(classifier, text);

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!();
    println!("  {} {}", style("TrustLens >").cyan().bold(), output.response);
    if output.fallback {
        println!(
            "  {}",
            style("(no rule matched; run `tlens rules` to see what I understand)").dim()
        );
    }
    println!();
    Ok(())
}
