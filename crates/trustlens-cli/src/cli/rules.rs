//! Rule table listing: `tlens rules`.

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use serde::Serialize;

use trustlens_core::chat::IntentClassifier;
use trustlens_types::rule::Rule;

const PREVIEW_CHARS: usize = 72;

#[derive(Debug, Serialize)]
struct RulesOutput<'a> {
    rules: &'a [Rule],
    fallback: &'a str,
}

/// Print every rule in evaluation order followed by the fallback reply.
pub fn list_rules(classifier: &IntentClassifier, json: bool) -> Result<()> {
    if json {
        let output = RulesOutput {
            rules: classifier.rules(),
            fallback: classifier.fallback(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!();
    println!("{}", build_table(classifier));
    println!();
    Ok(())
}

fn build_table(classifier: &IntentClassifier) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#").fg(Color::White),
        Cell::new("Triggers").fg(Color::White),
        Cell::new("Response").fg(Color::White),
    ]);

    for (index, rule) in classifier.rules().iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(rule.triggers.join(", ")).fg(Color::Cyan),
            Cell::new(preview(&rule.response)),
        ]);
    }

    table.add_row(vec![
        Cell::new("-"),
        Cell::new("(fallback)").fg(Color::DarkGrey),
        Cell::new(preview(classifier.fallback())),
    ]);

    table
}

/// First line of `text`, cut to `PREVIEW_CHARS` characters.
fn preview(text: &str) -> String {
    let first_line = text.lines().next().unwrap_or_default();
    if first_line.chars().count() > PREVIEW_CHARS {
        let cut: String = first_line.chars().take(PREVIEW_CHARS - 3).collect();
        format!("{cut}...")
    } else {
        first_line.to_string()
    }
}
