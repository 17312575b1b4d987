//! Terminal rendering of chat messages.
//!
//! Assistant replies are markdown (the built-in responses use `**bold**`
//! headings and bullet lists) and go through `termimad`. User lines are
//! echoed plain.

use console::style;
use termimad::crossterm::style::Color;
use termimad::MadSkin;

use trustlens_types::message::{ChatMessage, MessageRole};

pub struct ChatRenderer {
    skin: MadSkin,
}

impl Default for ChatRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatRenderer {
    pub fn new() -> Self {
        let mut skin = MadSkin::default_dark();
        skin.bold.set_fg(Color::Cyan);
        skin.bullet.set_fg(Color::Cyan);
        skin.inline_code.set_fg(Color::Yellow);
        Self { skin }
    }

    /// Render markdown to a string with terminal escapes.
    pub fn render_markdown(&self, markdown: &str) -> String {
        self.skin.term_text(markdown).to_string()
    }

    /// Print one message with its role label and time.
    pub fn print_message(&self, message: &ChatMessage) {
        let time = style(message.time_label()).dim();
        match message.role {
            MessageRole::User => {
                println!("  {} {}  {}", style("You").green().bold(), time, message.content);
            }
            MessageRole::Assistant => {
                println!("  {} {}", style("TrustLens").cyan().bold(), time);
                for line in self.render_markdown(&message.content).lines() {
                    println!("  {line}");
                }
                for citation in &message.citations {
                    println!(
                        "  {} {} ({})",
                        style("›").dim(),
                        style(&citation.text).italic(),
                        style(&citation.source).dim()
                    );
                }
            }
        }
        println!();
    }

    pub fn print_history(&self, messages: &[ChatMessage]) {
        println!();
        if messages.is_empty() {
            println!("  {}", style("(no messages)").dim());
            println!();
            return;
        }
        for message in messages {
            self.print_message(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_keeps_text() {
        let renderer = ChatRenderer::new();
        let rendered = renderer.render_markdown("**Criminal Law** covers offences");
        assert!(rendered.contains("Criminal Law"));
        assert!(rendered.contains("covers offences"));
        assert!(!rendered.contains("**"));
    }

    #[test]
    fn render_plain_text_is_unchanged_in_content() {
        let renderer = ChatRenderer::default();
        assert!(renderer.render_markdown("hello").contains("hello"));
    }
}
