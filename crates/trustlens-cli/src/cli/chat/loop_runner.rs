//! Main chat loop.
//!
//! Owns a [`SessionController`] for the lifetime of the terminal session and
//! drives it from readline input: plain lines are submitted, slash commands
//! map onto session operations. While the controller is busy a spinner runs
//! until it reports `Idle` again.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use uuid::Uuid;

use trustlens_core::chat::{IntentClassifier, SessionController};
use trustlens_types::config::AssistantConfig;
use trustlens_types::message::ChatMessage;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer::ChatRenderer;

/// Run the interactive chat until the user exits.
pub async fn run_chat_loop(
    config: &AssistantConfig,
    classifier: IntentClassifier,
) -> anyhow::Result<()> {
    print_welcome_banner(classifier.rules().len(), config.rules_path.is_some());

    let controller = SessionController::new(config, classifier);
    let renderer = ChatRenderer::new();
    for message in controller.messages() {
        renderer.print_message(&message);
    }

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, _writer) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    info!("Chat loop started");

    loop {
        let text = match chat_input.read_line().await {
            InputEvent::Eof => break,
            InputEvent::Interrupted => {
                println!("\n  {}", style("Press Ctrl+D to exit, or keep chatting.").dim());
                continue;
            }
            InputEvent::Line(text) => text,
        };

        if text.trim().is_empty() {
            continue;
        }

        if let Some(cmd) = commands::parse(&text) {
            match cmd {
                ChatCommand::Help => commands::print_help(),
                ChatCommand::New => match controller.new_session() {
                    Ok(()) => {
                        chat_input.clear_screen();
                        println!("  {}\n", style("Started a new chat.").dim());
                        renderer.print_history(&controller.messages());
                    }
                    Err(e) => println!("\n  {} {e}\n", style("!").yellow().bold()),
                },
                ChatCommand::Clear => match controller.clear() {
                    Ok(()) => {
                        wait_with_spinner(&controller).await?;
                        chat_input.clear_screen();
                        renderer.print_history(&controller.messages());
                    }
                    Err(e) => println!("\n  {} {e}\n", style("!").yellow().bold()),
                },
                ChatCommand::History => renderer.print_history(&controller.messages()),
                ChatCommand::Exit => break,
                ChatCommand::Unknown(name) => {
                    println!(
                        "\n  {} Unknown command: {}. Type /help for available commands.\n",
                        style("?").yellow().bold(),
                        style(name).dim()
                    );
                }
            }
            continue;
        }

        controller.set_pending_input(text);
        match controller.submit_pending() {
            Ok(message_id) => {
                wait_with_spinner(&controller).await?;
                for reply in replies_after(&controller.messages(), message_id) {
                    renderer.print_message(reply);
                }
            }
            Err(e) => println!("\n  {} {e}\n", style("!").yellow().bold()),
        }
    }

    controller.shutdown();
    chat_input.flush();
    println!("\n  {}", style("Session ended.").dim());
    Ok(())
}

/// Show a spinner until the controller is idle again.
async fn wait_with_spinner(controller: &SessionController) -> anyhow::Result<()> {
    if !controller.is_busy() {
        return Ok(());
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("  {spinner:.cyan} {msg}")?);
    spinner.set_message(spinner_message(controller));
    spinner.enable_steady_tick(Duration::from_millis(80));

    controller.wait_for_idle().await;

    spinner.finish_and_clear();
    Ok(())
}

fn spinner_message(controller: &SessionController) -> &'static str {
    if controller.is_clearing() {
        "clearing chat..."
    } else {
        "typing..."
    }
}

/// Messages that follow the one with `id`. Empty if `id` is no longer in the history.
fn replies_after(messages: &[ChatMessage], id: Uuid) -> &[ChatMessage] {
    match messages.iter().position(|message| message.id == id) {
        Some(index) => &messages[index + 1..],
        None => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trustlens_core::chat::builtin::CRIMINAL_LAW_RESPONSE;

    #[test]
    fn replies_after_returns_following_messages() {
        let messages = vec![
            ChatMessage::assistant("welcome"),
            ChatMessage::user("hi"),
            ChatMessage::assistant("reply"),
        ];
        let replies = replies_after(&messages, messages[1].id);
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].content, "reply");
    }

    #[test]
    fn replies_after_unknown_id_is_empty() {
        let messages = vec![ChatMessage::assistant("welcome")];
        assert!(replies_after(&messages, Uuid::now_v7()).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn spinner_message_follows_status() {
        let controller =
            SessionController::new(&AssistantConfig::default(), IntentClassifier::builtin());
        controller.submit("hello").unwrap();
        assert_eq!(spinner_message(&controller), "typing...");

        controller.clear().unwrap();
        assert_eq!(spinner_message(&controller), "clearing chat...");

        wait_with_spinner(&controller).await.unwrap();
        assert!(!controller.is_busy());
    }

    #[tokio::test(start_paused = true)]
    async fn submitted_line_gets_one_reply_once_idle() {
        let controller =
            SessionController::new(&AssistantConfig::default(), IntentClassifier::builtin());
        controller.set_pending_input("Tell me about criminal law");
        let id = controller.submit_pending().unwrap();

        controller.wait_for_idle().await;

        let messages = controller.messages();
        let replies = replies_after(&messages, id);
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].content, CRIMINAL_LAW_RESPONSE);
    }
}
