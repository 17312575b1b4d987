//! Change notifications published by the session controller.
//!
//! All variants are Clone + Send + Sync for use with tokio broadcast channels.
//! The view layer re-reads the snapshot (or applies the event directly) on
//! every notification.

use serde::{Deserialize, Serialize};

use crate::message::ChatMessage;
use crate::session::SessionStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A message was appended to the end of the history.
    MessageAppended { message: ChatMessage },

    /// The whole history was replaced (new session, clear, clear completion).
    MessagesReplaced { messages: Vec<ChatMessage> },

    /// The session moved between states.
    StatusChanged {
        from: SessionStatus,
        to: SessionStatus,
    },

    /// The pending-input buffer changed.
    PendingInputChanged { text: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_changed_json_shape() {
        let event = SessionEvent::StatusChanged {
            from: SessionStatus::Idle,
            to: SessionStatus::AwaitingResponse,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "status_changed");
        assert_eq!(json["from"], "idle");
        assert_eq!(json["to"], "awaiting_response");
    }

    #[test]
    fn test_message_appended_carries_message() {
        let message = ChatMessage::user("hi");
        let event = SessionEvent::MessageAppended {
            message: message.clone(),
        };
        match event {
            SessionEvent::MessageAppended { message: m } => assert_eq!(m, message),
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
