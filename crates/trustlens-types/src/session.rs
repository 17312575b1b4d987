//! Session status and snapshot types.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::message::ChatMessage;

/// Lifecycle status of the live chat session.
///
/// The view layer treats anything other than `Idle` as "busy" and disables
/// its input controls; the controller enforces the same rules independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    Idle,
    /// A user message was accepted and its reply has not been appended yet.
    AwaitingResponse,
    /// History was wiped and the fresh welcome message is pending.
    Clearing,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionStatus::Idle => write!(f, "idle"),
            SessionStatus::AwaitingResponse => write!(f, "awaiting_response"),
            SessionStatus::Clearing => write!(f, "clearing"),
        }
    }
}

impl FromStr for SessionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "idle" => Ok(SessionStatus::Idle),
            "awaiting_response" => Ok(SessionStatus::AwaitingResponse),
            "clearing" => Ok(SessionStatus::Clearing),
            other => Err(format!("invalid session status: '{other}'")),
        }
    }
}

/// Everything the view layer reads after a change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub messages: Vec<ChatMessage>,
    pub status: SessionStatus,
    pub pending_input: String,
}

impl SessionSnapshot {
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub fn is_busy(&self) -> bool {
        self.status != SessionStatus::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_status_display_roundtrip() {
        for status in [
            SessionStatus::Idle,
            SessionStatus::AwaitingResponse,
            SessionStatus::Clearing,
        ] {
            let parsed: SessionStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_session_status_invalid() {
        assert!("thinking".parse::<SessionStatus>().is_err());
    }

    #[test]
    fn test_session_status_default_is_idle() {
        assert_eq!(SessionStatus::default(), SessionStatus::Idle);
    }

    #[test]
    fn test_snapshot_busy_flag() {
        let snapshot = SessionSnapshot {
            messages: vec![ChatMessage::assistant("welcome")],
            status: SessionStatus::Clearing,
            pending_input: String::new(),
        };
        assert!(snapshot.is_busy());
        assert_eq!(snapshot.message_count(), 1);
    }
}
