use std::path::PathBuf;

use thiserror::Error;

use crate::session::SessionStatus;

/// Reasons the session controller refuses an operation.
///
/// A rejected operation never changes the session. Callers that only care
/// about the visible state may ignore these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("input is empty")]
    EmptyInput,

    #[error("a response is still pending")]
    ResponsePending,

    #[error("the session is being cleared")]
    Clearing,
}

impl SessionError {
    /// Rejection caused by the session being in `status`, if any.
    pub fn for_status(status: SessionStatus) -> Option<Self> {
        match status {
            SessionStatus::Idle => None,
            SessionStatus::AwaitingResponse => Some(SessionError::ResponsePending),
            SessionStatus::Clearing => Some(SessionError::Clearing),
        }
    }
}

/// Errors from loading configuration or rule files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("rule table is empty")]
    EmptyRuleTable,

    #[error("rule {index} has no triggers")]
    NoTriggers { index: usize },

    #[error("rule {index} has a blank trigger")]
    BlankTrigger { index: usize },

    #[error("rule {index} has a blank response")]
    BlankResponse { index: usize },

    #[error("fallback response is blank")]
    BlankFallback,
}
