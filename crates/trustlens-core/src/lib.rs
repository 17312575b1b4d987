//! Session engine for the TrustLens assistant.
//!
//! This crate holds the only stateful part of the assistant: the ordered
//! message history, the rule-based intent classifier, the delayed-task
//! scheduler, and the `SessionController` state machine that ties them
//! together. It depends only on `trustlens-types` and never performs network
//! I/O; the only file access is configuration loading.

pub mod chat;
pub mod config;
pub mod event;
