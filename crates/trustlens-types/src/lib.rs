//! Shared domain types for the TrustLens assistant.
//!
//! This crate contains the types the session engine and its callers agree on:
//! chat messages, session status and snapshots, rule definitions, session
//! events, configuration, and the associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod config;
pub mod error;
pub mod event;
pub mod message;
pub mod rule;
pub mod session;
