//! Interactive terminal chat for the TrustLens assistant.
//!
//! Slash commands, a typing spinner while the assistant "thinks", markdown
//! rendering of replies and the welcome banner. Entry point:
//! `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;
