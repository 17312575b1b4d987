//! Assistant chat session engine.
//!
//! Leaves first: `store` (ordered history), `classifier` (rule table),
//! `scheduler` (delayed tasks with cancellation), and `session` (the state
//! machine consumed by the view layer).

pub mod builtin;
pub mod classifier;
pub mod scheduler;
pub mod session;
pub mod store;

pub use classifier::{Classification, IntentClassifier};
pub use scheduler::{ResponseScheduler, ScheduledTask};
pub use session::SessionController;
pub use store::MessageStore;
