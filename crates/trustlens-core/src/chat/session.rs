//! Session controller for the assistant chat.
//!
//! `SessionController` owns the single live session (history, status,
//! pending input) and is the only thing allowed to mutate it. It exposes the
//! operations the view layer calls (`submit`, `new_session`, `clear`) and the
//! observable state it renders (snapshot, status, busy signals, events).
//!
//! State machine:
//!
//! ```text
//! Idle --submit--> AwaitingResponse --reply--> Idle
//! Idle | AwaitingResponse --new_session--> Idle
//! Idle | AwaitingResponse --clear--> Clearing --clear delay--> Idle
//! ```
//!
//! Every other transition is rejected with a [`SessionError`] and leaves the
//! session untouched. Delayed work is tagged with the session generation at
//! scheduling time; `new_session` and `clear` bump the generation, so a reply
//! or clear completion scheduled for an older generation is a no-op even if
//! its timer already fired.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use tokio::sync::broadcast;
use tracing::{debug, info};
use uuid::Uuid;

use trustlens_types::config::AssistantConfig;
use trustlens_types::error::SessionError;
use trustlens_types::event::SessionEvent;
use trustlens_types::message::ChatMessage;
use trustlens_types::session::{SessionSnapshot, SessionStatus};

use super::classifier::IntentClassifier;
use super::scheduler::{ResponseScheduler, ScheduledTask};
use super::store::MessageStore;
use crate::event::EventBus;

#[derive(Debug)]
struct SessionState {
    store: MessageStore,
    status: SessionStatus,
    pending_input: String,
    generation: u64,
    outstanding: Option<ScheduledTask>,
}

struct Shared {
    state: Mutex<SessionState>,
    classifier: IntentClassifier,
    scheduler: ResponseScheduler,
    events: EventBus,
    welcome_message: String,
    response_delay: Duration,
    clear_delay: Duration,
}

/// Handle to the live chat session. Clones share the same session.
#[derive(Clone)]
pub struct SessionController {
    shared: Arc<Shared>,
}

impl SessionController {
    /// Create a controller whose session holds exactly the welcome message.
    pub fn new(config: &AssistantConfig, classifier: IntentClassifier) -> Self {
        let welcome = ChatMessage::assistant(config.welcome_message.clone());
        let state = SessionState {
            store: MessageStore::with_messages(vec![welcome]),
            status: SessionStatus::Idle,
            pending_input: String::new(),
            generation: 0,
            outstanding: None,
        };

        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(state),
                classifier,
                scheduler: ResponseScheduler::new(),
                events: EventBus::new(config.event_capacity),
                welcome_message: config.welcome_message.clone(),
                response_delay: config.response_delay(),
                clear_delay: config.clear_delay(),
            }),
        }
    }

    /// Submit user text. Returns the id of the appended user message.
    ///
    /// The reply is appended after the configured response delay. Rejected
    /// while a reply is pending, while clearing, and for blank input.
    pub fn submit(&self, text: &str) -> Result<Uuid, SessionError> {
        if text.trim().is_empty() {
            debug!("Rejected blank submission");
            return Err(SessionError::EmptyInput);
        }

        let shared = &self.shared;
        let mut state = shared.lock();
        if let Some(err) = SessionError::for_status(state.status) {
            debug!(status = %state.status, "Rejected submission");
            return Err(err);
        }

        let message = ChatMessage::user(text);
        let message_id = message.id;
        shared.append(&mut state, message);
        shared.set_pending(&mut state, String::new());
        shared.set_status(&mut state, SessionStatus::AwaitingResponse);

        let generation = state.generation;
        let weak = Arc::downgrade(shared);
        let prompt = text.to_string();
        let task = shared
            .scheduler
            .schedule(shared.response_delay, move || {
                if let Some(shared) = Weak::upgrade(&weak) {
                    shared.complete_response(generation, &prompt);
                }
            });
        state.outstanding = Some(task);

        debug!(%message_id, generation, "User message accepted");
        Ok(message_id)
    }

    /// Submit whatever is in the pending-input buffer.
    pub fn submit_pending(&self) -> Result<Uuid, SessionError> {
        let text = self.pending_input();
        self.submit(&text)
    }

    /// Replace the pending-input buffer (the text box contents).
    pub fn set_pending_input(&self, text: impl Into<String>) {
        let mut state = self.shared.lock();
        self.shared.set_pending(&mut state, text.into());
    }

    /// Start over with a fresh welcome message.
    ///
    /// Any pending reply is dropped. Rejected while clearing.
    pub fn new_session(&self) -> Result<(), SessionError> {
        let shared = &self.shared;
        let mut state = shared.lock();
        if state.status == SessionStatus::Clearing {
            debug!("Rejected new session while clearing");
            return Err(SessionError::Clearing);
        }

        shared.invalidate_outstanding(&mut state);
        shared.replace_history(&mut state, vec![shared.welcome()]);
        shared.set_pending(&mut state, String::new());
        shared.set_status(&mut state, SessionStatus::Idle);

        info!(generation = state.generation, "New chat session started");
        Ok(())
    }

    /// Wipe the history now and seed a fresh welcome message after the clear delay.
    ///
    /// Any pending reply is dropped. Rejected while already clearing.
    pub fn clear(&self) -> Result<(), SessionError> {
        let shared = &self.shared;
        let mut state = shared.lock();
        if state.status == SessionStatus::Clearing {
            debug!("Rejected clear while clearing");
            return Err(SessionError::Clearing);
        }

        shared.invalidate_outstanding(&mut state);
        shared.wipe_history(&mut state);
        shared.set_status(&mut state, SessionStatus::Clearing);

        let generation = state.generation;
        let weak = Arc::downgrade(shared);
        let task = shared.scheduler.schedule(shared.clear_delay, move || {
            if let Some(shared) = Weak::upgrade(&weak) {
                shared.complete_clear(generation);
            }
        });
        state.outstanding = Some(task);

        info!(generation, "Chat session clearing");
        Ok(())
    }

    /// Cancel all outstanding delayed work and settle the session in `Idle`.
    ///
    /// A pending reply is dropped. An unfinished clear completes immediately,
    /// so the history is never left empty.
    pub fn shutdown(&self) {
        let shared = &self.shared;
        let mut state = shared.lock();
        shared.invalidate_outstanding(&mut state);
        shared.scheduler.cancel_all();

        if state.status == SessionStatus::Clearing {
            shared.replace_history(&mut state, vec![shared.welcome()]);
            shared.set_pending(&mut state, String::new());
        }
        shared.set_status(&mut state, SessionStatus::Idle);
        debug!(generation = state.generation, "Session controller shut down");
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.shared.lock();
        SessionSnapshot {
            messages: state.store.snapshot(),
            status: state.status,
            pending_input: state.pending_input.clone(),
        }
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.shared.lock().store.snapshot()
    }

    pub fn message_count(&self) -> usize {
        self.shared.lock().store.len()
    }

    pub fn status(&self) -> SessionStatus {
        self.shared.lock().status
    }

    pub fn pending_input(&self) -> String {
        self.shared.lock().pending_input.clone()
    }

    /// Counter bumped every time the history is replaced by `new_session` or `clear`.
    pub fn generation(&self) -> u64 {
        self.shared.lock().generation
    }

    pub fn is_busy(&self) -> bool {
        self.status() != SessionStatus::Idle
    }

    /// Whether the typing indicator should be shown.
    pub fn is_typing(&self) -> bool {
        self.status() == SessionStatus::AwaitingResponse
    }

    pub fn is_clearing(&self) -> bool {
        self.status() == SessionStatus::Clearing
    }

    /// Whether the text box should accept input.
    pub fn input_enabled(&self) -> bool {
        self.status() == SessionStatus::Idle
    }

    /// Whether the send button should be enabled.
    pub fn can_send(&self) -> bool {
        let state = self.shared.lock();
        state.status == SessionStatus::Idle && !state.pending_input.trim().is_empty()
    }

    /// Whether the clear button should be enabled.
    pub fn can_clear(&self) -> bool {
        self.status() != SessionStatus::Clearing
    }

    pub fn classifier(&self) -> &IntentClassifier {
        &self.shared.classifier
    }

    /// Receive every future change to the session.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.shared.events.subscribe()
    }

    /// Resolve once the session is `Idle`.
    pub async fn wait_for_idle(&self) {
        let mut rx = self.subscribe();
        loop {
            if self.status() == SessionStatus::Idle {
                return;
            }
            match rx.recv().await {
                Ok(_) | Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => return,
            }
        }
    }
}

impl std::fmt::Debug for SessionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.shared.lock();
        f.debug_struct("SessionController")
            .field("status", &state.status)
            .field("message_count", &state.store.len())
            .field("generation", &state.generation)
            .field("subscribers", &self.shared.events.subscriber_count())
            .finish()
    }
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn welcome(&self) -> ChatMessage {
        ChatMessage::assistant(self.welcome_message.clone())
    }

    fn append(&self, state: &mut SessionState, message: ChatMessage) {
        state.store.append(message.clone());
        self.events.publish(SessionEvent::MessageAppended { message });
    }

    fn replace_history(&self, state: &mut SessionState, messages: Vec<ChatMessage>) {
        state.store.replace_all(messages.clone());
        self.events.publish(SessionEvent::MessagesReplaced { messages });
    }

    fn wipe_history(&self, state: &mut SessionState) {
        state.store.clear();
        self.events.publish(SessionEvent::MessagesReplaced {
            messages: Vec::new(),
        });
    }

    fn set_pending(&self, state: &mut SessionState, text: String) {
        if state.pending_input != text {
            state.pending_input = text.clone();
            self.events.publish(SessionEvent::PendingInputChanged { text });
        }
    }

    fn set_status(&self, state: &mut SessionState, to: SessionStatus) {
        let from = state.status;
        if from != to {
            state.status = to;
            self.events.publish(SessionEvent::StatusChanged { from, to });
        }
    }

    /// Cancel the outstanding task and move to a new generation.
    fn invalidate_outstanding(&self, state: &mut SessionState) {
        if let Some(task) = state.outstanding.take() {
            task.cancel();
            debug!(
                task_id = task.id(),
                already_fired = task.is_finished(),
                "Outstanding task cancelled"
            );
        }
        state.generation += 1;
    }

    fn complete_response(&self, generation: u64, prompt: &str) {
        let mut state = self.lock();
        if state.generation != generation || state.status != SessionStatus::AwaitingResponse {
            debug!(
                generation,
                current = state.generation,
                "Stale response suppressed"
            );
            return;
        }

        let classification = self.classifier.classify_rule(prompt);
        debug!(rule = ?classification.rule_index, "Prompt classified");
        let reply = ChatMessage::assistant(classification.response);

        state.outstanding = None;
        self.append(&mut state, reply);
        self.set_status(&mut state, SessionStatus::Idle);
    }

    fn complete_clear(&self, generation: u64) {
        let mut state = self.lock();
        if state.generation != generation || state.status != SessionStatus::Clearing {
            debug!(
                generation,
                current = state.generation,
                "Stale clear completion suppressed"
            );
            return;
        }

        state.outstanding = None;
        let welcome = self.welcome();
        self.replace_history(&mut state, vec![welcome]);
        self.set_pending(&mut state, String::new());
        self.set_status(&mut state, SessionStatus::Idle);
        info!(generation, "Chat session cleared");
    }
}

impl Drop for Shared {
    fn drop(&mut self) {
        self.scheduler.cancel_all();
    }
}
