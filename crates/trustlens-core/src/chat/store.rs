//! Ordered message log for a single session.
//!
//! Insertion order is display order. The store is a plain data structure:
//! it never notifies anyone about changes; the session controller publishes
//! events after mutating it.

use trustlens_types::message::ChatMessage;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageStore {
    messages: Vec<ChatMessage>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the given messages.
    pub fn with_messages(messages: Vec<ChatMessage>) -> Self {
        Self { messages }
    }

    /// Append a message at the end of the history.
    pub fn append(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Replace the entire history in one step.
    pub fn replace_all(&mut self, messages: Vec<ChatMessage>) {
        self.messages = messages;
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Owned copy of the current history, oldest first.
    pub fn snapshot(&self) -> Vec<ChatMessage> {
        self.messages.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let mut store = MessageStore::new();
        store.append(ChatMessage::assistant("welcome"));
        store.append(ChatMessage::user("hello"));
        store.append(ChatMessage::assistant("hi"));

        let contents: Vec<&str> = store.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["welcome", "hello", "hi"]);
        assert_eq!(store.last().map(|m| m.content.as_str()), Some("hi"));
    }

    #[test]
    fn test_replace_all_discards_previous_history() {
        let mut store = MessageStore::with_messages(vec![
            ChatMessage::user("a"),
            ChatMessage::user("b"),
        ]);
        let fresh = ChatMessage::assistant("fresh");
        store.replace_all(vec![fresh.clone()]);

        assert_eq!(store.len(), 1);
        assert_eq!(store.snapshot(), vec![fresh]);
    }

    #[test]
    fn test_clear_empties_store() {
        let mut store = MessageStore::with_messages(vec![ChatMessage::user("a")]);
        store.clear();
        assert!(store.is_empty());
        assert!(store.last().is_none());
    }

    #[test]
    fn test_snapshot_is_detached_copy() {
        let mut store = MessageStore::with_messages(vec![ChatMessage::user("a")]);
        let snapshot = store.snapshot();
        store.append(ChatMessage::assistant("b"));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.len(), 2);
    }
}
