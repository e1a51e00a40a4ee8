//! Ordered message history

use super::Message;
use serde::Serialize;

/// Append-only message list, emptied only by [`ConversationStore::clear`].
///
/// The order of `all()` is display order and also the context order handed
/// to the agent. There is no size cap.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ConversationStore {
    messages: Vec<Message>,
}

impl ConversationStore {
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[allow(dead_code)] // API completeness
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_duplicates() {
        let mut store = ConversationStore::default();
        store.append(Message::user("same"));
        store.append(Message::user("same"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_clear_after_four_messages() {
        let mut store = ConversationStore::default();
        store.append(Message::user("Q1"));
        store.append(Message::assistant("A1"));
        store.append(Message::user("Q2"));
        store.append(Message::assistant("A2"));
        assert_eq!(store.len(), 4);

        store.clear();
        assert!(store.is_empty());
        assert!(store.all().is_empty());
    }
}
