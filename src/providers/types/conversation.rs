use super::message::Message;

/// Ordered history of a session. Callers can only append; the agent may drop
/// the turns it added itself when a completion fails.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_system_prompt(prompt: &str) -> Self {
        let mut conversation = Self::new();
        conversation.add_message(Message::system(prompt));
        conversation
    }

    pub fn add_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn extend<I: IntoIterator<Item = Message>>(&mut self, messages: I) {
        self.messages.extend(messages);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drop everything appended after `len` messages
    pub(crate) fn rollback_to(&mut self, len: usize) {
        self.messages.truncate(len);
    }
}
