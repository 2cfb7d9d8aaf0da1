use crate::message::Message;

/// Ordered history of user/assistant messages for one session.
///
/// Append-only: the request pipeline only ever reads a suffix view of the
/// sequence ([`Transcript::window`]); entries are added by the shell when
/// an exchange completes and removed only by an explicit [`Transcript::clear`].
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Record one completed exchange: the user message followed by the
    /// assistant reply, in that order.
    pub fn commit_exchange(
        &mut self,
        user_text: impl Into<String>,
        assistant_text: impl Into<String>,
    ) {
        self.messages.push(Message::user(user_text));
        self.messages.push(Message::assistant(assistant_text));
    }

    /// Drop the whole history. Explicit user action only.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// The last `min(k, len)` messages, oldest first. Never mutates the
    /// transcript; `k == 0` yields an empty window.
    pub fn window(&self, k: usize) -> &[Message] {
        let start = self.messages.len().saturating_sub(k);
        &self.messages[start..]
    }
}
