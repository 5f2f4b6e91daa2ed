//! Conversation state for the study assistant.
//!
//! DESIGN
//! ======
//! The transcript lives in memory for the duration of the tab. The server
//! keeps its own conversation context per user, so `clear` has to reset both
//! sides; the page calls the API first and empties this buffer on success.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::Resource;

/// Who produced a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatAuthor {
    User,
    Assistant,
}

/// One transcript entry.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    /// Render key, stable across re-renders.
    pub id: String,
    pub author: ChatAuthor,
    /// Raw message text; assistant bodies are markdown.
    pub body: String,
    /// Resources the assistant recommended alongside this reply.
    pub resources: Vec<Resource>,
}

/// Assistant transcript plus in-flight bookkeeping.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    /// True while a reply is outstanding; blocks double sends.
    pub pending: bool,
}

impl ChatState {
    /// Append the user's outgoing message and mark a reply as outstanding.
    pub fn push_user_message(&mut self, body: String) {
        self.messages.push(ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            author: ChatAuthor::User,
            body,
            resources: Vec::new(),
        });
        self.pending = true;
    }

    /// Append the assistant's reply and settle the outstanding request.
    pub fn push_assistant_message(&mut self, body: String, resources: Vec<Resource>) {
        self.messages.push(ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            author: ChatAuthor::Assistant,
            body,
            resources,
        });
        self.pending = false;
    }

    /// Settle the outstanding request without a reply (send failed).
    pub fn settle(&mut self) {
        self.pending = false;
    }

    /// Drop the local transcript.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.pending = false;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
