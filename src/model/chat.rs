//! Chat transcript state for the Nova assistant.
//!
//! The model only holds the transcript and the single in-flight reply slot;
//! scheduling the delayed bot reply lives in the controller.

use crate::model::catalog::Book;
use crate::model::recommend;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Speaker {
    User,
    Nova,
}

#[derive(Clone, Debug)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
    /// Books attached to a bot reply, rendered as selectable links.
    pub books: Vec<Book>,
}

impl ChatMessage {
    pub fn from_user(text: &str) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.to_string(),
            books: Vec::new(),
        }
    }

    pub fn from_nova(text: String, books: Vec<Book>) -> Self {
        Self {
            speaker: Speaker::Nova,
            text,
            books,
        }
    }
}

/// Transcript plus the one-reply-at-a-time guard.
#[derive(Clone, Debug)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    /// True from send until the scheduled reply lands; further sends are
    /// dropped so replies stay ordered.
    pub reply_pending: bool,
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::from_nova(
                recommend::GREETING.to_string(),
                Vec::new(),
            )],
            reply_pending: false,
        }
    }

    /// Record the user's message and claim the reply slot. Returns false when
    /// the text is blank or a reply is already pending.
    pub fn push_user_message(&mut self, text: &str) -> bool {
        if text.trim().is_empty() || self.reply_pending {
            return false;
        }
        self.messages.push(ChatMessage::from_user(text));
        self.reply_pending = true;
        true
    }

    /// Land the bot reply and release the slot.
    pub fn push_reply(&mut self, reply: recommend::Recommendation) {
        self.messages
            .push(ChatMessage::from_nova(reply.message, reply.books));
        self.reply_pending = false;
    }
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::Catalog;

    #[test]
    fn transcript_opens_with_the_greeting() {
        let chat = ChatState::new();
        assert_eq!(chat.messages.len(), 1);
        assert_eq!(chat.messages[0].speaker, Speaker::Nova);
        assert_eq!(chat.messages[0].text, recommend::GREETING);
    }

    #[test]
    fn blank_sends_are_rejected() {
        let mut chat = ChatState::new();
        assert!(!chat.push_user_message("   "));
        assert_eq!(chat.messages.len(), 1);
        assert!(!chat.reply_pending);
    }

    #[test]
    fn sends_are_dropped_while_a_reply_is_pending() {
        let catalog = Catalog::new();
        let mut chat = ChatState::new();

        assert!(chat.push_user_message("I'm feeling romantic"));
        assert!(chat.reply_pending);
        assert!(!chat.push_user_message("show me trending books"));
        assert_eq!(chat.messages.len(), 2);

        chat.push_reply(recommend::respond(&catalog, "I'm feeling romantic"));
        assert!(!chat.reply_pending);
        assert_eq!(chat.messages.len(), 3);
        assert_eq!(chat.messages[2].speaker, Speaker::Nova);

        // Slot released, the next send goes through.
        assert!(chat.push_user_message("show me trending books"));
    }
}
