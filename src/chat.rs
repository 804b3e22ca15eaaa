//! Business AI chat dock state
//!
//! A scripted mock conversation: applicant messages get the next canned
//! reply for the active category. Open/visited flags persist across runs
//! under the original portal's storage keys.

use crate::models::{
    breakout_cards, initial_message, scripted_replies, ChatMessage, ChatRole,
};
use crate::store::{Store, CHAT_OPEN_KEY, CHAT_VISITED_KEY};

pub struct ChatDock {
    pub open: bool,
    pub visited: bool,
    pub category: &'static str,
    pub messages: Vec<ChatMessage>,
    pub input: String,
    /// Index of the breakout card currently overlaid, if any
    pub breakout: Option<usize>,
    reply_cursor: usize,
}

impl ChatDock {
    pub fn new(category: &'static str, store: &Store) -> Self {
        let open = store.get(CHAT_OPEN_KEY, false);
        let visited = store.get(CHAT_VISITED_KEY, false);
        Self {
            open,
            visited,
            category,
            messages: vec![ChatMessage {
                role: ChatRole::Assistant,
                body: initial_message(category).to_string(),
            }],
            input: String::new(),
            breakout: None,
            reply_cursor: 0,
        }
    }

    /// Status pill text shown on the dock card
    pub fn status_pill(&self) -> &'static str {
        if self.open {
            "Chat in progress"
        } else if self.visited {
            "Chat ready"
        } else {
            "Business AI ready"
        }
    }

    pub fn open_dock(&mut self, store: &mut Store) {
        self.open = true;
        self.visited = true;
        store.set(CHAT_OPEN_KEY, true);
        store.set(CHAT_VISITED_KEY, true);
    }

    pub fn close_dock(&mut self, store: &mut Store) {
        self.open = false;
        self.breakout = None;
        store.set(CHAT_OPEN_KEY, false);
    }

    /// Send an applicant message and append the next scripted reply
    pub fn send(&mut self, body: String) {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return;
        }
        self.messages.push(ChatMessage {
            role: ChatRole::Applicant,
            body: trimmed.to_string(),
        });

        let replies = scripted_replies(self.category);
        let reply = replies[self.reply_cursor % replies.len()];
        self.reply_cursor += 1;
        self.messages.push(ChatMessage {
            role: ChatRole::Assistant,
            body: reply.to_string(),
        });
    }

    /// Submit whatever is in the composer
    pub fn send_input(&mut self) {
        let body = std::mem::take(&mut self.input);
        self.send(body);
    }

    /// Advance to the next breakout card, opening the overlay if closed
    pub fn cycle_breakout(&mut self) {
        let count = breakout_cards().len();
        self.breakout = Some(match self.breakout {
            Some(index) => (index + 1) % count,
            None => 0,
        });
    }

    pub fn close_breakout(&mut self) {
        self.breakout = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_pill_transitions() {
        let mut store = Store::ephemeral();
        let mut dock = ChatDock::new("restaurants", &store);
        assert_eq!(dock.status_pill(), "Business AI ready");

        dock.open_dock(&mut store);
        assert_eq!(dock.status_pill(), "Chat in progress");

        dock.close_dock(&mut store);
        assert_eq!(dock.status_pill(), "Chat ready");
    }

    #[test]
    fn test_flags_persist_through_store() {
        let mut store = Store::ephemeral();
        let mut dock = ChatDock::new("restaurants", &store);
        dock.open_dock(&mut store);
        dock.close_dock(&mut store);

        let reopened = ChatDock::new("restaurants", &store);
        assert!(!reopened.open);
        assert!(reopened.visited);
        assert_eq!(reopened.status_pill(), "Chat ready");
    }

    #[test]
    fn test_send_cycles_scripted_replies() {
        let store = Store::ephemeral();
        let mut dock = ChatDock::new("restaurants", &store);
        let replies = scripted_replies("restaurants");

        for expected in replies.iter().take(2) {
            dock.send("tell me more".to_string());
            let last = dock.messages.last().unwrap();
            assert_eq!(last.role, ChatRole::Assistant);
            assert_eq!(last.body, *expected);
        }
        // Applicant + assistant per send, on top of the opener
        assert_eq!(dock.messages.len(), 5);
    }

    #[test]
    fn test_blank_send_is_ignored() {
        let store = Store::ephemeral();
        let mut dock = ChatDock::new("restaurants", &store);
        dock.send("   ".to_string());
        assert_eq!(dock.messages.len(), 1);
    }

    #[test]
    fn test_send_input_clears_composer() {
        let store = Store::ephemeral();
        let mut dock = ChatDock::new("general", &store);
        dock.input = "What do I owe?".to_string();
        dock.send_input();
        assert!(dock.input.is_empty());
        assert_eq!(dock.messages.len(), 3);
    }

    #[test]
    fn test_breakout_cycles_and_closes() {
        let store = Store::ephemeral();
        let mut dock = ChatDock::new("restaurants", &store);
        assert!(dock.breakout.is_none());

        dock.cycle_breakout();
        assert_eq!(dock.breakout, Some(0));
        dock.cycle_breakout();
        assert_eq!(dock.breakout, Some(1));
        dock.cycle_breakout();
        dock.cycle_breakout();
        assert_eq!(dock.breakout, Some(0));

        dock.close_breakout();
        assert!(dock.breakout.is_none());
    }
}
