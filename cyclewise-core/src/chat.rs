//! Chat transcript state.
//!
//! Only the transcript lives here. Talking to the assistant backend is the
//! caller's business; it reports back through [`ChatTranscript::push_assistant`]
//! or [`ChatTranscript::push_failure`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CycleWiseError, CycleWiseResult};
use crate::store::{CHAT_MESSAGES_KEY, KeyValueStore};

pub const GREETING: &str = "Hello! How can I assist you today? 😊";
pub const FAILURE_REPLY: &str = "Error: Unable to fetch response. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    /// Label used in exported transcripts
    pub fn label(&self) -> &'static str {
        match self {
            Sender::User => "You",
            Sender::Assistant => "Assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: i64,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
}

impl ChatTranscript {
    /// A transcript holding only the assistant greeting.
    pub fn new(at: DateTime<Utc>) -> Self {
        ChatTranscript {
            messages: vec![ChatMessage {
                id: at.timestamp_millis(),
                text: GREETING.to_string(),
                sender: Sender::Assistant,
                timestamp: at,
            }],
        }
    }

    pub fn load(store: &impl KeyValueStore, now: DateTime<Utc>) -> CycleWiseResult<Self> {
        match store.get(CHAT_MESSAGES_KEY)? {
            Some(json) => serde_json::from_str(&json).map_err(|e| {
                CycleWiseError::Store(format!("Could not parse saved chat messages: {e}"))
            }),
            None => Ok(Self::new(now)),
        }
    }

    pub fn save(&self, store: &mut impl KeyValueStore) -> CycleWiseResult<()> {
        let json = serde_json::to_string(self)
            .map_err(|e| CycleWiseError::Serialization(e.to_string()))?;
        store.set(CHAT_MESSAGES_KEY, &json)
    }

    /// Drop the saved transcript and empty this one.
    pub fn clear(&mut self, store: &mut impl KeyValueStore) -> CycleWiseResult<()> {
        store.remove(CHAT_MESSAGES_KEY)?;
        self.messages.clear();
        Ok(())
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Append a user message. Blank input is ignored.
    pub fn push_user(&mut self, text: &str, at: DateTime<Utc>) -> Option<&ChatMessage> {
        if text.trim().is_empty() {
            return None;
        }
        Some(self.push(text, Sender::User, at))
    }

    pub fn push_assistant(&mut self, text: &str, at: DateTime<Utc>) -> &ChatMessage {
        self.push(text, Sender::Assistant, at)
    }

    pub fn push_failure(&mut self, at: DateTime<Utc>) -> &ChatMessage {
        self.push(FAILURE_REPLY, Sender::Assistant, at)
    }

    /// Plain-text transcript, one `Sender: text` line per message.
    pub fn export_text(&self) -> String {
        self.messages
            .iter()
            .map(|m| format!("{}: {}", m.sender.label(), m.text))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn push(&mut self, text: &str, sender: Sender, at: DateTime<Utc>) -> &ChatMessage {
        // Ids are millisecond timestamps, kept strictly increasing
        let id = match self.messages.last() {
            Some(last) if last.id >= at.timestamp_millis() => last.id + 1,
            _ => at.timestamp_millis(),
        };

        self.messages.push(ChatMessage {
            id,
            text: text.to_string(),
            sender,
            timestamp: at,
        });
        &self.messages[self.messages.len() - 1]
    }
}
