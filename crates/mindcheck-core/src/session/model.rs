//! Session domain model.
//!
//! `SessionState` is the typed record behind one browser session. Every
//! field has a defined default, so handlers never branch on a missing key.

use super::message::{ChatEntry, Speaker};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Mood tag a chat starts with, and returns to on a fresh chatbot page load.
pub const DEFAULT_MOOD: &str = "neutral";

/// Per-browser session state.
///
/// A session contains:
/// - The last successful prediction label, if any
/// - The chat transcript and the currently selected mood
/// - The journal entries, in insertion order
/// - Timestamps used by the store for idle eviction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Last successful prediction label
    #[serde(default)]
    pub prediction: Option<String>,
    /// Chat transcript, oldest first
    #[serde(default)]
    pub chat_history: Vec<ChatEntry>,
    /// Mood tag selected on the chatbot page
    #[serde(default = "default_mood")]
    pub mood: String,
    /// Journal entries (trimmed, never empty), oldest first
    #[serde(default)]
    pub journal: Vec<String>,
    /// When the session was created
    pub created_at: DateTime<Utc>,
    /// When the session was last read or written
    pub last_accessed: DateTime<Utc>,
}

fn default_mood() -> String {
    DEFAULT_MOOD.to_string()
}

impl Default for SessionState {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            prediction: None,
            chat_history: Vec::new(),
            mood: default_mood(),
            journal: Vec::new(),
            created_at: now,
            last_accessed: now,
        }
    }
}

impl SessionState {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a prediction label, replacing any previous one.
    pub fn set_prediction(&mut self, label: impl Into<String>) {
        self.prediction = Some(label.into());
    }

    /// Clears the chat transcript and resets the mood to [`DEFAULT_MOOD`].
    pub fn reset_chat(&mut self) {
        self.chat_history.clear();
        self.mood = default_mood();
    }

    /// Sets the mood tag. The transcript is left untouched.
    pub fn set_mood(&mut self, mood: impl Into<String>) {
        self.mood = mood.into();
    }

    /// Appends the user's message followed by the bot's reply.
    pub fn push_exchange(&mut self, message: impl Into<String>, reply: impl Into<String>) {
        self.chat_history.push(ChatEntry::new(Speaker::You, message));
        self.chat_history.push(ChatEntry::new(Speaker::Bot, reply));
    }

    /// Appends a journal entry after trimming surrounding whitespace.
    ///
    /// Returns `false` (and stores nothing) when the trimmed entry is empty.
    pub fn push_journal_entry(&mut self, raw: &str) -> bool {
        let entry = raw.trim();
        if entry.is_empty() {
            return false;
        }
        self.journal.push(entry.to_string());
        true
    }

    /// Marks the session as accessed now.
    pub fn touch(&mut self) {
        self.last_accessed = Utc::now();
    }

    /// Returns true if the session has been idle for longer than `ttl`.
    pub fn is_expired(&self, ttl: chrono::Duration, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.last_accessed) > ttl
    }
}
