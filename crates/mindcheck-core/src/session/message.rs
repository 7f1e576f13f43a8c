//! Chat transcript types.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Who produced a line of the chat transcript.
///
/// Displayed as `You` / `Bot`, which is also the prefix used in the
/// exported session report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum Speaker {
    /// The person using the browser.
    You,
    /// The canned-response chatbot.
    Bot,
}

/// A single line in a chat transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEntry {
    /// Who said it.
    pub speaker: Speaker,
    /// What was said, verbatim.
    pub message: String,
}

impl ChatEntry {
    pub fn new(speaker: Speaker, message: impl Into<String>) -> Self {
        Self {
            speaker,
            message: message.into(),
        }
    }

    /// Formats the entry as a transcript line (`"<speaker>: <message>"`).
    pub fn transcript_line(&self) -> String {
        format!("{}: {}", self.speaker, self.message)
    }
}
