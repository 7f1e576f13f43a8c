//! Chatbot use case.
//!
//! The "bot" is a placeholder: every reply is drawn uniformly at random from
//! [`CANNED_REPLIES`] and the user's message is never inspected. Replacing it
//! with real dialogue logic is a product decision, not a refactor.

use crate::form_fields::FormFields;
use crate::session_updater::SessionUpdater;
use mindcheck_core::error::Result;
use mindcheck_core::session::{SessionId, SessionState};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// The fixed set of supportive replies.
pub const CANNED_REPLIES: [&str; 10] = [
    "I understand how you're feeling. Can you tell me more about that?",
    "That sounds challenging. How are you coping with this?",
    "Thank you for sharing. What emotions are you experiencing right now?",
    "I'm here to listen. How has your day been overall?",
    "It's important to acknowledge these feelings. Have you noticed any patterns?",
    "Your feelings are valid. What helps you feel better in these moments?",
    "I appreciate you opening up. How can I support you today?",
    "That's a lot to process. What would be most helpful right now?",
    "I hear you. Have you been able to talk to anyone else about this?",
    "Thank you for trusting me with this. How are you taking care of yourself?",
];

/// Picks a reply uniformly at random, independent of any input.
pub fn canned_reply<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    CANNED_REPLIES[rng.gen_range(0..CANNED_REPLIES.len())]
}

/// Fields a chatbot form may carry.
///
/// A `mood` field takes precedence: when present, only the mood changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatSubmission {
    pub mood: Option<String>,
    pub message: Option<String>,
}

impl ChatSubmission {
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            mood: fields.first_owned("mood"),
            message: fields.first_owned("message"),
        }
    }
}

/// Maintains the per-session chat transcript and mood.
pub struct ChatbotService {
    sessions: SessionUpdater,
    rng: Mutex<StdRng>,
}

impl ChatbotService {
    /// Creates a service drawing replies from OS entropy.
    pub fn new(sessions: SessionUpdater) -> Self {
        Self::with_rng(sessions, StdRng::from_entropy())
    }

    /// Creates a service with a caller-supplied generator (seeded in tests).
    pub fn with_rng(sessions: SessionUpdater, rng: StdRng) -> Self {
        Self {
            sessions,
            rng: Mutex::new(rng),
        }
    }

    fn next_reply(&self) -> &'static str {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        canned_reply(&mut *rng)
    }

    /// Fresh page load: clears the transcript and resets the mood.
    pub async fn open(&self, session_id: &SessionId) -> Result<SessionState> {
        tracing::debug!("[ChatbotService] Resetting chat for session {}", session_id);
        self.sessions
            .update(session_id, |state| state.reset_chat())
            .await
    }

    /// Applies one form submission.
    ///
    /// - `mood` present: the mood is replaced and the transcript is untouched
    /// - otherwise `message` present: the message and a canned reply are appended
    /// - neither: nothing changes
    pub async fn submit(&self, session_id: &SessionId, submission: ChatSubmission) -> Result<SessionState> {
        match submission {
            ChatSubmission {
                mood: Some(mood), ..
            } => {
                tracing::debug!("[ChatbotService] Mood set to '{}'", mood);
                self.sessions
                    .update(session_id, move |state| state.set_mood(mood))
                    .await
            }
            ChatSubmission {
                message: Some(message),
                ..
            } => {
                let reply = self.next_reply();
                self.sessions
                    .update(session_id, move |state| state.push_exchange(message, reply))
                    .await
            }
            ChatSubmission { .. } => self.sessions.snapshot(session_id).await,
        }
    }
}
