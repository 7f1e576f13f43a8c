//! Plain-text session summary for download.

use crate::session_updater::SessionUpdater;
use mindcheck_core::error::Result;
use mindcheck_core::session::{SessionId, SessionState};
use std::fmt::Write;

/// File name the browser is told to save the report as.
pub const REPORT_FILENAME: &str = "session_report.txt";

/// Shown in the report when no prediction has been stored.
pub const NO_PREDICTION_PLACEHOLDER: &str = "No prediction made yet";

/// Renders the session as a flat text document.
///
/// Layout: header, prediction (or placeholder), numbered journal entries,
/// then the chat transcript as `<speaker>: <message>` lines.
pub fn render_session_report(state: &SessionState) -> String {
    let prediction = state
        .prediction
        .as_deref()
        .unwrap_or(NO_PREDICTION_PLACEHOLDER);

    let mut report = String::new();
    // Writing to a String cannot fail
    let _ = write!(
        report,
        "\nSESSION SUMMARY\n===============\n\nPREDICTION RESULT:\n{}\n\nJOURNAL ENTRIES ({} entries):\n",
        prediction,
        state.journal.len()
    );
    for (i, entry) in state.journal.iter().enumerate() {
        let _ = writeln!(report, "{}. {}", i + 1, entry);
    }

    let _ = write!(
        report,
        "\nCHAT HISTORY ({} messages):\n",
        state.chat_history.len()
    );
    for entry in &state.chat_history {
        let _ = writeln!(report, "{}", entry.transcript_line());
    }

    report
}

/// Produces reports from the current session state.
#[derive(Clone)]
pub struct SessionReportService {
    sessions: SessionUpdater,
}

impl SessionReportService {
    pub fn new(sessions: SessionUpdater) -> Self {
        Self { sessions }
    }

    /// Renders the report for `session_id`. Nothing is written to disk.
    pub async fn export(&self, session_id: &SessionId) -> Result<String> {
        let state = self.sessions.snapshot(session_id).await?;
        tracing::info!("[SessionReport] Exporting report for session {}", session_id);
        Ok(render_session_report(&state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_session_report() {
        let report = render_session_report(&SessionState::new());

        assert!(report.contains("No prediction made yet"));
        assert!(report.contains("(0 entries)"));
        assert!(report.contains("(0 messages)"));
        assert!(report.starts_with("\nSESSION SUMMARY\n"));
    }

    #[test]
    fn test_full_report_layout() {
        let mut state = SessionState::new();
        state.set_prediction("Sibling (no schizophrenia)");
        state.push_journal_entry("slept well");
        state.push_journal_entry("went for a walk");
        state.push_exchange("hi", "I hear you.");

        let expected = "\nSESSION SUMMARY\n===============\n\n\
            PREDICTION RESULT:\nSibling (no schizophrenia)\n\n\
            JOURNAL ENTRIES (2 entries):\n\
            1. slept well\n\
            2. went for a walk\n\
            \nCHAT HISTORY (2 messages):\n\
            You: hi\n\
            Bot: I hear you.\n";

        assert_eq!(render_session_report(&state), expected);
    }
}
