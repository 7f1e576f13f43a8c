//! Application layer for MindCheck.
//!
//! Use cases behind each route: prediction, chatbot, journal and the session
//! report. Services operate on a `SessionStore` and never see HTTP types.

pub mod chatbot_service;
pub mod form_fields;
pub mod journal_service;
pub mod prediction_service;
pub mod session_report;
pub mod session_updater;

pub use chatbot_service::{CANNED_REPLIES, ChatSubmission, ChatbotService, canned_reply};
pub use form_fields::FormFields;
pub use journal_service::JournalService;
pub use prediction_service::{PredictionError, PredictionForm, PredictionOutcome, PredictionService};
pub use session_report::{REPORT_FILENAME, SessionReportService, render_session_report};
pub use session_updater::SessionUpdater;
