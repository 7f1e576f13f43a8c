//! HTTP routes.
//!
//! | Route               | Methods   |
//! |---------------------|-----------|
//! | `/health`           | GET       |
//! | `/`                 | GET       |
//! | `/about`            | GET       |
//! | `/predict`          | GET, POST |
//! | `/chatbot`          | GET, POST |
//! | `/journal`          | GET, POST |
//! | `/session/download` | GET       |

use crate::context::AppContext;
use crate::error::ServerResult;
use crate::session_layer::{CurrentSession, resolve_session};
use axum::extract::State;
use axum::extract::rejection::FormRejection;
use axum::http::{HeaderMap, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Form, Json, Router};
use mindcheck_application::{ChatSubmission, FormFields, PredictionForm, REPORT_FILENAME};
use mindcheck_core::model::FEATURE_NAMES;
use mindcheck_core::session::ChatEntry;
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

/// Builds the application router.
///
/// `/health` sits outside the session middleware so health checks never create
/// sessions.
pub fn router(ctx: AppContext) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/about", get(about))
        .route("/predict", get(predict_page).post(predict_submit))
        .route("/chatbot", get(chatbot_page).post(chatbot_submit))
        .route("/journal", get(journal_page).post(journal_submit))
        .route("/session/download", get(download_session))
        .layer(axum::middleware::from_fn_with_state(ctx.clone(), resolve_session))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

/// Raw form pairs as the handlers receive them.
///
/// An unreadable body (wrong content type, malformed encoding) is treated as
/// an empty form so every POST route still renders its page.
type RawForm = Result<Form<Vec<(String, String)>>, FormRejection>;

fn form_fields(form: RawForm) -> FormFields {
    match form {
        Ok(Form(pairs)) => FormFields::from(pairs),
        Err(rejection) => {
            tracing::warn!("[Routes] Unreadable form body, treating as empty: {}", rejection);
            FormFields::default()
        }
    }
}

// ----------------
// Health Check
// ----------------

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub models_loaded: bool,
}

async fn health(State(ctx): State<AppContext>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        models_loaded: ctx.models_loaded(),
    })
}

// ----------------
// Static pages
// ----------------

async fn index(State(ctx): State<AppContext>) -> ServerResult<Html<String>> {
    Ok(Html(ctx.views.render("index.html", &serde_json::json!({}))?))
}

async fn about(State(ctx): State<AppContext>) -> ServerResult<Html<String>> {
    Ok(Html(ctx.views.render("about.html", &serde_json::json!({}))?))
}

// ----------------
// Prediction
// ----------------

#[derive(Debug, Serialize)]
struct PredictPage {
    prediction: Option<String>,
    models_loaded: bool,
    fields: [&'static str; 7],
}

impl PredictPage {
    fn new(ctx: &AppContext, prediction: Option<String>) -> Self {
        Self {
            prediction,
            models_loaded: ctx.models_loaded(),
            fields: FEATURE_NAMES,
        }
    }
}

async fn predict_page(State(ctx): State<AppContext>, headers: HeaderMap) -> ServerResult<Response> {
    let page = PredictPage::new(&ctx, None);
    Ok(ctx.views.respond(&headers, "predict.html", &page)?)
}

async fn predict_submit(
    State(ctx): State<AppContext>,
    Extension(CurrentSession(session_id)): Extension<CurrentSession>,
    headers: HeaderMap,
    form: RawForm,
) -> ServerResult<Response> {
    let form = PredictionForm::from_fields(&form_fields(form));
    let outcome = ctx.prediction.submit(&session_id, &form).await?;
    let page = PredictPage::new(&ctx, Some(outcome.message()));
    Ok(ctx.views.respond(&headers, "predict.html", &page)?)
}

// ----------------
// Chatbot
// ----------------

#[derive(Debug, Serialize)]
struct ChatbotPage {
    history: Vec<ChatEntry>,
    mood: String,
}

async fn chatbot_page(
    State(ctx): State<AppContext>,
    Extension(CurrentSession(session_id)): Extension<CurrentSession>,
    headers: HeaderMap,
) -> ServerResult<Response> {
    let state = ctx.chatbot.open(&session_id).await?;
    let page = ChatbotPage {
        history: state.chat_history,
        mood: state.mood,
    };
    Ok(ctx.views.respond(&headers, "chatbot.html", &page)?)
}

async fn chatbot_submit(
    State(ctx): State<AppContext>,
    Extension(CurrentSession(session_id)): Extension<CurrentSession>,
    headers: HeaderMap,
    form: RawForm,
) -> ServerResult<Response> {
    let submission = ChatSubmission::from_fields(&form_fields(form));
    let state = ctx.chatbot.submit(&session_id, submission).await?;
    let page = ChatbotPage {
        history: state.chat_history,
        mood: state.mood,
    };
    Ok(ctx.views.respond(&headers, "chatbot.html", &page)?)
}

// ----------------
// Journal
// ----------------

#[derive(Debug, Serialize)]
struct JournalPage {
    entries: Vec<String>,
}

async fn journal_page(
    State(ctx): State<AppContext>,
    Extension(CurrentSession(session_id)): Extension<CurrentSession>,
    headers: HeaderMap,
) -> ServerResult<Response> {
    let entries = ctx.journal.entries(&session_id).await?;
    Ok(ctx.views.respond(&headers, "journal.html", &JournalPage { entries })?)
}

async fn journal_submit(
    State(ctx): State<AppContext>,
    Extension(CurrentSession(session_id)): Extension<CurrentSession>,
    headers: HeaderMap,
    form: RawForm,
) -> ServerResult<Response> {
    let fields = form_fields(form);
    let entries = ctx.journal.add_entry(&session_id, fields.first("entry")).await?;
    Ok(ctx.views.respond(&headers, "journal.html", &JournalPage { entries })?)
}

// ----------------
// Session Summary
// ----------------

async fn download_session(
    State(ctx): State<AppContext>,
    Extension(CurrentSession(session_id)): Extension<CurrentSession>,
) -> ServerResult<Response> {
    let report = ctx.reports.export(&session_id).await?;
    let disposition = format!("attachment; filename={}", REPORT_FILENAME);

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        report,
    )
        .into_response())
}
