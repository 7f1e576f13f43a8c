//! Session resolution middleware.
//!
//! Every page request passes through [`resolve_session`]: a valid signed
//! cookie selects the existing session id, anything else (no cookie, bad
//! signature, garbage) starts a new session and sets a fresh cookie on the
//! response. Handlers read the id from the [`CurrentSession`] extension.

use crate::context::AppContext;
use axum::extract::{Request, State};
use axum::http::HeaderValue;
use axum::http::header::SET_COOKIE;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use mindcheck_core::session::{SessionId, SessionState};

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "mindcheck_session";

/// The session bound to the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentSession(pub SessionId);

fn session_from_cookie(ctx: &AppContext, jar: &CookieJar) -> Option<SessionId> {
    let cookie = jar.get(SESSION_COOKIE)?;
    match ctx.signer.verify(cookie.value()) {
        Ok(id) => Some(id),
        Err(e) => {
            tracing::warn!("[SessionLayer] Ignoring session cookie: {}", e);
            None
        }
    }
}

fn session_cookie(ctx: &AppContext, id: &SessionId) -> Option<HeaderValue> {
    let cookie = Cookie::build((SESSION_COOKIE, ctx.signer.sign(id)))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    match HeaderValue::from_str(&cookie.to_string()) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::error!("[SessionLayer] Could not encode session cookie: {}", e);
            None
        }
    }
}

/// Resolves or creates the session for a request.
pub async fn resolve_session(State(ctx): State<AppContext>, mut request: Request, next: Next) -> Response {
    let jar = CookieJar::from_headers(request.headers());

    let (id, is_new) = match session_from_cookie(&ctx, &jar) {
        Some(id) => (id, false),
        None => {
            let id = SessionId::new();
            if let Err(e) = ctx.sessions.insert(&id, SessionState::new()).await {
                tracing::error!("[SessionLayer] Failed to create session: {}", e);
            }
            (id, true)
        }
    };

    request.extensions_mut().insert(CurrentSession(id));
    let mut response = next.run(request).await;

    if is_new && let Some(value) = session_cookie(&ctx, &id) {
        response.headers_mut().append(SET_COOKIE, value);
    }

    response
}
