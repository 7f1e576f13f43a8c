//! Page rendering.
//!
//! Templates are compiled into the binary and loaded once into a minijinja
//! environment. A request that asks for `application/json` gets the page
//! context serialized as JSON instead of HTML.

use axum::Json;
use axum::http::{HeaderMap, header};
use axum::response::{Html, IntoResponse, Response};
use minijinja::Environment;
use mindcheck_core::error::{MindcheckError, Result};
use serde::Serialize;

const TEMPLATES: [(&str, &str); 6] = [
    ("base.html", include_str!("../templates/base.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("about.html", include_str!("../templates/about.html")),
    ("predict.html", include_str!("../templates/predict.html")),
    ("chatbot.html", include_str!("../templates/chatbot.html")),
    ("journal.html", include_str!("../templates/journal.html")),
];

/// Compiled page templates.
pub struct Views {
    env: Environment<'static>,
}

impl Views {
    /// Compiles every embedded template.
    ///
    /// # Errors
    ///
    /// Returns `MindcheckError::Internal` if a template fails to parse.
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        for (name, source) in TEMPLATES {
            env.add_template(name, source)
                .map_err(|e| MindcheckError::internal(format!("template {}: {}", name, e)))?;
        }
        Ok(Self { env })
    }

    /// Renders `template` with `context` to an HTML string.
    pub fn render<S: Serialize>(&self, template: &str, context: &S) -> Result<String> {
        let template = self
            .env
            .get_template(template)
            .map_err(|e| MindcheckError::internal(format!("template {}: {}", template, e)))?;
        template
            .render(context)
            .map_err(|e| MindcheckError::internal(format!("render failed: {}", e)))
    }

    /// Responds with HTML, or with `context` as JSON if the client asked for it.
    pub fn respond<S: Serialize>(&self, headers: &HeaderMap, template: &str, context: &S) -> Result<Response> {
        if wants_json(headers) {
            let value = serde_json::to_value(context)?;
            return Ok(Json(value).into_response());
        }
        Ok(Html(self.render(template, context)?).into_response())
    }
}

/// Returns true if the `Accept` header prefers JSON.
///
/// The highest-quality media range wins; ties go to the one listed first.
pub fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .and_then(preferred_media_type)
        .is_some_and(|media| media.eq_ignore_ascii_case("application/json"))
}

fn preferred_media_type(accept: &str) -> Option<&str> {
    let mut best: Option<(&str, f32)> = None;

    for range in accept.split(',') {
        let mut parts = range.split(';');
        let media = parts.next().unwrap_or_default().trim();
        if media.is_empty() {
            continue;
        }
        let quality = parts
            .filter_map(|param| param.trim().strip_prefix("q="))
            .find_map(|q| q.trim().parse::<f32>().ok())
            .unwrap_or(1.0);
        if quality <= 0.0 {
            continue;
        }
        if best.is_none_or(|(_, best_quality)| quality > best_quality) {
            best = Some((media, quality));
        }
    }

    best.map(|(media, _)| media)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_all_templates_compile() {
        assert!(Views::new().is_ok());
    }

    #[test]
    fn test_render_escapes_user_text() {
        let views = Views::new().unwrap();
        let html = views
            .render(
                "journal.html",
                &serde_json::json!({ "entries": ["<script>alert(1)</script>"] }),
            )
            .unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_wants_json() {
        let mut headers = HeaderMap::new();
        assert!(!wants_json(&headers));

        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        assert!(wants_json(&headers));

        headers.insert(header::ACCEPT, HeaderValue::from_static("text/html,*/*"));
        assert!(!wants_json(&headers));
    }

    #[test]
    fn test_wants_json_follows_quality() {
        let accept = |value: &'static str| {
            let mut headers = HeaderMap::new();
            headers.insert(header::ACCEPT, HeaderValue::from_static(value));
            wants_json(&headers)
        };

        assert!(!accept("text/html, application/json;q=0.1"));
        assert!(accept("text/html;q=0.5, application/json"));
        assert!(accept("application/json, text/html"));
        assert!(!accept("text/html, application/json"));
        assert!(!accept("application/json;q=0"));
    }
}
