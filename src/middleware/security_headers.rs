//! Fixed response headers applied to every response.
//!
//! The header set is computed once from `[security]` when the router is built;
//! the middleware only copies it onto each response.

use axum::http::header::{self, HeaderName, HeaderValue};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::config::SecurityConfig;

const DEFAULT_HSTS_MAX_AGE: u64 = 31_536_000;

/// Headers stamped onto every response, plus the no-cache pair for JSON bodies.
#[derive(Debug, Clone)]
pub struct SecurityHeaders {
    always: Vec<(HeaderName, HeaderValue)>,
}

impl SecurityHeaders {
    pub fn from_config(security: Option<&SecurityConfig>) -> Self {
        let mut always = vec![
            (header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff")),
            (header::X_FRAME_OPTIONS, HeaderValue::from_static("SAMEORIGIN")),
            (header::REFERRER_POLICY, HeaderValue::from_static("no-referrer")),
            (
                HeaderName::from_static("permissions-policy"),
                HeaderValue::from_static("geolocation=(), microphone=(), camera=()"),
            ),
            (HeaderName::from_static("cross-origin-opener-policy"), HeaderValue::from_static("same-origin")),
            (HeaderName::from_static("cross-origin-resource-policy"), HeaderValue::from_static("same-origin")),
        ];

        let Some(sec) = security else {
            return Self { always };
        };

        if sec.enable_hsts.unwrap_or(false) {
            let mut hsts = format!("max-age={}", sec.hsts_max_age.unwrap_or(DEFAULT_HSTS_MAX_AGE));
            if sec.hsts_include_subdomains.unwrap_or(false) {
                hsts.push_str("; includeSubDomains");
            }
            // Digits and ASCII only, always a valid header value
            if let Ok(value) = HeaderValue::from_str(&hsts) {
                always.push((header::STRICT_TRANSPORT_SECURITY, value));
            }
        }

        if let Some(csp) = sec.csp.as_deref().map(str::trim).filter(|csp| !csp.is_empty()) {
            match HeaderValue::from_str(csp) {
                Ok(value) => always.push((header::CONTENT_SECURITY_POLICY, value)),
                Err(e) => tracing::warn!("Ignoring invalid security.csp value: {}", e),
            }
        }

        Self { always }
    }
}

pub async fn security_headers_middleware(
    State(security): State<Arc<SecurityHeaders>>,
    req: Request,
    next: Next,
) -> Response {
    let mut res = next.run(req).await;
    let headers = res.headers_mut();

    for (name, value) in &security.always {
        headers.insert(name.clone(), value.clone());
    }

    let is_json = headers
        .get(header::CONTENT_TYPE)
        .and_then(|ct| ct.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"));
    if is_json {
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
        headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    }

    res
}
