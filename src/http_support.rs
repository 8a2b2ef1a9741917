//! Glue between the evaluator and the `http` crate types used by hyper,
//! axum and friends.

use crate::constants::header;
use crate::context::RequestContext;
use crate::result::{CorsDecision, CorsOutcome};
use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::{Method, Response, StatusCode};

/// Owned copy of the request fields, for middleware that must hand the
/// request itself on to the next handler.
#[derive(Debug, Clone, Default)]
pub struct OwnedRequestContext {
    method: String,
    origin: Option<String>,
    access_control_request_method: Option<String>,
    access_control_request_headers: Option<String>,
}

impl OwnedRequestContext {
    pub fn from_parts(method: &Method, headers: &HeaderMap) -> Self {
        Self {
            method: method.as_str().to_string(),
            origin: header_value(headers, header::ORIGIN),
            access_control_request_method: header_value(
                headers,
                header::ACCESS_CONTROL_REQUEST_METHOD,
            ),
            access_control_request_headers: header_value(
                headers,
                header::ACCESS_CONTROL_REQUEST_HEADERS,
            ),
        }
    }

    pub fn from_request<B>(request: &http::Request<B>) -> Self {
        Self::from_parts(request.method(), request.headers())
    }

    pub fn as_context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
            access_control_request_method: self.access_control_request_method.as_deref(),
            access_control_request_headers: self.access_control_request_headers.as_deref(),
        }
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

// Appends the tokens of `incoming` that the existing `Vary` values lack.
fn merge_vary(map: &mut HeaderMap, incoming: &str) {
    let existing: Vec<String> = map
        .get_all(http::header::VARY)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect();
    if existing.iter().any(|part| part == "*") {
        return;
    }

    let missing: Vec<&str> = incoming
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .filter(|part| !existing.iter().any(|known| known.eq_ignore_ascii_case(part)))
        .collect();
    if missing.is_empty() {
        return;
    }

    let merged = existing
        .iter()
        .map(String::as_str)
        .chain(missing)
        .collect::<Vec<_>>()
        .join(", ");
    match HeaderValue::from_str(&merged) {
        Ok(value) => {
            map.insert(http::header::VARY, value);
        }
        Err(_) => tracing::debug!(vary = %merged, "skipping Vary with invalid value"),
    }
}

impl CorsOutcome {
    /// Writes the CORS headers into `map`, replacing existing values.
    /// `Vary` is merged with whatever the response already varies on.
    /// Entries that are not valid header names or values are skipped.
    pub fn apply_to(&self, map: &mut HeaderMap) {
        for (name, value) in &self.headers {
            let Ok(header_name) = HeaderName::try_from(name.as_str()) else {
                tracing::debug!(header = %name, "skipping CORS header with invalid name");
                continue;
            };
            if header_name == http::header::VARY {
                merge_vary(map, value);
                continue;
            }
            match HeaderValue::from_str(value) {
                Ok(value) => {
                    map.insert(header_name, value);
                }
                Err(_) => tracing::debug!(header = %name, "skipping CORS header with invalid value"),
            }
        }
    }

    /// Response the CORS layer sends itself when the chain must stop.
    /// Returns `None` when the downstream handler should run.
    pub fn terminal_response<B>(&self) -> Option<Response<B>>
    where
        B: From<&'static str>,
    {
        match self.decision {
            CorsDecision::Continue => None,
            CorsDecision::StopOk => {
                let mut response = Response::new(B::from(""));
                *response.status_mut() = StatusCode::OK;
                self.apply_to(response.headers_mut());
                Some(response)
            }
            CorsDecision::Reject(rejection) => {
                let mut response = Response::new(B::from(rejection.message));
                *response.status_mut() =
                    StatusCode::from_u16(rejection.status).unwrap_or(StatusCode::FORBIDDEN);
                response.headers_mut().insert(
                    http::header::CONTENT_TYPE,
                    HeaderValue::from_static("text/plain; charset=utf-8"),
                );
                Some(response)
            }
        }
    }
}

#[cfg(test)]
#[path = "http_support_test.rs"]
mod http_support_test;
