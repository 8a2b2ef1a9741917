use crate::constants::{FORBIDDEN_MESSAGE, STATUS_FORBIDDEN, STATUS_OK};
use crate::headers::Headers;
use thiserror::Error;

/// Fixed status and plain-text message sent when an origin is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejection {
    pub status: u16,
    pub message: &'static str,
}

impl Rejection {
    pub(crate) const FORBIDDEN: Rejection = Rejection {
        status: STATUS_FORBIDDEN,
        message: FORBIDDEN_MESSAGE,
    };
}

/// Control signal returned to the handler chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorsDecision {
    /// Run the downstream handler and apply the headers to its response.
    Continue,
    /// Preflight answered: reply 200 with an empty body, skip the downstream handler.
    StopOk,
    /// Refuse the request without invoking the downstream handler.
    Reject(Rejection),
}

/// Headers and control signal produced for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsOutcome {
    pub decision: CorsDecision,
    pub headers: Headers,
}

impl CorsOutcome {
    pub(crate) fn pass_through() -> Self {
        Self {
            decision: CorsDecision::Continue,
            headers: Headers::new(),
        }
    }

    pub(crate) fn rejected(rejection: Rejection) -> Self {
        Self {
            decision: CorsDecision::Reject(rejection),
            headers: Headers::new(),
        }
    }

    /// Status the CORS layer answers with itself, if the chain must stop.
    pub fn status(&self) -> Option<u16> {
        match self.decision {
            CorsDecision::Continue => None,
            CorsDecision::StopOk => Some(STATUS_OK),
            CorsDecision::Reject(rejection) => Some(rejection.status),
        }
    }

    pub fn halts(&self) -> bool {
        !matches!(self.decision, CorsDecision::Continue)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Configuration errors raised while compiling a policy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "credentials cannot be allowed for the wildcard origin; browsers reject '*' combined with credentials"
    )]
    CredentialsWithWildcardOrigin,
    #[error("origin keys must not be empty")]
    EmptyOrigin,
    #[error("origin '{0}' contains whitespace or non-printable characters")]
    InvalidOrigin(String),
    #[error("allowed method '{0}' is not a valid HTTP token")]
    InvalidMethod(String),
    #[error("header name '{0}' is not a valid HTTP token")]
    InvalidHeaderName(String),
}
