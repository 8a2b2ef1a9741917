use crate::constants::method;

/// The request fields the evaluator reads.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    pub fn new(method: &'a str, origin: Option<&'a str>) -> Self {
        Self {
            method,
            origin,
            ..Self::default()
        }
    }

    /// Origin header value, treating an empty header as absent.
    pub(crate) fn origin(&self) -> Option<&'a str> {
        self.origin.filter(|origin| !origin.is_empty())
    }

    /// Methods are case-sensitive; only `OPTIONS` itself is a preflight.
    pub(crate) fn is_preflight(&self) -> bool {
        self.method == method::OPTIONS
    }
}
