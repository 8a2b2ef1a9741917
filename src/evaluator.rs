use crate::compiled::{CompiledOriginRule, CompiledPolicy, OriginMatch};
use crate::constants::{WILDCARD_ORIGIN, header};
use crate::context::RequestContext;
use crate::headers::HeaderCollection;
use crate::result::{CorsDecision, CorsOutcome, Rejection};

impl CompiledPolicy {
    /// Resolves the rule for the request origin and produces the header
    /// writes plus the control signal for the handler chain.
    pub fn evaluate(&self, request: &RequestContext<'_>) -> CorsOutcome {
        let Some(origin) = request.origin() else {
            return CorsOutcome::pass_through();
        };

        let Some((rule, matched)) = self.resolve(origin) else {
            tracing::debug!(origin, "rejecting CORS request from unlisted origin");
            return CorsOutcome::rejected(Rejection::FORBIDDEN);
        };

        let mut headers = HeaderCollection::new();
        self.build_origin_headers(&mut headers, origin, rule, matched);
        build_credentials_header(&mut headers, rule);
        build_exposed_headers(&mut headers, rule);
        build_max_age_header(&mut headers, rule);

        let decision = if request.is_preflight() {
            build_preflight_headers(&mut headers, rule, request);
            CorsDecision::StopOk
        } else {
            CorsDecision::Continue
        };

        tracing::trace!(origin, ?matched, ?decision, "evaluated CORS request");

        CorsOutcome {
            decision,
            headers: headers.into_headers(),
        }
    }

    fn build_origin_headers(
        &self,
        headers: &mut HeaderCollection,
        origin: &str,
        rule: &CompiledOriginRule,
        matched: OriginMatch,
    ) {
        // Responses only stop varying by origin when nothing is listed by name
        // and the shared answer carries no credentials.
        let shared = matched == OriginMatch::Wildcard
            && self.is_wildcard_only()
            && !rule.credentials_allowed();

        if shared {
            headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, WILDCARD_ORIGIN);
        } else {
            headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
            headers.add_vary(header::ORIGIN);
        }
    }
}

fn build_credentials_header(headers: &mut HeaderCollection, rule: &CompiledOriginRule) {
    if rule.credentials_allowed() {
        headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
    }
}

fn build_exposed_headers(headers: &mut HeaderCollection, rule: &CompiledOriginRule) {
    if let Some(value) = rule.exposed_headers() {
        headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, value);
    }
}

fn build_max_age_header(headers: &mut HeaderCollection, rule: &CompiledOriginRule) {
    if let Some(value) = rule.max_age() {
        headers.push(header::ACCESS_CONTROL_MAX_AGE, value);
    }
}

fn build_preflight_headers(
    headers: &mut HeaderCollection,
    rule: &CompiledOriginRule,
    request: &RequestContext<'_>,
) {
    if let Some(value) = rule
        .allowed_headers()
        .resolve(request.access_control_request_headers)
    {
        headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
    }
    if let Some(value) = rule
        .allowed_methods()
        .resolve(request.access_control_request_method)
    {
        headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, value);
    }
}

/// Evaluates `request` against `policy`; see [`CompiledPolicy::evaluate`].
pub fn evaluate(policy: &CompiledPolicy, request: &RequestContext<'_>) -> CorsOutcome {
    policy.evaluate(request)
}

#[cfg(test)]
#[path = "evaluator_test.rs"]
mod evaluator_test;
