use origin_cors::constants::method;
use origin_cors::{AllowList, CompiledPolicy, CorsOutcome, OriginRule, Policy, RequestContext};
use std::time::Duration;

#[derive(Default)]
pub struct PolicyBuilder {
    policy: Policy,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: &str, rule: impl Into<Option<OriginRule>>) -> Self {
        self.policy = self.policy.origin(origin, rule);
        self
    }

    pub fn wildcard(mut self, rule: impl Into<Option<OriginRule>>) -> Self {
        self.policy = self.policy.wildcard(rule);
        self
    }

    pub fn raw(self) -> Policy {
        self.policy
    }

    pub fn build(self) -> CompiledPolicy {
        self.policy.compile().expect("valid CORS policy")
    }
}

#[derive(Default)]
pub struct RuleBuilder {
    rule: OriginRule,
}

impl RuleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allowed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rule.allowed_headers = AllowList::list(headers);
        self
    }

    pub fn allowed_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rule.allowed_methods = AllowList::list(methods);
        self
    }

    pub fn omit_allowed_headers(mut self) -> Self {
        self.rule.allowed_headers = AllowList::omit();
        self
    }

    pub fn omit_allowed_methods(mut self) -> Self {
        self.rule.allowed_methods = AllowList::omit();
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.rule.credentials_allowed = enabled;
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rule.exposed_headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.rule.max_age = Duration::from_secs(seconds);
        self
    }

    pub fn build(self) -> OriginRule {
        self.rule
    }
}

impl From<RuleBuilder> for Option<OriginRule> {
    fn from(builder: RuleBuilder) -> Self {
        Some(builder.build())
    }
}

pub struct SimpleRequestBuilder {
    method: String,
    origin: Option<String>,
}

impl SimpleRequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::GET.into(),
            origin: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn evaluate(self, policy: &CompiledPolicy) -> CorsOutcome {
        let ctx = RequestContext::new(&self.method, self.origin.as_deref());
        policy.evaluate(&ctx)
    }
}

#[derive(Default)]
pub struct PreflightRequestBuilder {
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn context(&self) -> RequestContext<'_> {
        RequestContext {
            method: method::OPTIONS,
            origin: self.origin.as_deref(),
            access_control_request_method: self.request_method.as_deref(),
            access_control_request_headers: self.request_headers.as_deref(),
        }
    }

    pub fn evaluate(self, policy: &CompiledPolicy) -> CorsOutcome {
        policy.evaluate(&self.context())
    }
}

pub fn policy() -> PolicyBuilder {
    PolicyBuilder::new()
}

pub fn rule() -> RuleBuilder {
    RuleBuilder::new()
}

pub fn simple_request() -> SimpleRequestBuilder {
    SimpleRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}
