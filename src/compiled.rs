use crate::allow_list::AllowList;
use crate::constants::LIST_SEPARATOR;
use crate::result::ValidationError;
use crate::rule::OriginRule;
use crate::util::{is_http_token, normalize_list};
use indexmap::IndexMap;
use std::time::Duration;

/// Precomputed preflight header value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreflightValue {
    /// Echo the matching `Access-Control-Request-*` header.
    Mirror,
    /// Do not write the header.
    Omit,
    Fixed(String),
}

impl PreflightValue {
    fn compile(
        list: &AllowList,
        invalid: fn(String) -> ValidationError,
    ) -> Result<Self, ValidationError> {
        match list {
            AllowList::MirrorRequest => Ok(Self::Mirror),
            AllowList::Omit => Ok(Self::Omit),
            AllowList::List(values) => {
                let values = normalize_list(values.iter().map(String::as_str));
                ensure_tokens(&values, invalid)?;
                if values.is_empty() {
                    Ok(Self::Mirror)
                } else {
                    Ok(Self::Fixed(values.join(LIST_SEPARATOR)))
                }
            }
        }
    }

    /// Value to write given what the browser requested, if anything.
    pub fn resolve<'a>(&'a self, requested: Option<&'a str>) -> Option<&'a str> {
        match self {
            Self::Mirror => requested.filter(|value| !value.is_empty()),
            Self::Omit => None,
            Self::Fixed(value) => Some(value),
        }
    }
}

/// An [`OriginRule`] with every header value joined and formatted once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledOriginRule {
    allowed_headers: PreflightValue,
    allowed_methods: PreflightValue,
    credentials_allowed: bool,
    exposed_headers: Option<String>,
    max_age: Option<String>,
}

impl Default for CompiledOriginRule {
    fn default() -> Self {
        Self {
            allowed_headers: PreflightValue::Mirror,
            allowed_methods: PreflightValue::Mirror,
            credentials_allowed: false,
            exposed_headers: None,
            max_age: None,
        }
    }
}

impl CompiledOriginRule {
    pub(crate) fn compile(rule: &OriginRule) -> Result<Self, ValidationError> {
        let exposed = normalize_list(rule.exposed_headers.iter().map(String::as_str));
        ensure_tokens(&exposed, ValidationError::InvalidHeaderName)?;

        Ok(Self {
            allowed_headers: PreflightValue::compile(
                &rule.allowed_headers,
                ValidationError::InvalidHeaderName,
            )?,
            allowed_methods: PreflightValue::compile(
                &rule.allowed_methods,
                ValidationError::InvalidMethod,
            )?,
            credentials_allowed: rule.credentials_allowed,
            exposed_headers: (!exposed.is_empty()).then(|| exposed.join(LIST_SEPARATOR)),
            max_age: match max_age_seconds(rule.max_age) {
                0 => None,
                seconds => Some(seconds.to_string()),
            },
        })
    }

    pub fn allowed_headers(&self) -> &PreflightValue {
        &self.allowed_headers
    }

    pub fn allowed_methods(&self) -> &PreflightValue {
        &self.allowed_methods
    }

    pub fn credentials_allowed(&self) -> bool {
        self.credentials_allowed
    }

    pub fn exposed_headers(&self) -> Option<&str> {
        self.exposed_headers.as_deref()
    }

    pub fn max_age(&self) -> Option<&str> {
        self.max_age.as_deref()
    }
}

fn ensure_tokens(
    values: &[String],
    invalid: fn(String) -> ValidationError,
) -> Result<(), ValidationError> {
    match values.iter().find(|value| !is_http_token(value)) {
        Some(value) => Err(invalid(value.clone())),
        None => Ok(()),
    }
}

// Rounds to the nearest whole second, ties to even.
fn max_age_seconds(max_age: Duration) -> u64 {
    const HALF: u32 = 500_000_000;
    let seconds = max_age.as_secs();
    let nanos = max_age.subsec_nanos();
    if nanos > HALF || (nanos == HALF && seconds % 2 == 1) {
        seconds.saturating_add(1)
    } else {
        seconds
    }
}

/// How the rule for a request origin was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OriginMatch {
    Exact,
    Wildcard,
}

/// Request-ready policy. Immutable and safe to share between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPolicy {
    origins: IndexMap<String, CompiledOriginRule>,
    wildcard: Option<CompiledOriginRule>,
}

impl Default for CompiledPolicy {
    fn default() -> Self {
        Self::permissive()
    }
}

impl CompiledPolicy {
    /// A lone wildcard entry with default rules.
    pub fn permissive() -> Self {
        Self::from_parts(IndexMap::new(), Some(CompiledOriginRule::default()))
    }

    pub(crate) fn from_parts(
        origins: IndexMap<String, CompiledOriginRule>,
        wildcard: Option<CompiledOriginRule>,
    ) -> Self {
        Self { origins, wildcard }
    }

    /// Exact match first, then the wildcard entry.
    pub fn resolve(&self, origin: &str) -> Option<(&CompiledOriginRule, OriginMatch)> {
        if let Some(rule) = self.origins.get(origin) {
            return Some((rule, OriginMatch::Exact));
        }
        self.wildcard
            .as_ref()
            .map(|rule| (rule, OriginMatch::Wildcard))
    }

    pub fn exact(&self, origin: &str) -> Option<&CompiledOriginRule> {
        self.origins.get(origin)
    }

    pub fn wildcard(&self) -> Option<&CompiledOriginRule> {
        self.wildcard.as_ref()
    }

    /// True when no origin is listed by name, so responses do not differ per
    /// origin.
    pub fn is_wildcard_only(&self) -> bool {
        self.origins.is_empty() && self.wildcard.is_some()
    }

    pub fn origins(&self) -> impl Iterator<Item = &str> {
        self.origins.keys().map(String::as_str)
    }
}

#[cfg(test)]
#[path = "compiled_test.rs"]
mod compiled_test;
