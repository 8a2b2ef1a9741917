use crate::compiled::{CompiledOriginRule, CompiledPolicy};
use crate::constants::WILDCARD_ORIGIN;
use crate::result::ValidationError;
use crate::rule::OriginRule;
use crate::util::is_origin_key;
use indexmap::IndexMap;
use serde::Deserialize;

/// Human-authored CORS configuration: origin (or `"*"`) to its rule.
///
/// A `None` rule means permissive defaults for that origin. Origins are
/// matched exactly and case-sensitively against the request's `Origin`
/// header; `"*"` applies to every origin that is not listed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Policy {
    origins: IndexMap<String, Option<OriginRule>>,
}

impl Policy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allows every origin and mirrors preflight requests.
    pub fn permissive() -> Self {
        Self::new().wildcard(None)
    }

    pub fn origin<S, R>(mut self, origin: S, rule: R) -> Self
    where
        S: Into<String>,
        R: Into<Option<OriginRule>>,
    {
        self.insert(origin, rule);
        self
    }

    pub fn wildcard<R>(self, rule: R) -> Self
    where
        R: Into<Option<OriginRule>>,
    {
        self.origin(WILDCARD_ORIGIN, rule)
    }

    /// Sets the rule for `origin`, returning the one it replaces.
    pub fn insert<S, R>(&mut self, origin: S, rule: R) -> Option<Option<OriginRule>>
    where
        S: Into<String>,
        R: Into<Option<OriginRule>>,
    {
        self.origins.insert(origin.into(), rule.into())
    }

    pub fn get(&self, origin: &str) -> Option<Option<&OriginRule>> {
        self.origins.get(origin).map(Option::as_ref)
    }

    pub fn len(&self) -> usize {
        self.origins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&OriginRule>)> {
        self.origins
            .iter()
            .map(|(origin, rule)| (origin.as_str(), rule.as_ref()))
    }

    /// Precomputes every header value so request evaluation does no
    /// formatting.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::CredentialsWithWildcardOrigin`] when the
    /// wildcard rule allows credentials, and the other [`ValidationError`]
    /// variants for malformed origin keys, methods or header names.
    pub fn compile(&self) -> Result<CompiledPolicy, ValidationError> {
        if self.origins.is_empty() {
            return Ok(CompiledPolicy::permissive());
        }

        let default_rule = OriginRule::default();
        let mut origins = IndexMap::with_capacity(self.origins.len());
        let mut wildcard = None;

        for (origin, rule) in &self.origins {
            let rule = rule.as_ref().unwrap_or(&default_rule);

            if origin == WILDCARD_ORIGIN {
                if rule.credentials_allowed {
                    return Err(ValidationError::CredentialsWithWildcardOrigin);
                }
                wildcard = Some(CompiledOriginRule::compile(rule)?);
                continue;
            }

            if origin.trim().is_empty() {
                return Err(ValidationError::EmptyOrigin);
            }
            if !is_origin_key(origin) {
                return Err(ValidationError::InvalidOrigin(origin.clone()));
            }

            origins.insert(origin.clone(), CompiledOriginRule::compile(rule)?);
        }

        tracing::debug!(
            origins = origins.len(),
            wildcard = wildcard.is_some(),
            "compiled CORS policy"
        );

        Ok(CompiledPolicy::from_parts(origins, wildcard))
    }
}

impl<S> FromIterator<(S, Option<OriginRule>)> for Policy
where
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (S, Option<OriginRule>)>>(iter: I) -> Self {
        Self {
            origins: iter
                .into_iter()
                .map(|(origin, rule)| (origin.into(), rule))
                .collect(),
        }
    }
}

/// Compiles `policy`; see [`Policy::compile`].
///
/// # Errors
///
/// Propagates the [`ValidationError`] raised by [`Policy::compile`].
pub fn compile(policy: &Policy) -> Result<CompiledPolicy, ValidationError> {
    policy.compile()
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
