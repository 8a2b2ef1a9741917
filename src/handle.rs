use crate::compiled::CompiledPolicy;
use crate::context::RequestContext;
use crate::policy::Policy;
use crate::result::{CorsOutcome, ValidationError};
use arc_swap::ArcSwap;
use std::sync::Arc;

/// Owner of the installed policy.
///
/// Readers load a snapshot without locking; installing a new policy swaps
/// the reference atomically, so a request sees either the old or the new
/// policy in full.
#[derive(Debug)]
pub struct PolicyHandle {
    current: ArcSwap<CompiledPolicy>,
}

impl Default for PolicyHandle {
    fn default() -> Self {
        Self::new(CompiledPolicy::permissive())
    }
}

impl PolicyHandle {
    pub fn new(policy: CompiledPolicy) -> Self {
        Self {
            current: ArcSwap::from_pointee(policy),
        }
    }

    /// # Errors
    ///
    /// Returns the [`ValidationError`] raised while compiling `policy`.
    pub fn from_policy(policy: &Policy) -> Result<Self, ValidationError> {
        Ok(Self::new(policy.compile()?))
    }

    /// Compiles and installs `policy`. The previous policy stays in force
    /// when compilation fails.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] raised while compiling `policy`.
    pub fn install(&self, policy: &Policy) -> Result<(), ValidationError> {
        let compiled = policy.compile().inspect_err(|err| {
            tracing::warn!(error = %err, "refusing to install CORS policy");
        })?;
        tracing::info!(
            origins = compiled.origins().count(),
            wildcard = compiled.wildcard().is_some(),
            "installed CORS policy"
        );
        self.current.store(Arc::new(compiled));
        Ok(())
    }

    /// Installs an already compiled policy, returning the one it replaces.
    pub fn replace(&self, policy: Arc<CompiledPolicy>) -> Arc<CompiledPolicy> {
        self.current.swap(policy)
    }

    pub fn current(&self) -> Arc<CompiledPolicy> {
        self.current.load_full()
    }

    pub fn evaluate(&self, request: &RequestContext<'_>) -> CorsOutcome {
        self.current.load().evaluate(request)
    }

    /// Evaluates against `scoped` when a local policy applies to this call,
    /// otherwise against the installed one.
    pub fn evaluate_scoped(
        &self,
        scoped: Option<&CompiledPolicy>,
        request: &RequestContext<'_>,
    ) -> CorsOutcome {
        match scoped {
            Some(policy) => policy.evaluate(request),
            None => self.evaluate(request),
        }
    }
}

#[cfg(test)]
#[path = "handle_test.rs"]
mod handle_test;
