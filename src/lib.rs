//! Per-origin CORS policy engine.
//!
//! A [`Policy`] maps origins (plus the `"*"` wildcard) to [`OriginRule`]s.
//! Compiling it yields a [`CompiledPolicy`] whose header values are formatted
//! once; evaluating a request against it returns a [`CorsOutcome`] holding
//! the headers to write and whether the handler chain continues, stops after
//! answering a preflight, or rejects the request.

mod allow_list;
mod compiled;
pub mod constants;
mod context;
mod evaluator;
mod handle;
mod headers;
#[cfg(feature = "http")]
mod http_support;
mod policy;
mod result;
mod rule;
mod util;

pub use allow_list::{AllowList, AllowedHeaders, AllowedMethods};
pub use compiled::{CompiledOriginRule, CompiledPolicy, OriginMatch, PreflightValue};
pub use context::RequestContext;
pub use evaluator::evaluate;
pub use handle::PolicyHandle;
pub use headers::Headers;
#[cfg(feature = "http")]
pub use http_support::OwnedRequestContext;
pub use policy::{Policy, compile};
pub use result::{CorsDecision, CorsOutcome, Rejection, ValidationError};
pub use rule::OriginRule;
