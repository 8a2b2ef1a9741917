use crate::allow_list::{AllowedHeaders, AllowedMethods};
use serde::{Deserialize, Deserializer};
use std::time::Duration;

/// Access rules applied to one origin (or to the wildcard entry).
///
/// Every field defaults to its permissive value: preflight requests are
/// mirrored, no credentials, nothing exposed and no max age.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OriginRule {
    /// Headers the actual request may use, announced on preflight.
    pub allowed_headers: AllowedHeaders,
    /// Methods the actual request may use, announced on preflight.
    pub allowed_methods: AllowedMethods,
    /// Whether cookies, HTTP authentication or client certificates may be
    /// sent. Never allowed for the wildcard entry.
    pub credentials_allowed: bool,
    /// Response headers the browser may expose to scripts.
    pub exposed_headers: Vec<String>,
    /// How long a preflight response may be cached. Configured in whole
    /// seconds.
    #[serde(deserialize_with = "deserialize_max_age")]
    pub max_age: Duration,
}

impl OriginRule {
    pub fn new() -> Self {
        Self::default()
    }
}

fn deserialize_max_age<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let seconds = Option::<u64>::deserialize(deserializer)?;
    Ok(seconds.map(Duration::from_secs).unwrap_or_default())
}

#[cfg(test)]
#[path = "rule_test.rs"]
mod rule_test;
