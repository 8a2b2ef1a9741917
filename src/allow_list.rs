use crate::util::normalize_list;
use serde::{Deserialize, Deserializer};

/// Configuration for the preflight-only `Access-Control-Allow-Headers` and
/// `Access-Control-Allow-Methods` response values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AllowList {
    /// Unset: echo the browser's `Access-Control-Request-*` value back.
    #[default]
    MirrorRequest,
    /// Never emit the response header.
    Omit,
    /// Emit the configured values, joined once at compile time.
    List(Vec<String>),
}

/// Allowed request headers announced on preflight.
pub type AllowedHeaders = AllowList;

/// Allowed request methods announced on preflight.
pub type AllowedMethods = AllowList;

impl AllowList {
    /// Builds a list from the provided values, trimming whitespace and
    /// removing case-insensitive duplicates. An empty result falls back to
    /// [`AllowList::MirrorRequest`].
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = normalize_list(values);
        if values.is_empty() {
            Self::MirrorRequest
        } else {
            Self::List(values)
        }
    }

    pub fn mirror_request() -> Self {
        Self::MirrorRequest
    }

    pub fn omit() -> Self {
        Self::Omit
    }

    pub fn values(&self) -> Option<&[String]> {
        match self {
            Self::List(values) => Some(values),
            Self::MirrorRequest | Self::Omit => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AllowListRepr {
    Flag(bool),
    Values(Vec<String>),
}

// `null` and `true` mirror the request, `false` omits, an array lists.
impl<'de> Deserialize<'de> for AllowList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<AllowListRepr>::deserialize(deserializer)? {
            None | Some(AllowListRepr::Flag(true)) => Self::MirrorRequest,
            Some(AllowListRepr::Flag(false)) => Self::Omit,
            Some(AllowListRepr::Values(values)) => Self::list(values),
        })
    }
}

#[cfg(test)]
#[path = "allow_list_test.rs"]
mod allow_list_test;
