use std::collections::HashSet;

pub(crate) fn normalize_lower(value: &str) -> String {
    if value.is_ascii() {
        let mut owned = value.to_owned();
        owned.make_ascii_lowercase();
        owned
    } else {
        value.to_lowercase()
    }
}

/// Trims every entry, drops blanks and removes case-insensitive duplicates.
/// The first spelling of a duplicated value is the one kept.
pub(crate) fn normalize_list<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    let mut deduped = Vec::new();

    for value in values {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(normalize_lower(trimmed)) {
            deduped.push(trimmed.to_string());
        }
    }

    deduped
}

pub(crate) fn is_http_token(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|byte| {
            matches!(
                byte,
                b'0'..=b'9'
                    | b'A'..=b'Z'
                    | b'a'..=b'z'
                    | b'!'
                    | b'#'
                    | b'$'
                    | b'%'
                    | b'&'
                    | b'\''
                    | b'*'
                    | b'+'
                    | b'-'
                    | b'.'
                    | b'^'
                    | b'_'
                    | b'`'
                    | b'|'
                    | b'~'
            )
        })
}

/// Origin keys are matched byte-for-byte against the `Origin` header, so they
/// must be usable as a header value and carry no whitespace.
pub(crate) fn is_origin_key(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|byte| byte.is_ascii_graphic())
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
