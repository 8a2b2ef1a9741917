use origin_cors::Headers;
use origin_cors::constants::header;
use std::collections::HashSet;

pub fn header_value<'a>(headers: &'a Headers, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

pub fn has_header(headers: &Headers, name: &str) -> bool {
    header_value(headers, name).is_some()
}

pub fn assert_header_eq(headers: &Headers, name: &str, expected: &str) {
    assert_eq!(
        header_value(headers, name),
        Some(expected),
        "unexpected value for {name}"
    );
}

pub fn vary_values(headers: &Headers) -> HashSet<String> {
    header_value(headers, header::VARY)
        .map(|value| {
            value
                .split(',')
                .map(|part| part.trim().to_string())
                .filter(|part| !part.is_empty())
                .collect::<HashSet<_>>()
        })
        .unwrap_or_default()
}

pub fn assert_no_cors_headers(headers: &Headers) {
    let leaked: Vec<_> = headers
        .keys()
        .filter(|name| {
            name.to_ascii_lowercase().starts_with("access-control-")
                || name.eq_ignore_ascii_case(header::VARY)
        })
        .collect();
    assert!(leaked.is_empty(), "unexpected CORS headers: {leaked:?}");
}
