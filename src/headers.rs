use crate::constants::header::CORS_RESPONSE_HEADERS;
use crate::util::normalize_lower;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Response headers in insertion order.
pub type Headers = IndexMap<String, String>;

static CORS_RESPONSE_HEADER_SET: Lazy<HashSet<String>> = Lazy::new(|| {
    CORS_RESPONSE_HEADERS
        .iter()
        .map(|name| normalize_lower(name))
        .collect()
});

/// Returns `true` when `name` is one of the six CORS response headers,
/// compared case-insensitively.
pub fn is_cors_response_header(name: &str) -> bool {
    if name.bytes().any(|byte| byte.is_ascii_uppercase()) || !name.is_ascii() {
        CORS_RESPONSE_HEADER_SET.contains(&normalize_lower(name))
    } else {
        CORS_RESPONSE_HEADER_SET.contains(name)
    }
}

/// Removes every CORS response header from `headers`, keeping the order of
/// the remaining entries.
pub fn strip_cors_headers(headers: &mut Headers) {
    headers.retain(|name, _| !is_cors_response_header(name));
}

/// Ordered, case-insensitively de-duplicated list of header names.
///
/// The first spelling of a name wins and is what gets rendered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderNameList {
    names: IndexMap<String, String>,
}

impl HeaderNameList {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names = IndexMap::new();
        for value in values {
            let trimmed = value.into().trim().to_string();
            if trimmed.is_empty() {
                continue;
            }
            names.entry(normalize_lower(&trimmed)).or_insert(trimmed);
        }

        Self { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(&normalize_lower(name.trim()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.values().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Comma separated header value, `None` when the list is empty.
    pub fn header_value(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.iter().collect::<Vec<_>>().join(", "))
        }
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
