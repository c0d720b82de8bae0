pub(crate) fn normalize_lower(value: &str) -> String {
    if value.is_ascii() {
        value.to_ascii_lowercase()
    } else {
        value.to_lowercase()
    }
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

/// Splits a serialized origin list (`Origin: a b`) on whitespace.
pub(crate) fn split_origin_list(value: &str) -> Vec<&str> {
    value.split_whitespace().collect()
}

/// Splits a comma separated field-name list, dropping empty members.
pub(crate) fn split_header_list(value: &str) -> Vec<&str> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// Configuration shape shared by the origin and header allow-lists: either the
/// literal `"*"` or an explicit list of values.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(untagged)]
pub(crate) enum WildcardOrList {
    Token(String),
    List(Vec<String>),
}

#[cfg(feature = "serde")]
impl WildcardOrList {
    /// `Ok(None)` stands for the wildcard.
    pub(crate) fn into_list<E: serde::de::Error>(self) -> Result<Option<Vec<String>>, E> {
        match self {
            WildcardOrList::Token(token) if token.trim() == crate::constants::value::WILDCARD => {
                Ok(None)
            }
            WildcardOrList::Token(token) => Err(E::custom(format!(
                "expected \"*\" or a list of values, found \"{token}\""
            ))),
            WildcardOrList::List(values) => Ok(Some(values)),
        }
    }
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
