use crate::constants::method;
use indexmap::IndexSet;

/// Methods a preflight may request, emitted in full as
/// `Access-Control-Allow-Methods`.
///
/// Membership is case-sensitive: method tokens are case-sensitive in HTTP and
/// the configured spelling is what gets echoed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllowedMethods {
    methods: IndexSet<String>,
}

impl AllowedMethods {
    /// Builds the set in insertion order, trimming values and skipping empty
    /// and duplicate entries.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let methods = values
            .into_iter()
            .map(|value| value.into().trim().to_string())
            .filter(|value| !value.is_empty())
            .collect();

        Self { methods }
    }

    pub fn contains(&self, method: &str) -> bool {
        self.methods.contains(method.trim())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.methods.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    pub fn header_value(&self) -> Option<String> {
        if self.methods.is_empty() {
            None
        } else {
            Some(self.iter().collect::<Vec<_>>().join(", "))
        }
    }
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::list([
            method::GET,
            method::HEAD,
            method::PUT,
            method::PATCH,
            method::POST,
            method::DELETE,
        ])
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for AllowedMethods {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Vec<String> as serde::Deserialize>::deserialize(deserializer).map(Self::list)
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
