use crate::headers::HeaderNameList;

/// Header names scripts may read on actual responses, emitted in order as
/// `Access-Control-Expose-Headers`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExposedHeaders(HeaderNameList);

impl ExposedHeaders {
    /// Builds the list, trimming whitespace and removing case-insensitive
    /// duplicates.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(HeaderNameList::new(values))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn header_value(&self) -> Option<String> {
        self.0.header_value()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ExposedHeaders {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Vec<String> as serde::Deserialize>::deserialize(deserializer).map(Self::list)
    }
}

#[cfg(test)]
#[path = "exposed_headers_test.rs"]
mod exposed_headers_test;
