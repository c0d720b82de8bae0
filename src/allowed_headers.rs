use crate::headers::HeaderNameList;

/// Which header names a preflight may request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AllowedHeaders {
    /// Every name is allowed. On preflight the requested names are echoed
    /// back rather than emitting `*`.
    #[default]
    Any,
    /// Explicit, case-insensitive allow-list. The whole list is emitted on
    /// every successful preflight.
    List(HeaderNameList),
}

impl AllowedHeaders {
    pub fn any() -> Self {
        Self::Any
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(HeaderNameList::new(values))
    }

    pub fn is_any(&self) -> bool {
        matches!(self, AllowedHeaders::Any)
    }

    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Any => true,
            Self::List(allowed) => allowed.contains(name),
        }
    }

    /// Returns every requested name that is not allowed, in request order.
    pub fn disallowed<'a>(&self, requested: &[&'a str]) -> Vec<&'a str> {
        requested
            .iter()
            .copied()
            .filter(|name| !self.matches(name))
            .collect()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for AllowedHeaders {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = <crate::util::WildcardOrList as serde::Deserialize>::deserialize(deserializer)?;
        Ok(match raw.into_list::<D::Error>()? {
            None => AllowedHeaders::Any,
            Some(values) => AllowedHeaders::list(values),
        })
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
