use regex_automata::meta::{BuildError, Regex};
use std::time::{Duration, Instant};
use thiserror::Error;

const PATTERN_COMPILE_BUDGET: Duration = Duration::from_millis(100);
const MAX_PATTERN_LENGTH: usize = 50_000;
const MAX_ORIGIN_LENGTH: usize = 4_096;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to compile origin pattern")]
    Build(#[source] Box<BuildError>),
    #[error("compiling origin pattern took {elapsed:?}, over the {budget:?} budget")]
    Timeout { elapsed: Duration, budget: Duration },
    #[error("origin pattern length {length} exceeds maximum allowed {max}")]
    TooLong { length: usize, max: usize },
}

/// A single entry of an explicit origin allow-list.
#[derive(Clone, Debug)]
pub enum OriginMatcher {
    /// Byte-exact comparison; origins are treated as opaque strings.
    Exact(String),
    Pattern(Regex),
}

impl OriginMatcher {
    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into())
    }

    pub fn pattern(regex: Regex) -> Self {
        Self::Pattern(regex)
    }

    /// Compiles `pattern` case-insensitively. Anchoring is up to the caller.
    pub fn pattern_str(pattern: &str) -> Result<Self, PatternError> {
        Self::compile_pattern(pattern, PATTERN_COMPILE_BUDGET).map(Self::Pattern)
    }

    fn compile_pattern(pattern: &str, budget: Duration) -> Result<Regex, PatternError> {
        if pattern.len() > MAX_PATTERN_LENGTH {
            return Err(PatternError::TooLong {
                length: pattern.len(),
                max: MAX_PATTERN_LENGTH,
            });
        }

        let started = Instant::now();
        let regex = Regex::new(&format!("(?i:{pattern})"))
            .map_err(|err| PatternError::Build(Box::new(err)))?;
        let elapsed = started.elapsed();
        if elapsed > budget {
            return Err(PatternError::Timeout { elapsed, budget });
        }

        Ok(regex)
    }

    #[cfg(test)]
    pub(crate) fn pattern_str_with_budget(
        pattern: &str,
        budget: Duration,
    ) -> Result<Self, PatternError> {
        Self::compile_pattern(pattern, budget).map(Self::Pattern)
    }

    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            OriginMatcher::Exact(value) => value == candidate,
            OriginMatcher::Pattern(regex) => regex.is_match(candidate.as_bytes()),
        }
    }
}

impl From<String> for OriginMatcher {
    fn from(value: String) -> Self {
        OriginMatcher::Exact(value)
    }
}

impl From<&str> for OriginMatcher {
    fn from(value: &str) -> Self {
        OriginMatcher::Exact(value.to_owned())
    }
}

/// Which request origins a policy accepts.
#[derive(Clone, Debug, Default)]
pub enum AllowedOrigins {
    #[default]
    Any,
    List(Vec<OriginMatcher>),
}

impl AllowedOrigins {
    pub fn any() -> Self {
        Self::Any
    }

    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::List(vec![OriginMatcher::exact(value)])
    }

    pub fn list<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OriginMatcher>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    pub fn is_any(&self) -> bool {
        matches!(self, AllowedOrigins::Any)
    }

    pub fn matches(&self, origin: &str) -> bool {
        match self {
            AllowedOrigins::Any => true,
            AllowedOrigins::List(matchers) => {
                origin.len() <= MAX_ORIGIN_LENGTH
                    && matchers.iter().any(|matcher| matcher.matches(origin))
            }
        }
    }

    /// An origin list is allowed only when it is non-empty and every member
    /// matches.
    pub fn allows_all(&self, origins: &[&str]) -> bool {
        !origins.is_empty() && origins.iter().all(|origin| self.matches(origin))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for AllowedOrigins {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = <crate::util::WildcardOrList as serde::Deserialize>::deserialize(deserializer)?;
        Ok(match raw.into_list::<D::Error>()? {
            None => AllowedOrigins::Any,
            Some(values) => AllowedOrigins::list(values),
        })
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
