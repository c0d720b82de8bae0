use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::value;
use crate::exposed_headers::ExposedHeaders;
use crate::origin::{AllowedOrigins, OriginMatcher};
use crate::util::is_http_token;
use thiserror::Error;

/// Configuration surface of a [`crate::CorsPolicy`].
///
/// With the `serde` feature the options deserialize from a flat document where
/// `allowed_origins` and `allowed_headers` take either `"*"` or a list of
/// strings and `max_age` is given in seconds. Missing fields keep their
/// defaults.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct CorsOptions {
    pub allowed_origins: AllowedOrigins,
    pub allowed_methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub exposed_headers: ExposedHeaders,
    /// When set, responses never carry a wildcard `Allow-Origin`; the
    /// validated request origin is echoed instead.
    pub allow_credentials: bool,
    /// Preflight cache lifetime in seconds.
    pub max_age: Option<u64>,
    /// Let requests without an `Origin` header, and requests that do not fit a
    /// CORS shape, through untouched instead of rejecting them.
    pub allow_generic_http_requests: bool,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            allowed_origins: AllowedOrigins::Any,
            allowed_methods: AllowedMethods::default(),
            allowed_headers: AllowedHeaders::Any,
            exposed_headers: ExposedHeaders::default(),
            allow_credentials: false,
            max_age: None,
            allow_generic_http_requests: true,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("at least one allowed method must be configured")]
    EmptyMethods,
    #[error("allowed method '{0}' is not a valid HTTP token")]
    InvalidMethodToken(String),
    #[error("allowed header '{0}' is not a valid HTTP header name")]
    InvalidAllowedHeader(String),
    #[error("exposed header '{0}' is not a valid HTTP header name")]
    InvalidExposedHeader(String),
    #[error("allowed headers list cannot contain '*'; use AllowedHeaders::Any instead")]
    AllowedHeadersListCannotContainWildcard,
    #[error("allowed origins list cannot contain '*'; use AllowedOrigins::Any instead")]
    AllowedOriginsListCannotContainWildcard,
}

impl CorsOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.allowed_methods.is_empty() {
            return Err(ValidationError::EmptyMethods);
        }
        if let Some(method) = self
            .allowed_methods
            .iter()
            .find(|method| !is_http_token(method))
        {
            return Err(ValidationError::InvalidMethodToken(method.to_string()));
        }

        if let AllowedOrigins::List(matchers) = &self.allowed_origins
            && matchers.iter().any(is_wildcard_matcher)
        {
            return Err(ValidationError::AllowedOriginsListCannotContainWildcard);
        }

        if let AllowedHeaders::List(names) = &self.allowed_headers {
            for name in names.iter() {
                if name == value::WILDCARD {
                    return Err(ValidationError::AllowedHeadersListCannotContainWildcard);
                }
                if !is_http_token(name) {
                    return Err(ValidationError::InvalidAllowedHeader(name.to_string()));
                }
            }
        }

        if let Some(name) = self
            .exposed_headers
            .iter()
            .find(|name| !is_http_token(name))
        {
            return Err(ValidationError::InvalidExposedHeader(name.to_string()));
        }

        Ok(())
    }
}

fn is_wildcard_matcher(matcher: &OriginMatcher) -> bool {
    matches!(matcher, OriginMatcher::Exact(origin) if origin.trim() == value::WILDCARD)
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
