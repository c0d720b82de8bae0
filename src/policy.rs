use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::value;
use crate::evaluator;
use crate::exposed_headers::ExposedHeaders;
use crate::options::{CorsOptions, ValidationError};
use crate::origin::AllowedOrigins;
use crate::outcome::Outcome;
use crate::request::RequestView;

/// Validated, immutable cross-origin policy.
///
/// Built once from [`CorsOptions`] and shared read-only (for example behind an
/// `Arc`) by every request handler. Header values that never change per request
/// are rendered at construction.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    allowed_origins: AllowedOrigins,
    allowed_methods: AllowedMethods,
    allowed_headers: AllowedHeaders,
    exposed_headers: ExposedHeaders,
    allow_credentials: bool,
    max_age: Option<u64>,
    allow_generic_http_requests: bool,
    allow_methods_value: String,
    allow_headers_value: Option<String>,
    expose_headers_value: Option<String>,
}

impl CorsPolicy {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate()?;

        let CorsOptions {
            allowed_origins,
            allowed_methods,
            allowed_headers,
            exposed_headers,
            allow_credentials,
            max_age,
            allow_generic_http_requests,
        } = options;

        let allow_methods_value = allowed_methods.header_value().unwrap_or_default();
        let allow_headers_value = match &allowed_headers {
            AllowedHeaders::Any => None,
            // Declared lists always answer, even when empty.
            AllowedHeaders::List(names) => Some(names.iter().collect::<Vec<_>>().join(", ")),
        };
        let expose_headers_value = exposed_headers.header_value();

        Ok(Self {
            allowed_origins,
            allowed_methods,
            allowed_headers,
            exposed_headers,
            allow_credentials,
            max_age,
            allow_generic_http_requests,
            allow_methods_value,
            allow_headers_value,
            expose_headers_value,
        })
    }

    pub fn evaluate(&self, request: &RequestView<'_>) -> Outcome {
        evaluator::evaluate(request, self)
    }

    pub fn allowed_origins(&self) -> &AllowedOrigins {
        &self.allowed_origins
    }

    pub fn allowed_methods(&self) -> &AllowedMethods {
        &self.allowed_methods
    }

    pub fn allowed_headers(&self) -> &AllowedHeaders {
        &self.allowed_headers
    }

    pub fn exposed_headers(&self) -> &ExposedHeaders {
        &self.exposed_headers
    }

    pub fn allow_credentials(&self) -> bool {
        self.allow_credentials
    }

    pub fn max_age(&self) -> Option<u64> {
        self.max_age
    }

    pub fn allow_generic_http_requests(&self) -> bool {
        self.allow_generic_http_requests
    }

    pub(crate) fn allow_methods_value(&self) -> &str {
        &self.allow_methods_value
    }

    pub(crate) fn allow_headers_value(&self) -> Option<&str> {
        self.allow_headers_value.as_deref()
    }

    pub(crate) fn expose_headers_value(&self) -> Option<&str> {
        self.expose_headers_value.as_deref()
    }

    /// `*` only when any origin is allowed and credentials are off; otherwise
    /// the validated origins themselves.
    pub(crate) fn allow_origin_value(&self, origins: &[&str]) -> String {
        if self.allowed_origins.is_any() && !self.allow_credentials {
            value::WILDCARD.to_string()
        } else {
            origins.join(" ")
        }
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
