use crate::constants::{header, value};
use crate::headers::Headers;
use thiserror::Error;

/// Tells downstream handlers whether the request was recognised as CORS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoration {
    NotCors,
    Cors { origins: Vec<String> },
}

impl Decoration {
    pub fn is_cors(&self) -> bool {
        matches!(self, Decoration::Cors { .. })
    }

    /// Validated request origins; empty for non-CORS requests.
    pub fn origins(&self) -> &[String] {
        match self {
            Decoration::NotCors => &[],
            Decoration::Cors { origins } => origins,
        }
    }
}

/// Headers for an accepted preflight request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreflightResponse {
    pub allow_origin: String,
    pub allow_methods: String,
    pub allow_headers: Option<String>,
    pub max_age: Option<u64>,
    pub allow_credentials: bool,
}

impl PreflightResponse {
    pub fn headers(&self) -> Headers {
        let mut headers = Headers::with_capacity(5);
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN.to_string(),
            self.allow_origin.clone(),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS.to_string(),
            self.allow_methods.clone(),
        );
        if let Some(allow_headers) = &self.allow_headers {
            headers.insert(
                header::ACCESS_CONTROL_ALLOW_HEADERS.to_string(),
                allow_headers.clone(),
            );
        }
        if let Some(max_age) = self.max_age {
            headers.insert(
                header::ACCESS_CONTROL_MAX_AGE.to_string(),
                max_age.to_string(),
            );
        }
        if self.allow_credentials {
            headers.insert(
                header::ACCESS_CONTROL_ALLOW_CREDENTIALS.to_string(),
                value::TRUE.to_string(),
            );
        }
        headers
    }
}

/// Headers for an accepted actual (non-preflight) request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActualResponse {
    pub allow_origin: String,
    pub expose_headers: Option<String>,
    pub allow_credentials: bool,
    pub decoration: Decoration,
}

impl ActualResponse {
    pub fn headers(&self) -> Headers {
        let mut headers = Headers::with_capacity(3);
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN.to_string(),
            self.allow_origin.clone(),
        );
        if let Some(expose_headers) = &self.expose_headers {
            headers.insert(
                header::ACCESS_CONTROL_EXPOSE_HEADERS.to_string(),
                expose_headers.clone(),
            );
        }
        if self.allow_credentials {
            headers.insert(
                header::ACCESS_CONTROL_ALLOW_CREDENTIALS.to_string(),
                value::TRUE.to_string(),
            );
        }
        headers
    }
}

/// Why a request was turned away. `Display` renders the body adapters send
/// with the 400 response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("CORS: malformed request")]
    Malformed,
    #[error("CORS: invalid origin '{}'", render_origins(.0))]
    InvalidOrigin(Vec<String>),
    #[error("CORS: invalid method '{0}'")]
    InvalidMethod(String),
    #[error("CORS: invalid headers '{}'", render_headers(.0))]
    InvalidHeaders(Vec<String>),
}

fn render_origins(origins: &[String]) -> String {
    if origins.is_empty() {
        value::NULL_ORIGIN.to_string()
    } else {
        origins.join(" ")
    }
}

fn render_headers(headers: &[String]) -> String {
    headers.join(" ")
}

/// Result of evaluating one request against a policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    PreflightAccepted(PreflightResponse),
    ActualRequestAccepted(ActualResponse),
    NotCors { decoration: Decoration },
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected(_))
    }

    /// Computed CORS headers; empty for pass-through and rejections.
    pub fn headers(&self) -> Headers {
        match self {
            Outcome::PreflightAccepted(response) => response.headers(),
            Outcome::ActualRequestAccepted(response) => response.headers(),
            Outcome::NotCors { .. } | Outcome::Rejected(_) => Headers::new(),
        }
    }

    pub fn decoration(&self) -> Option<&Decoration> {
        match self {
            Outcome::ActualRequestAccepted(response) => Some(&response.decoration),
            Outcome::NotCors { decoration } => Some(decoration),
            Outcome::PreflightAccepted(_) | Outcome::Rejected(_) => None,
        }
    }
}

#[cfg(test)]
#[path = "outcome_test.rs"]
mod outcome_test;
