use bunner_cors_filter::constants::method;
use bunner_cors_filter::{
    AllowedHeaders, AllowedMethods, AllowedOrigins, CorsOptions, CorsPolicy, ExposedHeaders,
    Outcome, RequestView,
};

#[derive(Default)]
pub struct PolicyBuilder {
    options: CorsOptions,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origins(mut self, origins: AllowedOrigins) -> Self {
        self.options.allowed_origins = origins;
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.allowed_methods = AllowedMethods::list(methods);
        self
    }

    pub fn allowed_headers(mut self, headers: AllowedHeaders) -> Self {
        self.options.allowed_headers = headers;
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.exposed_headers = ExposedHeaders::list(headers);
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.options.allow_credentials = enabled;
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.options.max_age = Some(seconds);
        self
    }

    pub fn generic_requests(mut self, enabled: bool) -> Self {
        self.options.allow_generic_http_requests = enabled;
        self
    }

    pub fn build(self) -> CorsPolicy {
        CorsPolicy::new(self.options).expect("valid CORS configuration")
    }
}

pub struct ActualRequestBuilder {
    method: String,
    origins: Vec<String>,
}

impl ActualRequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::GET.into(),
            origins: Vec::new(),
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origins.push(origin.into());
        self
    }

    pub fn evaluate(self, policy: &CorsPolicy) -> Outcome {
        let view = RequestView {
            method: &self.method,
            origins: self.origins.iter().map(String::as_str).collect(),
            requested_method: None,
            requested_headers: Vec::new(),
        };
        policy.evaluate(&view)
    }
}

#[derive(Default)]
pub struct PreflightRequestBuilder {
    origins: Vec<String>,
    request_method: Option<String>,
    request_headers: Vec<String>,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origins.push(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_header(mut self, name: impl Into<String>) -> Self {
        self.request_headers.push(name.into());
        self
    }

    pub fn evaluate(self, policy: &CorsPolicy) -> Outcome {
        let view = RequestView {
            method: method::OPTIONS,
            origins: self.origins.iter().map(String::as_str).collect(),
            requested_method: self.request_method.as_deref(),
            requested_headers: self.request_headers.iter().map(String::as_str).collect(),
        };
        policy.evaluate(&view)
    }
}

pub fn policy() -> PolicyBuilder {
    PolicyBuilder::new()
}

pub fn actual_request() -> ActualRequestBuilder {
    ActualRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}
