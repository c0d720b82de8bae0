use std::sync::Arc;

use bunner_cors_filter::{
    AllowedHeaders, AllowedMethods, AllowedOrigins, CorsOptions, CorsPolicy, ExposedHeaders,
    ValidationError,
};

pub type SharedPolicy = Arc<CorsPolicy>;

#[derive(Clone)]
pub struct AppState {
    pub policy: SharedPolicy,
    pub greeting: &'static str,
}

pub fn build_state() -> Result<AppState, ValidationError> {
    let options = CorsOptions {
        allowed_origins: AllowedOrigins::list(["http://api.example.com"]),
        allowed_methods: AllowedMethods::list(["GET", "POST"]),
        allowed_headers: AllowedHeaders::list([
            "Content-Type",
            "X-Requested-With",
            "X-Example-Trace",
        ]),
        exposed_headers: ExposedHeaders::list(["X-Example-Trace"]),
        allow_credentials: true,
        max_age: Some(600),
        allow_generic_http_requests: true,
    };

    let policy = Arc::new(CorsPolicy::new(options)?);

    Ok(AppState {
        policy,
        greeting: "Welcome to the Axum CORS example!",
    })
}

pub mod middleware;
