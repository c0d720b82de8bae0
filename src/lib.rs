pub mod adapter;
mod allowed_headers;
mod allowed_methods;
pub mod constants;
mod evaluator;
mod exposed_headers;
mod headers;
mod options;
mod origin;
mod outcome;
mod policy;
mod request;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use evaluator::evaluate;
pub use exposed_headers::ExposedHeaders;
pub use headers::{HeaderNameList, Headers, is_cors_response_header, strip_cors_headers};
pub use options::{CorsOptions, ValidationError};
pub use origin::{AllowedOrigins, OriginMatcher, PatternError};
pub use outcome::{ActualResponse, Decoration, Outcome, PreflightResponse, Rejection};
pub use policy::CorsPolicy;
pub use request::RequestView;
