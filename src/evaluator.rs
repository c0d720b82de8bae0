use crate::allowed_headers::AllowedHeaders;
use crate::outcome::{ActualResponse, Decoration, Outcome, PreflightResponse, Rejection};
use crate::policy::CorsPolicy;
use crate::request::RequestView;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RequestKind {
    Preflight,
    Actual,
    NotCors,
    Unrecognized,
}

/// First match wins. A preflight needs exactly one origin; an `OPTIONS`
/// request listing several origins falls through to `Unrecognized`.
pub(crate) fn classify(request: &RequestView<'_>) -> RequestKind {
    let has_requested_method = request.requested_method.is_some();

    if request.is_options() && request.origins.len() == 1 && has_requested_method {
        RequestKind::Preflight
    } else if !request.origins.is_empty() && !has_requested_method {
        RequestKind::Actual
    } else if request.origins.is_empty() {
        RequestKind::NotCors
    } else {
        RequestKind::Unrecognized
    }
}

/// Classifies `request` and validates it against `policy`.
///
/// Pure and reentrant: the same inputs always produce the same [`Outcome`].
pub fn evaluate(request: &RequestView<'_>, policy: &CorsPolicy) -> Outcome {
    let kind = classify(request);
    trace!(?kind, method = request.method, "classified request");

    match kind {
        RequestKind::Preflight => evaluate_preflight(request, policy),
        RequestKind::Actual => evaluate_actual(request, policy),
        RequestKind::NotCors | RequestKind::Unrecognized => evaluate_generic(kind, policy),
    }
}

fn evaluate_preflight(request: &RequestView<'_>, policy: &CorsPolicy) -> Outcome {
    if !policy.allowed_origins().allows_all(&request.origins) {
        return reject_origin(request);
    }

    let requested_method = request.requested_method.unwrap_or_default();
    if !policy.allowed_methods().contains(requested_method) {
        debug!(method = requested_method, "rejected preflight: method not allowed");
        return Outcome::Rejected(Rejection::InvalidMethod(requested_method.to_string()));
    }

    let disallowed = policy
        .allowed_headers()
        .disallowed(&request.requested_headers);
    if !disallowed.is_empty() {
        debug!(headers = ?disallowed, "rejected preflight: headers not allowed");
        return Outcome::Rejected(Rejection::InvalidHeaders(
            disallowed.into_iter().map(str::to_string).collect(),
        ));
    }

    let allow_headers = match policy.allowed_headers() {
        AllowedHeaders::List(_) => policy.allow_headers_value().map(str::to_string),
        AllowedHeaders::Any if request.requested_headers.is_empty() => None,
        AllowedHeaders::Any => Some(request.requested_headers.join(", ")),
    };

    Outcome::PreflightAccepted(PreflightResponse {
        allow_origin: policy.allow_origin_value(&request.origins),
        allow_methods: policy.allow_methods_value().to_string(),
        allow_headers,
        max_age: policy.max_age(),
        allow_credentials: policy.allow_credentials(),
    })
}

fn evaluate_actual(request: &RequestView<'_>, policy: &CorsPolicy) -> Outcome {
    if !policy.allowed_origins().allows_all(&request.origins) {
        return reject_origin(request);
    }

    Outcome::ActualRequestAccepted(ActualResponse {
        allow_origin: policy.allow_origin_value(&request.origins),
        expose_headers: policy.expose_headers_value().map(str::to_string),
        allow_credentials: policy.allow_credentials(),
        decoration: Decoration::Cors {
            origins: owned(&request.origins),
        },
    })
}

fn evaluate_generic(kind: RequestKind, policy: &CorsPolicy) -> Outcome {
    if policy.allow_generic_http_requests() {
        Outcome::NotCors {
            decoration: Decoration::NotCors,
        }
    } else {
        debug!(?kind, "rejected request: generic HTTP requests are not allowed");
        Outcome::Rejected(Rejection::Malformed)
    }
}

fn reject_origin(request: &RequestView<'_>) -> Outcome {
    debug!(origins = ?request.origins, "rejected request: origin not allowed");
    Outcome::Rejected(Rejection::InvalidOrigin(owned(&request.origins)))
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[cfg(test)]
#[path = "evaluator_test.rs"]
mod evaluator_test;
