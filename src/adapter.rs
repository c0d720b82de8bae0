//! Turns an [`Outcome`] into what an HTTP stack has to do with the request.
//!
//! Nothing here touches a concrete server type; integrations translate
//! [`Action`] into their own request and response values.

use crate::headers::{Headers, strip_cors_headers};
use crate::outcome::{Decoration, Outcome};

pub const PREFLIGHT_STATUS: u16 = 200;
pub const REJECTION_STATUS: u16 = 400;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Answer immediately without calling the inner handler.
    Respond {
        status: u16,
        headers: Headers,
        body: String,
    },
    /// Call the inner handler, hand it `decoration`, then merge `headers` into
    /// its response with [`merge_actual_headers`].
    Forward {
        decoration: Decoration,
        headers: Headers,
    },
}

impl From<Outcome> for Action {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::PreflightAccepted(response) => Action::Respond {
                status: PREFLIGHT_STATUS,
                headers: response.headers(),
                body: String::new(),
            },
            Outcome::ActualRequestAccepted(response) => {
                let headers = response.headers();
                Action::Forward {
                    decoration: response.decoration,
                    headers,
                }
            }
            Outcome::NotCors { decoration } => Action::Forward {
                decoration,
                headers: Headers::new(),
            },
            Outcome::Rejected(rejection) => Action::Respond {
                status: REJECTION_STATUS,
                headers: Headers::new(),
                body: rejection.to_string(),
            },
        }
    }
}

/// Drops any CORS response headers the inner handler already set, then adds
/// the computed ones.
pub fn merge_actual_headers(response: &mut Headers, computed: &Headers) {
    if computed.is_empty() {
        return;
    }

    strip_cors_headers(response);
    response.extend(
        computed
            .iter()
            .map(|(name, value)| (name.clone(), value.clone())),
    );
}

#[cfg(test)]
#[path = "adapter_test.rs"]
mod adapter_test;
