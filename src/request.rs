use crate::constants::method;
use crate::util::{split_header_list, split_origin_list};

/// The fields of an incoming request the filter reads.
///
/// Adapters either fill the fields directly or hand the raw header values to
/// [`RequestView::from_raw`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestView<'a> {
    pub method: &'a str,
    /// Origins listed in the `Origin` header, empty when the header is absent.
    pub origins: Vec<&'a str>,
    /// `Access-Control-Request-Method`, present only on preflight requests.
    pub requested_method: Option<&'a str>,
    /// `Access-Control-Request-Headers`, split into individual names.
    pub requested_headers: Vec<&'a str>,
}

impl<'a> RequestView<'a> {
    pub fn new(method: &'a str) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// Builds a view from raw header values.
    ///
    /// The `Origin` value is split on whitespace and the request-headers value
    /// on commas. A blank `Access-Control-Request-Method` counts as absent.
    pub fn from_raw(
        method: &'a str,
        origin: Option<&'a str>,
        access_control_request_method: Option<&'a str>,
        access_control_request_headers: Option<&'a str>,
    ) -> Self {
        Self {
            method,
            origins: origin.map(split_origin_list).unwrap_or_default(),
            requested_method: access_control_request_method
                .map(str::trim)
                .filter(|value| !value.is_empty()),
            requested_headers: access_control_request_headers
                .map(split_header_list)
                .unwrap_or_default(),
        }
    }

    pub fn with_origin(mut self, origin: &'a str) -> Self {
        self.origins.push(origin);
        self
    }

    pub fn with_requested_method(mut self, method: &'a str) -> Self {
        self.requested_method = Some(method);
        self
    }

    pub fn with_requested_header(mut self, name: &'a str) -> Self {
        self.requested_headers.push(name);
        self
    }

    pub fn is_options(&self) -> bool {
        self.method.eq_ignore_ascii_case(method::OPTIONS)
    }
}

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;
