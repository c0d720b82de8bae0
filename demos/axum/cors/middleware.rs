use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode, header::CONTENT_TYPE},
    middleware::Next,
    response::Response,
};
use bunner_cors_filter::{
    Headers, RequestView, adapter::Action, constants::header, is_cors_response_header,
};

use super::AppState;

pub async fn cors_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let outcome = {
        let headers = request.headers();
        let view = RequestView::from_raw(
            request.method().as_str(),
            header_str(headers, header::ORIGIN),
            header_str(headers, header::ACCESS_CONTROL_REQUEST_METHOD),
            header_str(headers, header::ACCESS_CONTROL_REQUEST_HEADERS),
        );
        state.policy.evaluate(&view)
    };

    match Action::from(outcome) {
        Action::Respond {
            status,
            headers,
            body,
        } => direct_response(status, &headers, body),
        Action::Forward {
            decoration,
            headers,
        } => {
            request.extensions_mut().insert(decoration);
            let mut response = next.run(request).await;
            if !headers.is_empty() {
                strip_cors_headers(response.headers_mut());
                apply_headers(response.headers_mut(), &headers);
            }
            response
        }
    }
}

fn direct_response(status: u16, headers: &Headers, body: String) -> Response {
    let has_body = !body.is_empty();
    let mut response = Response::new(Body::from(body));
    *response.status_mut() = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_REQUEST);
    if has_body {
        response.headers_mut().insert(
            CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        );
    }
    apply_headers(response.headers_mut(), headers);
    response
}

fn strip_cors_headers(map: &mut HeaderMap) {
    let stale: Vec<HeaderName> = map
        .keys()
        .filter(|name| is_cors_response_header(name.as_str()))
        .cloned()
        .collect();
    for name in stale {
        map.remove(name);
    }
}

fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers.iter() {
        if let (Ok(header_name), Ok(header_value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) {
            map.insert(header_name, header_value);
        }
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}
