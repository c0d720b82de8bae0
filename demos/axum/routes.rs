use axum::{
    Extension,
    extract::State,
    response::{Html, IntoResponse},
};
use bunner_cors_filter::Decoration;

use crate::cors::AppState;

pub async fn greet(
    State(state): State<AppState>,
    Extension(decoration): Extension<Decoration>,
) -> impl IntoResponse {
    let caller = match &decoration {
        Decoration::Cors { origins } => format!("cross-origin caller {}", origins.join(" ")),
        Decoration::NotCors => "same-origin caller".to_string(),
    };

    Html(format!("<h1>{}</h1><p>Hello, {caller}.</p>", state.greeting))
}
