//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The contact page is server-rendered at `/`. Submitting the form posts to
//! `/contact`, which answers with the same page re-rendered, so the browser
//! never navigates away from the form.

pub mod contact;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(contact::show_form))
        .route("/contact", post(contact::submit_form))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
