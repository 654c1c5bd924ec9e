//! Page Routes
//!
//! - GET / - Dashboard page
//! - GET /api/v1/layout - Layout and callback wiring as JSON

use axum::{extract::State, response::Html, Json};
use std::sync::Arc;

use crate::api::dto::LayoutResponse;
use crate::api::state::AppState;

/// GET /
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.page.as_ref().clone())
}

/// GET /api/v1/layout
///
/// The layout is fixed at startup; only the slider's initial value came
/// from the data.
pub async fn get_layout(State(state): State<Arc<AppState>>) -> Json<LayoutResponse> {
    Json(LayoutResponse {
        layout: state.layout.as_ref().clone(),
        dependencies: state.callbacks.dependencies(),
    })
}
