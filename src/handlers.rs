//! HTTP route handlers for the viewer page.
//!
//! The citation JSON API handlers live next to the table in `crate::citations`.

use crate::templates::render_viewer;
use crate::AppState;

use axum::{extract::State, response::Html};
use std::sync::Arc;

// ============================================================================
// Index Handler
// ============================================================================

/// GET / — the single page: document panel plus analyst sidebar.
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_viewer(&state.document))
}
