//! Evidence viewer - a PDF report alongside analyst commentary with
//! clickable citation highlights.
//!
//! This is the main entry point for the web server. The application is
//! organized into the following modules:
//!
//! - `models`: citation, highlight, and sidebar data structures
//! - `citations`: the static citation table, lookup, and validation
//! - `content`: the manually authored sidebar narrative
//! - `templates`: HTML/CSS/JS templates and rendering
//! - `handlers`: HTTP route handlers

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::services::ServeDir;

use citeview::{citations, handlers, AppState, PDFS_DIR};

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() {
    let state = Arc::new(AppState::new());

    let report_path = state.pdfs_dir.join(&state.document.file_name);
    if report_path.exists() {
        let pages = citations::validate_table(&report_path)
            .expect("Citation table is inconsistent with the report");
        println!("Report: {} ({} pages)", report_path.display(), pages);
    } else {
        // Rendering is delegated to the browser, so the server can still
        // start; the viewer shows PDF.js's load error until the file exists.
        citations::validate_rects().expect("Citation table has malformed rectangles");
        println!(
            "Warning: {} not found; place the report there to render pages",
            report_path.display()
        );
    }

    let app = Router::new()
        .route("/", get(handlers::index))
        .route("/api/citations", get(citations::citations_index))
        .route("/api/citations/{id}", get(citations::citation_get))
        .nest_service("/pdfs", ServeDir::new(PDFS_DIR))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000")
        .await
        .expect("Failed to bind to port 3000");

    println!("Evidence viewer running at http://127.0.0.1:3000");
    println!("Citations: {} entries", citations::CITATIONS.len());

    axum::serve(listener, app).await.expect("Server error");
}
