//! citeview library - re-exports for testing and external use.
//!
//! A single-page evidence viewer: a PDF report on the left, analyst
//! commentary on the right, and numbered citation markers that jump the
//! document panel to a page and highlight the cited region.
//!
//! - `models`: citations, highlight rectangles, document and sidebar types
//! - `citations`: the static citation table, lookup, validation, JSON API
//! - `content`: the manually authored sidebar narrative
//! - `templates`: HTML/CSS/JS generation for the page
//! - `handlers`: HTTP route handlers

use std::fs;
use std::path::PathBuf;

pub mod citations;
pub mod content;
pub mod handlers;
pub mod models;
pub mod templates;

// ============================================================================
// Configuration
// ============================================================================

/// Directory the report PDF is served from (mounted at `/pdfs`).
pub const PDFS_DIR: &str = "pdfs";

// ============================================================================
// Application State
// ============================================================================

/// Shared server state. The citation table itself is a process-wide
/// constant; the only runtime-mutable state (the active highlight) lives
/// entirely in the browser.
#[derive(Clone)]
pub struct AppState {
    pub pdfs_dir: PathBuf,
    pub document: models::DocumentInfo,
}

impl AppState {
    pub fn new() -> Self {
        let pdfs_dir = PathBuf::from(PDFS_DIR);
        fs::create_dir_all(&pdfs_dir).ok();

        Self {
            pdfs_dir,
            document: content::document_info(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// Re-export commonly used items
pub use citations::{lookup, parse_percent, table_json, table_map, validate_table, CITATIONS};
pub use content::{document_info, evidence_links, findings, html_escape};
pub use models::{Accent, Citation, DocumentInfo, EvidenceLink, Finding, HighlightRect};
pub use templates::{render_viewer, STYLE};
