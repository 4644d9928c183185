//! HTML templates and styling for the evidence viewer.
//!
//! - `styles` - CSS constants for the two-pane layout
//! - `components` - Sidebar components (analysis, findings, evidence list)
//! - `viewer` - The single-page viewer with PDF.js and the highlight overlay

mod components;
mod styles;
mod viewer;

pub use components::{analysis_card, chat_input_html, citation_button, evidence_list, findings_card};
pub use styles::STYLE;
pub use viewer::render_viewer;
