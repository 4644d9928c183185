//! Data models for the evidence viewer.
//!
//! The core entity is a [`Citation`]: a numbered reference linking the
//! analyst commentary to a specific page and region of the source report.
//! Citations are authored as a process-wide constant table (see
//! `crate::citations`) and are never created or mutated at runtime.

use serde::Serialize;

// ============================================================================
// Citations
// ============================================================================

/// A percentage-based bounding box overlaid on a rendered page to mark the
/// cited content. Each field is a string of the form `"<number>%"` and is
/// interpreted relative to the rendered page's bounding box, so the overlay
/// stays aligned at any render scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HighlightRect {
    pub top: &'static str,
    pub left: &'static str,
    pub width: &'static str,
    pub height: &'static str,
}

/// A single citation: clicking marker `[id]` in the sidebar jumps the
/// document panel to `page_number` and overlays `rect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Citation {
    pub id: u32,
    /// 1-based page in the source report. Must not exceed the report's
    /// page count; enforced at startup by `citations::validate_table`.
    #[serde(rename = "pageNumber")]
    pub page_number: u32,
    pub rect: HighlightRect,
}

// ============================================================================
// Document Metadata
// ============================================================================

/// Metadata about the report shown in the document panel.
#[derive(Debug, Clone)]
pub struct DocumentInfo {
    /// Sidebar header title.
    pub title: String,
    /// Filename under the pdfs directory, loaded by the browser via `/pdfs/`.
    pub file_name: String,
    /// Human-readable source name used in the supporting-evidence list.
    pub source_name: String,
}

// ============================================================================
// Sidebar Content
// ============================================================================

/// Accent color for a finding and its citation button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Emerald,
}

impl Accent {
    /// CSS class suffix used by the templates ("blue" / "emerald").
    pub fn css(self) -> &'static str {
        match self {
            Accent::Blue => "blue",
            Accent::Emerald => "emerald",
        }
    }
}

/// One entry in the findings card. `quote` switches the body into the
/// block-quote treatment used for verbatim report excerpts.
#[derive(Debug, Clone, Copy)]
pub struct Finding {
    pub heading: &'static str,
    pub body: &'static str,
    pub quote: bool,
    pub citation_id: u32,
    pub accent: Accent,
}

/// One entry in the supporting-evidence list. Clicking it invokes the same
/// citation lookup as the inline `[n]` buttons.
#[derive(Debug, Clone, Copy)]
pub struct EvidenceLink {
    pub citation_id: u32,
    pub page_number: u32,
    pub accent: Accent,
}
