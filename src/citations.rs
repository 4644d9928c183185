//! The citation table: static lookup, validation against the report PDF,
//! and the JSON API handlers.
//!
//! Citations are manually authored. There is no extraction logic: each entry
//! pins a marker id to a page and a percentage rectangle that was located by
//! hand against the rendered report.

use crate::models::{Citation, HighlightRect};

use axum::{
    extract::Path as AxumPath,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use regex::Regex;
use std::collections::BTreeMap;
use std::path::Path;

#[cfg(test)]
#[path = "citations_test.rs"]
mod citations_test;

// ============================================================================
// Citation Table
// ============================================================================

/// The full citation table. Immutable and process-wide; the only runtime
/// state derived from it is the browser-side "active highlight" selection.
pub const CITATIONS: &[Citation] = &[
    // [1]: Page 3 — EBITDA increase attributed to operational improvements
    Citation {
        id: 1,
        page_number: 3,
        rect: HighlightRect {
            top: "28%",
            left: "10%",
            width: "85%",
            height: "6%",
        },
    },
    // [3]: Page 15 — gain on sale of non-current assets, income statement line
    Citation {
        id: 3,
        page_number: 15,
        rect: HighlightRect {
            top: "23.5%",
            left: "11%",
            width: "45%",
            height: "1.5%",
        },
    },
];

/// Look up a citation by marker id. Unknown ids return `None`; callers
/// treat that as a no-op rather than an error.
pub fn lookup(id: u32) -> Option<&'static Citation> {
    CITATIONS.iter().find(|c| c.id == id)
}

/// The table keyed by id, matching the object shape the page script indexes
/// into (`highlights[id]`).
pub fn table_map() -> BTreeMap<String, &'static Citation> {
    CITATIONS.iter().map(|c| (c.id.to_string(), c)).collect()
}

/// Serialize the table for embedding in the viewer's inline script.
pub fn table_json() -> String {
    serde_json::to_string(&table_map()).expect("citation table serializes")
}

// ============================================================================
// Validation
// ============================================================================

/// Parse a percentage string of the form `"<number>%"` into its numeric
/// value, requiring it to lie within [0, 100].
pub fn parse_percent(value: &str) -> Result<f64, String> {
    let re = Regex::new(r"^(\d+(?:\.\d+)?)%$").unwrap();
    let caps = re
        .captures(value)
        .ok_or_else(|| format!("Not a percentage string: {:?}", value))?;
    let number: f64 = caps[1]
        .parse()
        .map_err(|e| format!("Bad number in {:?}: {}", value, e))?;
    if number > 100.0 {
        return Err(format!("Percentage out of range: {:?}", value));
    }
    Ok(number)
}

/// Check every rect field in the table parses as a percentage. Does not
/// need the PDF, so tests and startup share it.
pub fn validate_rects() -> Result<(), String> {
    for citation in CITATIONS {
        let fields = [
            ("top", citation.rect.top),
            ("left", citation.rect.left),
            ("width", citation.rect.width),
            ("height", citation.rect.height),
        ];
        for (name, value) in fields {
            parse_percent(value)
                .map_err(|e| format!("Citation [{}] rect.{}: {}", citation.id, name, e))?;
        }
    }
    Ok(())
}

/// Validate the table against the report on disk: ids unique, rects
/// well-formed, and no citation pointing past the last page. Returns the
/// report's page count.
pub fn validate_table(pdf_path: &Path) -> Result<usize, String> {
    validate_rects()?;

    for (i, citation) in CITATIONS.iter().enumerate() {
        if citation.id == 0 {
            return Err("Citation ids must be positive".to_string());
        }
        if CITATIONS[..i].iter().any(|prev| prev.id == citation.id) {
            return Err(format!("Duplicate citation id {}", citation.id));
        }
        if citation.page_number == 0 {
            return Err(format!("Citation [{}]: pages are 1-based", citation.id));
        }
    }

    let doc = lopdf::Document::load(pdf_path)
        .map_err(|e| format!("Cannot open {}: {}", pdf_path.display(), e))?;
    let page_count = doc.get_pages().len();

    for citation in CITATIONS {
        if citation.page_number as usize > page_count {
            return Err(format!(
                "Citation [{}] targets page {} but {} has only {} pages",
                citation.id,
                citation.page_number,
                pdf_path.display(),
                page_count
            ));
        }
    }

    Ok(page_count)
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/citations — the whole table, keyed by id.
pub async fn citations_index() -> Json<BTreeMap<String, &'static Citation>> {
    Json(table_map())
}

/// GET /api/citations/{id} — one citation, or 404 for ids not in the table.
pub async fn citation_get(AxumPath(id): AxumPath<u32>) -> Response {
    match lookup(id) {
        Some(citation) => Json(citation).into_response(),
        None => (StatusCode::NOT_FOUND, format!("No citation with id {}", id)).into_response(),
    }
}
