//! Tests for the citation table, lookup, and validation.
//!
//! Page-count validation tests build small throwaway PDFs with lopdf so
//! they're deterministic and need no checked-in binary fixtures.

use super::*;
use axum::extract::Path as AxumPath;
use axum::http::StatusCode;
use lopdf::{dictionary, Document, Object, Stream};
use std::path::PathBuf;

// ============================================================================
// Helpers
// ============================================================================

/// Build a minimal PDF with the given number of empty pages.
fn build_pdf(page_count: usize) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut kids: Vec<Object> = Vec::new();
    for _ in 0..page_count {
        let content_id = doc.add_object(Stream::new(dictionary! {}, Vec::new()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count as i64,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

/// Write a test PDF to a unique temp path and return the path.
fn write_pdf(tag: &str, page_count: usize) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "citeview-test-{}-{}.pdf",
        tag,
        std::process::id()
    ));
    build_pdf(page_count)
        .save(&path)
        .unwrap_or_else(|e| panic!("Cannot write test PDF {}: {}", path.display(), e));
    path
}

// ============================================================================
// Lookup Tests
// ============================================================================

#[test]
fn test_lookup_citation_1() {
    let citation = lookup(1).expect("citation [1] is in the table");
    assert_eq!(citation.page_number, 3);
    assert_eq!(citation.rect.top, "28%");
    assert_eq!(citation.rect.left, "10%");
    assert_eq!(citation.rect.width, "85%");
    assert_eq!(citation.rect.height, "6%");
}

#[test]
fn test_lookup_citation_3() {
    let citation = lookup(3).expect("citation [3] is in the table");
    assert_eq!(citation.page_number, 15);
    assert_eq!(citation.rect.top, "23.5%");
    assert_eq!(citation.rect.left, "11%");
    assert_eq!(citation.rect.width, "45%");
    assert_eq!(citation.rect.height, "1.5%");
}

#[test]
fn test_lookup_unknown_ids_are_none() {
    // [2] is deliberately absent (the commentary skips it), and clicking an
    // unknown marker must be a no-op downstream.
    assert!(lookup(0).is_none());
    assert!(lookup(2).is_none());
    assert!(lookup(99).is_none());
}

#[test]
fn test_table_ids_are_unique_and_positive() {
    for (i, citation) in CITATIONS.iter().enumerate() {
        assert!(citation.id > 0);
        assert!(
            !CITATIONS[..i].iter().any(|prev| prev.id == citation.id),
            "duplicate id {}",
            citation.id
        );
    }
}

// ============================================================================
// Serialization Tests
// ============================================================================

#[test]
fn test_table_json_shape() {
    let value: serde_json::Value =
        serde_json::from_str(&table_json()).expect("table JSON parses");
    let obj = value.as_object().expect("table is an object keyed by id");

    assert_eq!(obj.len(), CITATIONS.len());
    assert_eq!(obj["1"]["pageNumber"], 3);
    assert_eq!(obj["3"]["pageNumber"], 15);
    assert_eq!(obj["1"]["rect"]["top"], "28%");
    assert_eq!(obj["3"]["rect"]["height"], "1.5%");
}

// ============================================================================
// Percent Parsing Tests
// ============================================================================

#[test]
fn test_parse_percent_accepts_table_forms() {
    assert_eq!(parse_percent("28%").unwrap(), 28.0);
    assert_eq!(parse_percent("23.5%").unwrap(), 23.5);
    assert_eq!(parse_percent("0%").unwrap(), 0.0);
    assert_eq!(parse_percent("100%").unwrap(), 100.0);
}

#[test]
fn test_parse_percent_rejects_malformed() {
    assert!(parse_percent("28").is_err());
    assert!(parse_percent("28 %").is_err());
    assert!(parse_percent("%").is_err());
    assert!(parse_percent("-5%").is_err());
    assert!(parse_percent("105%").is_err());
    assert!(parse_percent("").is_err());
}

#[test]
fn test_table_rects_are_well_formed() {
    validate_rects().expect("every rect field in the table parses");
}

// ============================================================================
// Page-Count Validation Tests
// ============================================================================

#[test]
fn test_validate_table_accepts_long_enough_report() {
    let path = write_pdf("ok", 16);
    let pages = validate_table(&path).expect("16-page report covers the table");
    assert_eq!(pages, 16);
    std::fs::remove_file(&path).ok();
}

#[test]
fn test_validate_table_rejects_short_report() {
    let path = write_pdf("short", 4);
    let err = validate_table(&path).expect_err("citation [3] targets page 15");
    assert!(err.contains("Citation [3]"), "unexpected error: {}", err);
    assert!(err.contains("page 15"), "unexpected error: {}", err);
    std::fs::remove_file(&path).ok();
}

#[test]
fn test_validate_table_reports_missing_file() {
    let path = PathBuf::from("does-not-exist/report.pdf");
    let err = validate_table(&path).expect_err("missing file is an error");
    assert!(err.contains("Cannot open"), "unexpected error: {}", err);
}

// ============================================================================
// API Handler Tests
// ============================================================================

#[tokio::test]
async fn test_citation_get_known_id() {
    let response = citation_get(AxumPath(1)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_citation_get_unknown_id_is_404() {
    let response = citation_get(AxumPath(2)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
