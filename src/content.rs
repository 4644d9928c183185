//! Static sidebar narrative: the analyst commentary shown alongside the
//! report, plus HTML escaping for anything interpolated into templates.
//!
//! All of this is manually authored. The commentary answers one question —
//! whether any extraordinary or one-off items affected EBITDA in the
//! A.P. Moller - Maersk Q2 2025 interim report — and each claim carries a
//! numbered citation into the report itself.

use crate::models::{Accent, DocumentInfo, EvidenceLink, Finding};

// ============================================================================
// Document
// ============================================================================

/// Metadata for the report served from the pdfs directory.
pub fn document_info() -> DocumentInfo {
    DocumentInfo {
        title: "Financials".to_string(),
        file_name: "report.pdf".to_string(),
        source_name: "A.P. Moller - Maersk Q2 2025 Interim Report".to_string(),
    }
}

// ============================================================================
// Narrative
// ============================================================================

pub const ANALYSIS_LEAD: &str =
    "No extraordinary or one-off items affecting EBITDA were reported in Maersk's Q2 2025 results.";

pub const ANALYSIS_BODY: &str = "The report explicitly notes that EBITDA improvements stemmed \
    from operational performance, including volume growth, cost control, and margin improvement.";

pub const ANALYSIS_ASIDE: &str =
    "Gains or losses from asset sales are shown separately under EBIT.";

/// The findings card entries, in display order.
pub fn findings() -> Vec<Finding> {
    vec![
        Finding {
            heading: "Page 3 - Highlights Q2 2025",
            body: "EBITDA increase (USD 2.3 bn vs USD 2.1 bn prior year) attributed to \
                   operational improvements; no mention of extraordinary or one-off items.",
            quote: false,
            citation_id: 1,
            accent: Accent::Blue,
        },
        Finding {
            heading: "Page 15 - Condensed Income Statement",
            body: "\"Gain on sale of non-current assets USD 25 m (vs prior year) reported \
                   separately below EBITDA; therefore, not part of EBITDA.\"",
            quote: true,
            citation_id: 3,
            accent: Accent::Emerald,
        },
    ]
}

/// The supporting-evidence list, one entry per citation in the table.
pub fn evidence_links() -> Vec<EvidenceLink> {
    vec![
        EvidenceLink {
            citation_id: 1,
            page_number: 3,
            accent: Accent::Blue,
        },
        EvidenceLink {
            citation_id: 3,
            page_number: 15,
            accent: Accent::Emerald,
        },
    ]
}

// ============================================================================
// Escaping
// ============================================================================

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::citations;

    #[test]
    fn test_every_finding_cites_a_table_entry() {
        for finding in findings() {
            assert!(
                citations::lookup(finding.citation_id).is_some(),
                "Finding '{}' cites [{}], which is not in the table",
                finding.heading,
                finding.citation_id
            );
        }
    }

    #[test]
    fn test_evidence_links_match_table_pages() {
        for link in evidence_links() {
            let citation = citations::lookup(link.citation_id)
                .unwrap_or_else(|| panic!("Evidence link [{}] not in table", link.citation_id));
            assert_eq!(
                citation.page_number, link.page_number,
                "Evidence link [{}] page disagrees with the table",
                link.citation_id
            );
        }
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<b>"A&B"</b>"#),
            "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;"
        );
        assert_eq!(html_escape("it's"), "it&#39;s");
        assert_eq!(html_escape("plain"), "plain");
    }
}
