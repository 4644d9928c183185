//! Sidebar HTML components: analysis card, findings card, supporting
//! evidence list, and the simulated chat input.

use crate::content::{self, html_escape};
use crate::models::{DocumentInfo, EvidenceLink, Finding};

// ============================================================================
// Citation Button
// ============================================================================

/// An inline `[n]` marker that invokes the citation lookup on click.
pub fn citation_button(finding: &Finding) -> String {
    format!(
        r#"<button onclick="handleCitationClick({id})" class="citation-btn btn-{accent}">[{id}]</button>"#,
        id = finding.citation_id,
        accent = finding.accent.css(),
    )
}

// ============================================================================
// Analysis Card
// ============================================================================

pub fn analysis_card() -> String {
    format!(
        r#"<div class="card">
            <span class="card-title text-blue">Analysis</span>
            <p style="margin-bottom: 1rem;">{lead}</p>
            <p>{body} <span class="aside">{aside}</span></p>
        </div>"#,
        lead = html_escape(content::ANALYSIS_LEAD),
        body = html_escape(content::ANALYSIS_BODY),
        aside = html_escape(content::ANALYSIS_ASIDE),
    )
}

// ============================================================================
// Findings Card
// ============================================================================

pub fn findings_card(findings: &[Finding]) -> String {
    let mut html = String::from(
        r#"<div class="card">
            <span class="card-title text-emerald">Findings</span>"#,
    );

    for finding in findings {
        let button = citation_button(finding);
        let body = if finding.quote {
            format!(
                r#"<div class="quote-block">{} {}</div>"#,
                html_escape(finding.body),
                button
            )
        } else {
            format!("<p>{} {}</p>", html_escape(finding.body), button)
        };
        html.push_str(&format!(
            r#"<div class="finding">
                <strong>{heading}</strong>
                {body}
            </div>"#,
            heading = html_escape(finding.heading),
            body = body,
        ));
    }

    html.push_str("</div>");
    html
}

// ============================================================================
// Supporting Evidence
// ============================================================================

pub fn evidence_list(links: &[EvidenceLink], doc: &DocumentInfo) -> String {
    let mut html = String::from(
        r#"<div class="evidence-section">
            <h3>Supporting Evidence</h3>"#,
    );

    for link in links {
        html.push_str(&format!(
            r#"<div class="evidence-link" onclick="handleCitationClick({id})">
                <span class="marker text-{accent}">[{id}]</span>
                <span class="label">{source} - Page {page}</span>
            </div>"#,
            id = link.citation_id,
            accent = link.accent.css(),
            source = html_escape(&doc.source_name),
            page = link.page_number,
        ));
    }

    html.push_str("</div>");
    html
}

// ============================================================================
// Chat Input (simulated)
// ============================================================================

pub fn chat_input_html() -> &'static str {
    r#"<div class="input-wrapper">
        <input type="text" placeholder="Ask about your chat data..." class="chat-input">
        <div class="input-hint">AI Assistant</div>
    </div>"#
}
