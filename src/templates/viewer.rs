//! The single-page viewer template: a document panel on the left and the
//! analyst sidebar on the right.
//!
//! Page rasterization is delegated to PDF.js loaded from a CDN. The inline
//! script owns the one piece of runtime state, the active highlight, and
//! re-renders the panel when a citation marker is clicked.

use crate::citations;
use crate::content::{self, html_escape};
use crate::models::DocumentInfo;

use super::styles::STYLE;

// ============================================================================
// Viewer Template
// ============================================================================

/// Width (CSS pixels) at which pages are rendered, matching the fixed-width
/// panel layout. PDF.js scales from this.
const PAGE_WIDTH: u32 = 600;

pub fn render_viewer(doc: &DocumentInfo) -> String {
    let file_name_json =
        serde_json::to_string(&doc.file_name).unwrap_or_else(|_| "\"\"".to_string());
    let highlights_json = citations::table_json();

    let analysis_html = super::components::analysis_card();
    let findings_html = super::components::findings_card(&content::findings());
    let evidence_html = super::components::evidence_list(&content::evidence_links(), doc);
    let chat_html = super::components::chat_input_html();

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{style}</style>
</head>
<body>
    <div class="app-container">
        <div class="pdf-panel" id="pdf-panel">
            <div class="pdf-loading" id="pdf-loading">
                <div class="spinner"></div>
                <span>Loading PDF...</span>
            </div>
        </div>

        <div class="sidebar-panel">
            <div class="header">
                <h1>{title}</h1>
            </div>
            {analysis_html}
            {findings_html}
            {evidence_html}
            {chat_html}
        </div>
    </div>

    <script src="https://cdnjs.cloudflare.com/ajax/libs/pdf.js/3.11.174/pdf.min.js"></script>
    <script>
        // Set pdf.js worker
        pdfjsLib.GlobalWorkerOptions.workerSrc = 'https://cdnjs.cloudflare.com/ajax/libs/pdf.js/3.11.174/pdf.worker.min.js';

        // Citation table: marker id -> {{ pageNumber, rect }} with
        // percentage rect coordinates relative to the rendered page.
        const highlights = {highlights_json};

        const pdfUrl = '/pdfs/' + encodeURIComponent({file_name_json});
        const pageWidth = {page_width};

        let pdfDoc = null;
        let activeHighlight = null;

        async function loadPdf() {{
            const panel = document.getElementById('pdf-panel');
            const loading = document.getElementById('pdf-loading');

            try {{
                const loadingTask = pdfjsLib.getDocument(pdfUrl);
                pdfDoc = await loadingTask.promise;
                loading.style.display = 'none';
                await renderActivePage();
            }} catch (error) {{
                loading.style.display = 'none';
                panel.innerHTML = '<div class="pdf-error">Failed to load PDF: ' + error.message + '</div>';
                console.error('PDF load error:', error);
            }}
        }}

        // Render either page 1 (no selection) or the selected citation's
        // page, overlaid with its highlight box.
        async function renderActivePage() {{
            if (!pdfDoc) return;

            const panel = document.getElementById('pdf-panel');
            const pageNumber = activeHighlight
                ? Math.min(activeHighlight.pageNumber, pdfDoc.numPages)
                : 1;

            const page = await pdfDoc.getPage(pageNumber);
            const base = page.getViewport({{ scale: 1.0 }});
            const viewport = page.getViewport({{ scale: pageWidth / base.width }});
            const dpr = window.devicePixelRatio || 1;

            const canvas = document.createElement('canvas');
            const ctx = canvas.getContext('2d');
            canvas.width = Math.floor(viewport.width * dpr);
            canvas.height = Math.floor(viewport.height * dpr);
            canvas.style.width = Math.floor(viewport.width) + 'px';
            canvas.style.height = Math.floor(viewport.height) + 'px';
            ctx.scale(dpr, dpr);

            const wrapper = document.createElement('div');
            wrapper.className = 'pdf-wrapper';
            wrapper.appendChild(canvas);

            if (activeHighlight) {{
                const box = document.createElement('div');
                box.className = 'highlight-box';
                box.style.top = activeHighlight.rect.top;
                box.style.left = activeHighlight.rect.left;
                box.style.width = activeHighlight.rect.width;
                box.style.height = activeHighlight.rect.height;
                wrapper.appendChild(box);
            }}

            panel.innerHTML = '';
            panel.appendChild(wrapper);

            await page.render({{
                canvasContext: ctx,
                viewport: viewport
            }}).promise;
        }}

        // Citation click: unknown ids are silently ignored.
        function handleCitationClick(id) {{
            const hit = highlights[id];
            if (!hit) return;

            activeHighlight = hit;
            renderActivePage();

            // Scroll the panel back to top so the highlight is visible
            const panel = document.getElementById('pdf-panel');
            if (panel) panel.scrollTop = 0;
        }}

        document.addEventListener('DOMContentLoaded', loadPdf);
    </script>
</body>
</html>"##,
        title = html_escape(&doc.title),
        style = STYLE,
        analysis_html = analysis_html,
        findings_html = findings_html,
        evidence_html = evidence_html,
        chat_html = chat_html,
        highlights_json = highlights_json,
        file_name_json = file_name_json,
        page_width = PAGE_WIDTH,
    )
}
