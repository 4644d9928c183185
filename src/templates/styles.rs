//! CSS styles for the evidence viewer.
//!
//! Contains the main STYLE constant with all CSS for the two-pane layout.

// ============================================================================
// CSS Styles
// ============================================================================

pub const STYLE: &str = r#"
/* Dark analyst theme */
:root {
    --bg: #111827;
    --panel-bg: #1f2937;
    --card-bg: #1f2937;
    --border: #374151;
    --fg: #d1d5db;
    --muted: #9ca3af;
    --faint: #6b7280;
    --blue: #60a5fa;
    --emerald: #34d399;
    --pdf-bg: #4b5563;
    --highlight: rgba(250, 204, 21, 0.35);
    --highlight-border: #facc15;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
    line-height: 1.6;
    color: var(--fg);
    background: var(--bg);
    overflow: hidden;
}

.app-container {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    bottom: 0;
    display: flex;
}

/* --- Document panel (left) --- */

.pdf-panel {
    flex: 1;
    overflow-y: auto;
    background: var(--pdf-bg);
    display: flex;
    flex-direction: column;
    align-items: center;
    padding: 1.5rem;
}

.pdf-wrapper {
    position: relative;
}

.pdf-wrapper canvas {
    background: white;
    box-shadow: 0 2px 8px rgba(0,0,0,0.4);
    display: block;
}

.highlight-box {
    position: absolute;
    background: var(--highlight);
    border: 1px solid var(--highlight-border);
    border-radius: 2px;
    pointer-events: none;
}

.pdf-loading {
    display: flex;
    align-items: center;
    justify-content: center;
    height: 100%;
    color: #e5e7eb;
    font-size: 0.9rem;
}

.pdf-loading .spinner {
    width: 24px;
    height: 24px;
    border: 3px solid var(--faint);
    border-top-color: #e5e7eb;
    border-radius: 50%;
    animation: spin 1s linear infinite;
    margin-right: 0.5rem;
}

@keyframes spin {
    to { transform: rotate(360deg); }
}

.pdf-error {
    display: flex;
    align-items: center;
    justify-content: center;
    height: 100%;
    color: #f87171;
    font-size: 0.9rem;
    padding: 1rem;
    text-align: center;
}

/* --- Sidebar (right) --- */

.sidebar-panel {
    width: 420px;
    flex-shrink: 0;
    overflow-y: auto;
    background: var(--panel-bg);
    border-left: 1px solid var(--border);
    padding: 1.5rem;
    position: relative;
}

.sidebar-panel .header h1 {
    font-size: 1.4rem;
    font-weight: 600;
    color: white;
    margin-bottom: 1rem;
}

.card {
    background: var(--card-bg);
    border: 1px solid var(--border);
    border-radius: 6px;
    padding: 1rem;
    margin-bottom: 1rem;
    font-size: 0.9rem;
}

.card p { margin-bottom: 0; }

.card-title {
    display: block;
    font-size: 0.75rem;
    font-weight: 600;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    margin-bottom: 0.75rem;
}

.text-blue { color: var(--blue); }
.text-emerald { color: var(--emerald); }

.aside {
    font-style: italic;
    color: var(--muted);
    margin-left: 4px;
}

.finding { margin-bottom: 1.5rem; }
.finding:last-child { margin-bottom: 0; }

.finding strong {
    color: white;
    display: block;
    margin-bottom: 0.25rem;
}

.quote-block {
    border-left: 3px solid var(--border);
    padding-left: 0.75rem;
    color: var(--muted);
}

.citation-btn {
    border: none;
    border-radius: 4px;
    padding: 0 0.4rem;
    margin-left: 0.35rem;
    font-family: "SF Mono", "Consolas", "Liberation Mono", monospace;
    font-size: 0.8rem;
    cursor: pointer;
    color: #111827;
}

.btn-blue { background: var(--blue); }
.btn-blue:hover { background: #93c5fd; }
.btn-emerald { background: var(--emerald); }
.btn-emerald:hover { background: #6ee7b7; }

/* --- Supporting evidence --- */

.evidence-section {
    margin-top: 2rem;
    padding-top: 1rem;
    border-top: 1px solid var(--border);
}

.evidence-section h3 {
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    color: var(--faint);
    margin-bottom: 1rem;
    font-weight: 600;
}

.evidence-link {
    cursor: pointer;
    padding: 0.5rem;
    margin-bottom: 0.5rem;
    display: flex;
    align-items: center;
    border-radius: 4px;
}

.evidence-link:hover { background: rgba(255,255,255,0.05); }

.evidence-link .marker {
    font-family: "SF Mono", "Consolas", "Liberation Mono", monospace;
    margin-right: 0.5rem;
}

.evidence-link .label {
    font-size: 0.85rem;
    color: var(--muted);
}

.evidence-link:hover .label { color: var(--fg); }

/* --- Chat input (simulated) --- */

.input-wrapper {
    position: relative;
    margin-top: 2rem;
}

.chat-input {
    width: 100%;
    padding: 0.75rem 6rem 0.75rem 0.75rem;
    border: 1px solid var(--border);
    border-radius: 6px;
    background: var(--bg);
    color: var(--fg);
    font-size: 0.9rem;
    font-family: inherit;
}

.chat-input::placeholder { color: var(--faint); }

.input-hint {
    position: absolute;
    right: 10px;
    top: 12px;
    font-size: 0.7rem;
    color: var(--faint);
}
"#;
