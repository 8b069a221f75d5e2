//! Standalone HTML report generation.
//!
//! The report is one self-contained document: CSS, data, and behavior are
//! embedded, so the file can be opened from disk or mailed around without a
//! server. All record-derived content (stats, screenshot grid, table rows,
//! target lists, CSV rows, search haystacks) is rendered here on the Rust
//! side; the embedded script only wires the pre-rendered data to the page
//! controls.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::errors::{ReportError, ReportResult};
use crate::models::VisitRecord;
use crate::search;
use crate::serialize;
use crate::views::{self, OutputVariant};

/// HTML report generator for recon results.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter instance.
    pub fn new() -> Self {
        Self
    }

    pub fn generate_report(
        &self,
        payload: &Value,
        records: &[VisitRecord],
        output_path: &Path,
    ) -> ReportResult<PathBuf> {
        let html = self.generate_html(payload, records);
        fs::write(output_path, html)
            .map_err(|e| ReportError::io(e, Some(output_path.to_path_buf())))?;
        log::info!("HTML report written to {}", output_path.display());
        Ok(output_path.to_path_buf())
    }

    pub fn generate_html(&self, payload: &Value, records: &[VisitRecord]) -> String {
        let stats = views::stats(records);
        let grid = Self::screenshot_grid(records);
        let rows = Self::table_rows(records);
        let panels = Self::output_panels(records);

        let report_data =
            embed_json(&serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string()));
        let visits_json =
            embed_json(&serde_json::to_string(records).unwrap_or_else(|_| "[]".to_string()));
        let csv_rows: Vec<String> = records.iter().map(serialize::csv_row).collect();
        let csv_rows_json =
            embed_json(&serde_json::to_string(&csv_rows).unwrap_or_else(|_| "[]".to_string()));
        let csv_header_json = serde_json::to_string(&serialize::csv_header())
            .unwrap_or_else(|_| "\"\"".to_string());

        format!(
            r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>PageHawk Report</title>
    <style>
        :root {{
            --bg-primary: #0d1117;
            --bg-card: #161b22;
            --border-primary: #30363d;
            --text-primary: #e6edf3;
            --text-secondary: #8b949e;
            --accent-cyan: #00d4ff;
            --accent-green: #3fb950;
            --accent-red: #f85149;
            --accent-amber: #d29922;
        }}

        * {{
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }}

        body {{
            background: var(--bg-primary);
            color: var(--text-primary);
            font-family: 'Segoe UI', 'Helvetica Neue', Arial, sans-serif;
            line-height: 1.6;
        }}

        .container {{ max-width: 1400px; margin: 0 auto; padding: 2rem; }}

        .header {{ text-align: center; margin-bottom: 2rem; }}
        .title {{
            font-size: 2.5rem;
            font-weight: 700;
            color: var(--accent-cyan);
            letter-spacing: 0.05em;
        }}
        .subtitle {{ color: var(--text-secondary); margin-bottom: 1rem; }}
        .timestamp {{
            display: inline-block;
            background: var(--bg-card);
            border: 1px solid var(--border-primary);
            padding: 0.35rem 0.9rem;
            border-radius: 0.5rem;
            font-family: monospace;
            font-size: 0.85rem;
            color: var(--accent-green);
        }}

        .stats-grid {{
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 1.25rem;
            margin: 2rem 0;
        }}
        .stat-card {{
            background: var(--bg-card);
            border: 1px solid var(--border-primary);
            border-radius: 0.75rem;
            padding: 1.25rem;
            text-align: center;
        }}
        .stat-value {{
            display: block;
            font-size: 2.25rem;
            font-weight: 700;
            font-family: monospace;
        }}
        .stat-label {{
            color: var(--text-secondary);
            font-size: 0.85rem;
            text-transform: uppercase;
            letter-spacing: 0.05em;
        }}
        .stat-cyan {{ color: var(--accent-cyan); }}
        .stat-green {{ color: var(--accent-green); }}
        .stat-red {{ color: var(--accent-red); }}

        .content-section {{ margin-top: 2.5rem; }}
        .section-title {{
            font-size: 1.25rem;
            font-weight: 600;
            margin-bottom: 1rem;
            border-bottom: 1px solid var(--border-primary);
            padding-bottom: 0.5rem;
        }}

        .screenshot-grid {{
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
            gap: 1rem;
        }}
        .screenshot-thumbnail {{
            position: relative;
            background: var(--bg-card);
            border: 1px solid var(--border-primary);
            border-radius: 0.5rem;
            overflow: hidden;
            cursor: pointer;
        }}
        .screenshot-thumbnail:hover {{ border-color: var(--accent-cyan); }}
        .screenshot-thumbnail img {{
            width: 100%;
            height: 160px;
            object-fit: cover;
            object-position: top;
            display: block;
        }}
        .thumb-overlay-top-left {{
            position: absolute;
            top: 0.4rem;
            left: 0.4rem;
            display: flex;
            align-items: center;
            gap: 0.35rem;
        }}
        .thumb-overlay-top-right {{
            position: absolute;
            top: 0.4rem;
            right: 0.4rem;
            background: rgba(0, 0, 0, 0.7);
            padding: 0.1rem 0.45rem;
            border-radius: 0.35rem;
            font-family: monospace;
            font-size: 0.8rem;
        }}
        .thumb-overlay-bottom {{
            position: absolute;
            bottom: 0;
            left: 0;
            right: 0;
            background: rgba(0, 0, 0, 0.75);
            padding: 0.3rem 0.5rem;
            font-size: 0.8rem;
            white-space: nowrap;
            overflow: hidden;
            text-overflow: ellipsis;
        }}
        .status-indicator {{
            width: 0.6rem;
            height: 0.6rem;
            border-radius: 50%;
            display: inline-block;
        }}
        .status-success {{ background: var(--accent-green); }}
        .status-error {{ background: var(--accent-red); }}
        .protocol-http, .protocol-https {{
            font-size: 0.7rem;
            font-weight: 700;
            font-family: monospace;
            padding: 0.05rem 0.35rem;
            border-radius: 0.3rem;
            background: rgba(0, 0, 0, 0.7);
        }}
        .protocol-http {{ color: var(--accent-amber); }}
        .protocol-https {{ color: var(--accent-green); }}

        .table-toolbar {{
            display: flex;
            justify-content: space-between;
            align-items: center;
            gap: 1rem;
            margin-bottom: 0.75rem;
            flex-wrap: wrap;
        }}
        #table-search {{
            background: var(--bg-card);
            border: 1px solid var(--border-primary);
            border-radius: 0.5rem;
            color: var(--text-primary);
            padding: 0.45rem 0.75rem;
            min-width: 260px;
        }}
        #table-search:focus {{ outline: none; border-color: var(--accent-cyan); }}
        .export-buttons {{ display: flex; gap: 0.5rem; flex-wrap: wrap; }}
        button {{
            background: var(--bg-card);
            border: 1px solid var(--border-primary);
            border-radius: 0.4rem;
            color: var(--text-primary);
            padding: 0.35rem 0.75rem;
            font-size: 0.8rem;
            cursor: pointer;
        }}
        button:hover {{ border-color: var(--accent-cyan); color: var(--accent-cyan); }}

        .data-table {{
            width: 100%;
            border-collapse: collapse;
            font-size: 0.85rem;
        }}
        .data-table th {{
            text-align: left;
            color: var(--text-secondary);
            text-transform: uppercase;
            font-size: 0.72rem;
            letter-spacing: 0.05em;
            padding: 0.5rem 0.75rem;
            border-bottom: 1px solid var(--border-primary);
        }}
        .data-table td {{
            padding: 0.5rem 0.75rem;
            border-bottom: 1px solid var(--border-primary);
            word-break: break-all;
        }}
        .data-table tr:hover td {{ background: var(--bg-card); }}
        .status-badge {{
            font-family: monospace;
            padding: 0.1rem 0.5rem;
            border-radius: 0.35rem;
            border: 1px solid var(--border-primary);
        }}
        .status-badge.success {{ color: var(--accent-green); border-color: var(--accent-green); }}
        .status-badge.danger {{ color: var(--accent-red); border-color: var(--accent-red); }}
        .screenshot-yes {{ color: var(--accent-green); }}
        .screenshot-no {{ color: var(--accent-red); }}

        .outputs-grid {{
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(380px, 1fr));
            gap: 1.25rem;
        }}
        .output-card {{
            background: var(--bg-card);
            border: 1px solid var(--border-primary);
            border-radius: 0.75rem;
            padding: 1rem;
        }}
        .output-header {{
            display: flex;
            justify-content: space-between;
            align-items: center;
            gap: 0.5rem;
            margin-bottom: 0.6rem;
            flex-wrap: wrap;
        }}
        .output-header h3 {{ font-size: 0.95rem; font-weight: 600; }}
        .output-actions {{ display: flex; gap: 0.4rem; }}
        .output-card textarea {{
            width: 100%;
            min-height: 140px;
            background: var(--bg-primary);
            border: 1px solid var(--border-primary);
            border-radius: 0.5rem;
            color: var(--text-primary);
            font-family: monospace;
            font-size: 0.8rem;
            padding: 0.6rem;
            resize: vertical;
        }}

        .image-modal {{
            display: none;
            position: fixed;
            inset: 0;
            z-index: 10;
            align-items: center;
            justify-content: center;
        }}
        .image-modal.active {{ display: flex; }}
        .modal-backdrop {{
            position: absolute;
            inset: 0;
            background: rgba(0, 0, 0, 0.85);
        }}
        #modal-image {{
            position: relative;
            max-width: 92vw;
            max-height: 92vh;
            border: 1px solid var(--border-primary);
            border-radius: 0.5rem;
            cursor: pointer;
        }}

        .footer {{
            margin-top: 3rem;
            padding-top: 1.5rem;
            border-top: 1px solid var(--border-primary);
            text-align: center;
            color: var(--text-secondary);
            font-size: 0.85rem;
        }}

        @media (max-width: 768px) {{
            .container {{ padding: 1rem; }}
            .stats-grid {{ grid-template-columns: 1fr; }}
            .outputs-grid {{ grid-template-columns: 1fr; }}
        }}
    </style>
</head>
<body>
    <div class="container">
        <header class="header">
            <h1 class="title">PageHawk</h1>
            <p class="subtitle">Reconnaissance Report</p>
            <div class="timestamp">Generated {generated}</div>
        </header>

        <div class="stats-grid">
            <div class="stat-card">
                <span class="stat-value stat-cyan" id="total-scanned">{total}</span>
                <span class="stat-label">Total Scanned</span>
            </div>
            <div class="stat-card">
                <span class="stat-value stat-green" id="accessible">{accessible}</span>
                <span class="stat-label">Accessible</span>
            </div>
            <div class="stat-card">
                <span class="stat-value stat-red" id="unreachable">{unreachable}</span>
                <span class="stat-label">Unreachable</span>
            </div>
        </div>

        <section class="content-section" id="overview-section">
            <h2 class="section-title">Screenshots</h2>
            <div class="screenshot-grid" id="screenshot-grid">{grid}</div>
        </section>

        <section class="content-section" id="table-section">
            <h2 class="section-title">Visits</h2>
            <div class="table-toolbar">
                <input type="text" id="table-search" placeholder="Filter visits...">
                <div class="export-buttons">
                    <button id="export-json-full">JSON (full)</button>
                    <button id="export-json-current">JSON (view)</button>
                    <button id="export-csv-full">CSV (full)</button>
                    <button id="export-csv-current">CSV (view)</button>
                </div>
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>Target</th>
                        <th>Port</th>
                        <th>Response</th>
                        <th>First Visit</th>
                        <th>Last Visit</th>
                        <th>User Agent</th>
                        <th>Screenshot</th>
                    </tr>
                </thead>
                <tbody id="table-body">{rows}</tbody>
            </table>
        </section>

        <section class="content-section" id="outputs-section">
            <h2 class="section-title">Target Lists</h2>
            <div class="outputs-grid">{panels}</div>
        </section>

        <footer class="footer">Generated by PageHawk</footer>
    </div>

    <div class="image-modal" id="image-modal">
        <div class="modal-backdrop" id="modal-backdrop"></div>
        <img id="modal-image" src="" alt="">
    </div>

    <script>
        const reportData = {report_data};
        const flattenedVisits = {visits_json};
        const csvHeader = {csv_header_json};
        const csvRows = {csv_rows_json};
    </script>
    <script>
        let visibleMask = flattenedVisits.map(() => true);

        function tableRows() {{
            return Array.from(document.querySelectorAll('#table-body tr'));
        }}

        function computeMask(term) {{
            const t = term.toLowerCase();
            const mask = flattenedVisits.map(() => t === '');
            tableRows().forEach(row => {{
                const idx = parseInt(row.dataset.index, 10);
                mask[idx] = t === '' || (row.dataset.search || '').includes(t);
            }});
            return mask;
        }}

        function applyMask() {{
            tableRows().forEach(row => {{
                const idx = parseInt(row.dataset.index, 10);
                row.style.display = visibleMask[idx] ? '' : 'none';
            }});
        }}

        const searchInput = document.getElementById('table-search');
        if (searchInput) {{
            searchInput.addEventListener('input', e => {{
                visibleMask = computeMask(e.target.value);
                applyMask();
            }});
        }}

        const mimeTypes = {{
            'json': 'application/json',
            'txt': 'text/plain',
            'csv': 'text/csv'
        }};

        function downloadFile(content, filename, format) {{
            const blob = new Blob([content], {{ type: mimeTypes[format] || 'text/plain' }});
            const url = URL.createObjectURL(blob);
            const a = document.createElement('a');
            a.href = url;
            a.download = filename;
            document.body.appendChild(a);
            try {{
                a.click();
            }} finally {{
                document.body.removeChild(a);
                URL.revokeObjectURL(url);
            }}
        }}

        function currentViewRecords() {{
            return flattenedVisits.filter((_, idx) => visibleMask[idx]);
        }}

        document.getElementById('export-json-full').addEventListener('click', () => {{
            downloadFile(JSON.stringify(reportData, null, 2), 'pagehawk-full-data.json', 'json');
        }});
        document.getElementById('export-json-current').addEventListener('click', () => {{
            downloadFile(JSON.stringify(currentViewRecords(), null, 2), 'pagehawk-current-view.json', 'json');
        }});
        document.getElementById('export-csv-full').addEventListener('click', () => {{
            downloadFile(csvHeader + '\n' + csvRows.map(r => r + '\n').join(''), 'pagehawk-full-data.csv', 'csv');
        }});
        document.getElementById('export-csv-current').addEventListener('click', () => {{
            const rows = csvRows.filter((_, idx) => visibleMask[idx]);
            downloadFile(csvHeader + '\n' + rows.map(r => r + '\n').join(''), 'pagehawk-current-view.csv', 'csv');
        }});

        function flashCopied(btn) {{
            const original = btn.textContent;
            btn.textContent = '✓ Copied!';
            setTimeout(() => {{ btn.textContent = original; }}, 2000);
        }}

        document.querySelectorAll('.copy-btn').forEach(btn => {{
            btn.addEventListener('click', () => {{
                const textarea = document.getElementById('output-' + btn.dataset.output);
                const fallback = () => {{
                    textarea.select();
                    document.execCommand('copy');
                    flashCopied(btn);
                }};
                if (navigator.clipboard && navigator.clipboard.writeText) {{
                    navigator.clipboard.writeText(textarea.value).then(() => flashCopied(btn)).catch(fallback);
                }} else if (document.execCommand) {{
                    fallback();
                }}
            }});
        }});

        function linesOf(text) {{
            return text.split('\n').filter(line => line.trim());
        }}

        function linesToCsv(lines, hasPort) {{
            if (!hasPort) {{
                return 'url\n' + lines.map(l => l + '\n').join('');
            }}
            let csv = 'url;port\n';
            lines.forEach(line => {{
                const i = line.lastIndexOf(':');
                csv += i === -1 ? line + ';\n' : line.substring(0, i) + ';' + line.substring(i + 1) + '\n';
            }});
            return csv;
        }}

        document.querySelectorAll('.format-btn').forEach(btn => {{
            btn.addEventListener('click', () => {{
                const outputId = btn.dataset.output;
                const format = btn.dataset.format;
                const content = document.getElementById('output-' + outputId).value;
                let converted = content;
                if (format === 'json') {{
                    converted = JSON.stringify(linesOf(content), null, 2);
                }} else if (format === 'csv') {{
                    converted = linesToCsv(linesOf(content), outputId.includes('with-ports'));
                }}
                downloadFile(converted, 'pagehawk-' + outputId + '.' + format, format);
            }});
        }});

        const modal = document.getElementById('image-modal');
        const modalImage = document.getElementById('modal-image');

        function openModal(src) {{
            modalImage.src = src;
            modal.classList.add('active');
        }}

        function closeModal() {{
            modal.classList.remove('active');
        }}

        document.getElementById('modal-backdrop').addEventListener('click', closeModal);
        modalImage.addEventListener('click', closeModal);
        document.addEventListener('keydown', e => {{
            if (e.key === 'Escape') closeModal();
        }});

        document.querySelectorAll('.screenshot-thumbnail').forEach(thumb => {{
            thumb.addEventListener('click', () => {{
                const img = thumb.querySelector('img');
                if (img) openModal(img.src);
            }});
        }});

        applyMask();
    </script>
</body>
</html>"##,
            generated = chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            total = stats.total,
            accessible = stats.accessible,
            unreachable = stats.unreachable,
            grid = grid,
            rows = rows,
            panels = panels,
            report_data = report_data,
            visits_json = visits_json,
            csv_header_json = csv_header_json,
            csv_rows_json = csv_rows_json,
        )
    }

    fn screenshot_grid(records: &[VisitRecord]) -> String {
        let mut cards = String::new();
        for (index, record) in records.iter().enumerate() {
            if !record.has_screenshot() {
                continue;
            }
            let filename = record.screenshot_filename.as_deref().unwrap_or_default();
            let path = match record.screenshot_pathname.as_deref() {
                Some(dir) if !dir.is_empty() => format!("{}/{}", dir, filename),
                _ => filename.to_string(),
            };
            let status = if views::is_reachable(record) {
                "status-success"
            } else {
                "status-error"
            };
            let protocol = views::protocol_of(record);

            cards.push_str(&format!(
                r#"
                <div class="screenshot-thumbnail" data-index="{index}">
                    <img src="{path}" alt="{target}" loading="lazy">
                    <div class="thumb-overlay-top-left">
                        <span class="status-indicator {status}"></span>
                        <span class="{protocol_class}">{protocol_label}</span>
                    </div>
                    <div class="thumb-overlay-top-right">{port}</div>
                    <div class="thumb-overlay-bottom">{target}</div>
                </div>"#,
                index = index,
                path = Self::escape_html(&path),
                target = Self::escape_html(record.display_target()),
                status = status,
                protocol_class = protocol.css_class(),
                protocol_label = protocol.label(),
                port = Self::escape_html(&record.port),
            ));
        }
        cards
    }

    fn table_rows(records: &[VisitRecord]) -> String {
        let mut rows = String::new();
        for (index, record) in records.iter().enumerate() {
            let columns = record.display_columns();
            let status_class = views::status_class(record.response.as_ref()).css_class();
            let screenshot_cell = if record.has_screenshot() {
                r#"<span class="screenshot-yes">&#10003;</span>"#
            } else {
                r#"<span class="screenshot-no">&#10007;</span>"#
            };

            rows.push_str(&format!(
                r#"
                <tr data-index="{index}" data-search="{haystack}">
                    <td>{target}</td>
                    <td>{port}</td>
                    <td><span class="status-badge {status_class}">{response}</span></td>
                    <td>{first}</td>
                    <td>{last}</td>
                    <td>{agent}</td>
                    <td>{screenshot}</td>
                </tr>"#,
                index = index,
                haystack = Self::escape_html(&search::haystack(record)),
                target = Self::escape_html(&columns[0]),
                port = Self::escape_html(&columns[1]),
                status_class = status_class,
                response = Self::escape_html(&columns[2]),
                first = Self::escape_html(&columns[3]),
                last = Self::escape_html(&columns[4]),
                agent = Self::escape_html(&columns[5]),
                screenshot = screenshot_cell,
            ));
        }
        rows
    }

    fn output_panels(records: &[VisitRecord]) -> String {
        let mut panels = String::new();
        for variant in OutputVariant::ALL {
            let id = variant.id();
            panels.push_str(&format!(
                r#"
                <div class="output-card">
                    <div class="output-header">
                        <h3>{title}</h3>
                        <div class="output-actions">
                            <button class="copy-btn" data-output="{id}">Copy</button>
                            <button class="format-btn" data-format="json" data-output="{id}">JSON</button>
                            <button class="format-btn" data-format="csv" data-output="{id}">CSV</button>
                            <button class="format-btn" data-format="txt" data-output="{id}">TXT</button>
                        </div>
                    </div>
                    <textarea id="output-{id}" readonly spellcheck="false">{content}</textarea>
                </div>"#,
                title = variant.title(),
                id = id,
                content = Self::escape_html(&variant.content(records)),
            ));
        }
        panels
    }

    fn escape_html(s: &str) -> String {
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&#x27;")
    }
}

// A literal "</script>" inside embedded field data would end the data block
// early; escaping the slash keeps the JSON equivalent.
fn embed_json(json: &str) -> String {
    json.replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flatten::flatten;
    use serde_json::json;
    use tempfile::tempdir;

    fn example_payload() -> Value {
        json!({"ips": [
            {"ip": "10.0.0.1", "ports": [
                {"80": {"response": "200"}},
                {"443": {
                    "response": "502",
                    "screenshot_pathname": "screenshots",
                    "screenshot_filename": "a_https.png",
                }},
            ]},
        ]})
    }

    #[test]
    fn test_report_contains_stats_and_sections() {
        let payload = example_payload();
        let records = flatten(&payload);
        let html = HtmlReporter::new().generate_html(&payload, &records);

        assert!(html.contains(r#"id="total-scanned">2<"#));
        assert!(html.contains(r#"id="accessible">1<"#));
        assert!(html.contains(r#"id="unreachable">1<"#));
        assert!(html.contains(r#"id="screenshot-grid""#));
        assert!(html.contains(r#"id="table-body""#));
        for id in [
            "output-all-targets-no-ports",
            "output-all-targets-with-ports",
            "output-screenshots-no-ports",
            "output-screenshots-with-ports",
            "output-unreachable",
        ] {
            assert!(html.contains(id), "missing panel {}", id);
        }
    }

    #[test]
    fn test_report_renders_screenshot_card_only_when_present() {
        let payload = example_payload();
        let records = flatten(&payload);
        let html = HtmlReporter::new().generate_html(&payload, &records);

        assert!(html.contains("screenshots/a_https.png"));
        assert!(html.contains("protocol-https"));
        // Only the 443 visit captured a screenshot.
        assert_eq!(html.matches(r#"class="screenshot-thumbnail""#).count(), 1);
    }

    #[test]
    fn test_report_escapes_record_text() {
        let payload = json!({"ips": [
            {"ip": "10.0.0.1", "ports": [
                {"80": {"response": "200", "user_agent": "<script>alert(1)</script>"}},
            ]},
        ]});
        let records = flatten(&payload);
        let html = HtmlReporter::new().generate_html(&payload, &records);

        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        // The embedded JSON keeps the value but never a literal closing tag.
        assert!(html.contains("<\\/script>"));
    }

    #[test]
    fn test_rows_carry_search_haystack() {
        let payload = example_payload();
        let records = flatten(&payload);
        let html = HtmlReporter::new().generate_html(&payload, &records);

        assert!(html.contains(r#"data-search="10.0.0.1443502"#));
    }

    #[test]
    fn test_generate_report_writes_file() {
        let dir = tempdir().unwrap();
        let payload = example_payload();
        let records = flatten(&payload);
        let path = dir.path().join("pagehawk_results.html");

        HtmlReporter::new()
            .generate_report(&payload, &records, &path)
            .unwrap();
        let html = std::fs::read_to_string(path).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>"));
    }
}
