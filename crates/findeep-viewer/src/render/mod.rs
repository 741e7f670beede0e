//! Content renderer dispatch.
//!
//! Given an attachment, pick a rendering strategy by payload kind and
//! produce a read-only HTML fragment. The dispatch holds no state and is
//! total: every kind, including ones this build does not know, yields some
//! output rather than an error.

pub mod markdown;

use findeep_core::models::{Attachment, AttachmentPayload, TableData};

use crate::escape::escape_html;

pub use markdown::format_markdown;

pub fn render_attachment(attachment: &Attachment) -> String {
    match &attachment.payload {
        AttachmentPayload::Pdf { url } | AttachmentPayload::Csv { url } => {
            render_embedded_frame(url, &attachment.title)
        }
        AttachmentPayload::Markdown { content } => {
            format!("<div class=\"viewer-prose\">{}</div>", format_markdown(content))
        }
        AttachmentPayload::Text { content } => render_text(content),
        AttachmentPayload::Html { content } => render_html(content),
        AttachmentPayload::Table { data } => render_table(data),
        AttachmentPayload::Unknown => render_unsupported(),
    }
}

/// Referenced documents load inside a sandboxed frame. The sandbox list
/// permits only what embedded previews actually need.
fn render_embedded_frame(url: &str, title: &str) -> String {
    format!(
        "<iframe class=\"viewer-frame\" src=\"{}\" title=\"{}\" \
         sandbox=\"allow-same-origin allow-scripts allow-forms\"></iframe>",
        escape_html(url),
        escape_html(title)
    )
}

fn render_text(content: &str) -> String {
    format!("<pre class=\"viewer-text\">{}</pre>", escape_html(content))
}

fn render_html(content: &str) -> String {
    // TODO: sanitize HTML content in production
    format!("<div class=\"viewer-html\">{}</div>", content)
}

fn render_table(data: &TableData) -> String {
    let mut out = String::from("<table class=\"viewer-table\"><thead><tr>");
    for column in &data.columns {
        out.push_str("<th>");
        out.push_str(&escape_html(column));
        out.push_str("</th>");
    }
    out.push_str("</tr></thead><tbody>");
    for row in &data.rows {
        out.push_str("<tr>");
        for cell in row {
            out.push_str("<td>");
            out.push_str(&escape_html(&cell.to_string()));
            out.push_str("</td>");
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
    out
}

fn render_unsupported() -> String {
    "<div class=\"viewer-placeholder\">Unsupported document type</div>".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use findeep_core::models::Cell;

    #[test]
    fn test_pdf_and_csv_render_sandboxed_frames() {
        let pdf = Attachment::pdf("a1", "Report", "https://example.com/q3.pdf");
        let html = render_attachment(&pdf);
        assert!(html.contains("<iframe"));
        assert!(html.contains("src=\"https://example.com/q3.pdf\""));
        assert!(html.contains("sandbox=\"allow-same-origin allow-scripts allow-forms\""));

        let csv = Attachment::csv("a2", "Ledger <raw>", "https://example.com/l.csv");
        let html = render_attachment(&csv);
        assert!(html.contains("src=\"https://example.com/l.csv\""));
        // The title lands in an attribute, escaped.
        assert!(html.contains("title=\"Ledger &lt;raw&gt;\""));
    }

    #[test]
    fn test_text_renders_escaped_and_preformatted() {
        let attachment = Attachment::text("a1", "Notes", "line one\n  <kept & escaped>");
        let html = render_attachment(&attachment);
        assert!(html.starts_with("<pre"));
        assert!(html.contains("line one\n  &lt;kept &amp; escaped&gt;"));
    }

    #[test]
    fn test_html_is_injected_raw() {
        let attachment = Attachment::html("a1", "Widget", "<b onclick=\"x()\">bold</b>");
        let html = render_attachment(&attachment);
        assert!(html.contains("<b onclick=\"x()\">bold</b>"));
    }

    #[test]
    fn test_table_renders_header_and_rows_in_order() {
        let attachment = Attachment::table(
            "a1",
            "Revenue",
            TableData {
                columns: vec!["quarter".to_string(), "revenue".to_string()],
                rows: vec![
                    vec![Cell::Text("Q1".to_string()), Cell::Number(1250.5)],
                    vec![Cell::Text("Q2".to_string()), Cell::Number(1900.0)],
                ],
            },
        );
        let html = render_attachment(&attachment);
        assert!(html.contains("<th>quarter</th><th>revenue</th>"));
        let q1 = html.find("<td>Q1</td>").expect("Q1 row");
        let q2 = html.find("<td>Q2</td>").expect("Q2 row");
        assert!(q1 < q2);
        assert!(html.contains("<td>1250.5</td>"));
        assert!(html.contains("<td>1900</td>"));
    }

    #[test]
    fn test_ragged_table_still_renders() {
        let attachment = Attachment::table(
            "a1",
            "Ragged",
            TableData {
                columns: vec!["a".to_string(), "b".to_string()],
                rows: vec![vec![Cell::Text("only".to_string())]],
            },
        );
        let html = render_attachment(&attachment);
        assert!(html.contains("<tr><td>only</td></tr>"));
    }

    #[test]
    fn test_table_cells_are_escaped() {
        let attachment = Attachment::table(
            "a1",
            "Cells",
            TableData {
                columns: vec!["<script>".to_string()],
                rows: vec![vec![Cell::Text("a & b".to_string())]],
            },
        );
        let html = render_attachment(&attachment);
        assert!(html.contains("<th>&lt;script&gt;</th>"));
        assert!(html.contains("<td>a &amp; b</td>"));
    }

    #[test]
    fn test_unknown_kind_renders_placeholder() {
        let attachment: Attachment = serde_json::from_str(
            r#"{"id": "x", "title": "Mystery", "mime": "?", "kind": "unknown-future-type"}"#,
        )
        .unwrap();
        let html = render_attachment(&attachment);
        assert_eq!(
            html,
            "<div class=\"viewer-placeholder\">Unsupported document type</div>"
        );
    }
}
