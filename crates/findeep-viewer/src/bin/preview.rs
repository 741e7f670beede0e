//! Render a sample viewer session to stdout as a standalone HTML page.
//!
//! Useful for eyeballing the renderer dispatch and tab bar without a host
//! application: `cargo run -p findeep-viewer --bin preview > preview.html`.

use findeep_core::models::{Attachment, Cell, TableData};
use findeep_core::{ViewerConfig, ViewerSession};
use findeep_viewer::render_viewer_panel;

fn sample_attachments() -> Vec<Attachment> {
    vec![
        Attachment::markdown(
            "doc-quarterly-summary",
            "Quarterly Summary",
            "# Q3 Summary\n\nRevenue grew **12%** quarter over quarter.\n\n\
             ## Drivers\nSubscriptions led, with *services* flat.",
        )
        .with_preview("Q3 revenue summary"),
        Attachment::table(
            "doc-revenue-table",
            "Revenue by Quarter",
            TableData {
                columns: vec!["quarter".to_string(), "revenue".to_string()],
                rows: vec![
                    vec![Cell::Text("Q1".to_string()), Cell::Number(1250.5)],
                    vec![Cell::Text("Q2".to_string()), Cell::Number(1420.0)],
                    vec![Cell::Text("Q3".to_string()), Cell::Number(1590.25)],
                ],
            },
        ),
        Attachment::text(
            "doc-analyst-notes",
            "Analyst Notes",
            "2026-08-06\n  - margins stable\n  - watch churn in SMB segment",
        ),
    ]
}

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let config = ViewerConfig::default();
    let max_title_width = config.max_tab_title_width;
    let mut session = ViewerSession::in_memory(config);
    for attachment in sample_attachments() {
        session.open_attachment(attachment);
    }

    let panel = render_viewer_panel(session.state(), max_title_width);
    println!(
        "<!doctype html><html><head><meta charset=\"utf-8\"><title>FinDeep viewer preview</title>\
         <style>body{{font-family:Segoe UI,Arial,sans-serif;max-width:960px;margin:24px auto}}\
         .viewer-tab-bar{{display:flex;border-bottom:1px solid #ccc}}\
         .viewer-tab{{padding:6px 10px;cursor:pointer}}\
         .viewer-tab.active{{border-bottom:2px solid #46f}}\
         .viewer-table{{border-collapse:collapse}}\
         .viewer-table td,.viewer-table th{{border:1px solid #ccc;padding:6px}}</style>\
         </head><body>{}</body></html>",
        panel
    );
}
