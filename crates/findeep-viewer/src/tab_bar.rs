//! Tab bar and viewer panel presentation.
//!
//! One tab per open document, in open order: a kind glyph, the truncated
//! title, and a close control. The close control is its own element carrying
//! its own hook; hosts must stop the click there before it reaches the tab's
//! activation handler, otherwise closing a tab would also activate it.

use findeep_core::models::{Attachment, AttachmentPayload, ViewerState};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::escape::escape_html;
use crate::render::render_attachment;

/// Glyph shown next to a tab title, by attachment kind.
pub fn kind_glyph(attachment: &Attachment) -> &'static str {
    match attachment.payload {
        AttachmentPayload::Pdf { .. } | AttachmentPayload::Text { .. } => "📄",
        AttachmentPayload::Csv { .. } => "📊",
        AttachmentPayload::Markdown { .. } => "📝",
        AttachmentPayload::Html { .. } => "🌐",
        AttachmentPayload::Table { .. } => "📋",
        AttachmentPayload::Unknown => "📎",
    }
}

/// Truncate a title to fit within a display width, adding an ellipsis when
/// truncated.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let target_width = max_width - 3;
    let mut result = String::new();
    let mut width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if width + char_width > target_width {
            break;
        }
        result.push(c);
        width += char_width;
    }
    result.push_str("...");
    result
}

/// Render the tab strip for the current state.
pub fn render_tab_bar(state: &ViewerState, max_title_width: usize) -> String {
    let mut out = String::from("<div class=\"viewer-tab-bar\">");
    for doc in &state.open_docs {
        let active = state.active_tab_id.as_deref() == Some(doc.tab_id.as_str());
        let class = if active {
            "viewer-tab active"
        } else {
            "viewer-tab"
        };
        let title = escape_html(&doc.attachment.title);
        let shown = escape_html(&truncate_to_width(&doc.attachment.title, max_title_width));
        out.push_str(&format!(
            "<div class=\"{class}\" data-tab-id=\"{tab_id}\">\
             <span class=\"viewer-tab-glyph\">{glyph}</span>\
             <span class=\"viewer-tab-title\" title=\"{title}\">{shown}</span>\
             <button class=\"viewer-tab-close\" data-close-tab-id=\"{tab_id}\" \
             aria-label=\"Close {title}\">×</button>\
             </div>",
            class = class,
            tab_id = escape_html(&doc.tab_id),
            glyph = kind_glyph(&doc.attachment),
            title = title,
            shown = shown,
        ));
    }
    out.push_str("</div>");
    out
}

/// Render the whole viewer panel: tab strip plus the active document, or the
/// empty-state panel when nothing is open.
pub fn render_viewer_panel(state: &ViewerState, max_title_width: usize) -> String {
    if state.open_docs.is_empty() {
        return "<div class=\"viewer-empty\">\
                <h3>No documents open</h3>\
                <p>Click on any attachment in the chat to view it here. You can open \
                multiple documents and switch between them using tabs.</p>\
                </div>"
            .to_string();
    }

    let content = match state.active_doc() {
        Some(doc) => render_attachment(&doc.attachment),
        // A stale active id leaves the pane on a neutral prompt.
        None => "<div class=\"viewer-placeholder\">Select a document to view</div>".to_string(),
    };

    format!(
        "<div class=\"viewer-panel\">{}<div class=\"viewer-content\">{}</div></div>",
        render_tab_bar(state, max_title_width),
        content
    )
}
