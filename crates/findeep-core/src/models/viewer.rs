//! Viewer aggregate state: the open tabs and which one is focused.

use serde::{Deserialize, Serialize};

use super::attachment::Attachment;

/// One open tab wrapping an attachment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenDocument {
    /// Copy of the attachment's id; the dedup key for opens.
    pub id: String,
    pub attachment: Attachment,
    /// Synthetic identifier allocated at open time. The sole key for
    /// tab-list operations; never derived from the attachment.
    pub tab_id: String,
}

/// Ordered open tabs plus the focused tab.
///
/// Invariants held by the store after every mutation:
/// - insertion order is display order, and no two entries share an
///   `attachment.id`;
/// - `active_tab_id`, when `Some`, names a `tab_id` present in `open_docs`
///   (the close operation re-selects when it removes the active tab).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerState {
    pub open_docs: Vec<OpenDocument>,
    pub active_tab_id: Option<String>,
}

impl ViewerState {
    /// Look up the focused document, if any tab is focused and still open.
    pub fn active_doc(&self) -> Option<&OpenDocument> {
        let active = self.active_tab_id.as_deref()?;
        self.open_docs.iter().find(|doc| doc.tab_id == active)
    }
}
