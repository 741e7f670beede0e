//! Viewer state store.
//!
//! A self-contained state machine over [`ViewerState`]: open, close, and
//! activate are the only mutations, and the active-tab invariant is restored
//! by `close_tab` whenever it removes the focused tab.

use crate::models::{Attachment, OpenDocument, ViewerState};
use crate::tab_id::generate_tab_id;

#[derive(Debug, Clone, Default)]
pub struct ViewerStore {
    state: ViewerState,
}

impl ViewerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing state, e.g. one restored from the session store.
    pub fn from_state(state: ViewerState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn open_docs(&self) -> &[OpenDocument] {
        &self.state.open_docs
    }

    pub fn active_tab_id(&self) -> Option<&str> {
        self.state.active_tab_id.as_deref()
    }

    pub fn active_doc(&self) -> Option<&OpenDocument> {
        self.state.active_doc()
    }

    pub fn is_empty(&self) -> bool {
        self.state.open_docs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.state.open_docs.len()
    }

    /// Open an attachment, deduplicating by attachment id.
    ///
    /// If a tab for this attachment already exists it is re-activated and no
    /// tab is created; otherwise a new tab is appended at the end (open order
    /// is display order) and focused. Returns the activated tab id.
    pub fn open_attachment(&mut self, attachment: Attachment) -> String {
        if let Some(doc) = self
            .state
            .open_docs
            .iter()
            .find(|doc| doc.attachment.id == attachment.id)
        {
            let tab_id = doc.tab_id.clone();
            self.state.active_tab_id = Some(tab_id.clone());
            return tab_id;
        }

        let tab_id = generate_tab_id();
        self.state.open_docs.push(OpenDocument {
            id: attachment.id.clone(),
            attachment,
            tab_id: tab_id.clone(),
        });
        self.state.active_tab_id = Some(tab_id.clone());
        tab_id
    }

    /// Close a tab by id. Unknown ids are a no-op.
    ///
    /// When the focused tab is closed, the last remaining tab (the most
    /// recently opened survivor, not the adjacent one) becomes active; an
    /// emptied list clears the focus.
    pub fn close_tab(&mut self, tab_id: &str) {
        let before = self.state.open_docs.len();
        self.state.open_docs.retain(|doc| doc.tab_id != tab_id);
        if self.state.open_docs.len() == before {
            return;
        }

        if self.state.active_tab_id.as_deref() == Some(tab_id) {
            self.state.active_tab_id =
                self.state.open_docs.last().map(|doc| doc.tab_id.clone());
        }
    }

    /// Focus a tab by id.
    ///
    /// No existence check is performed: a stale id leaves the content pane
    /// empty until the next open. Callers are expected to pass ids sourced
    /// from the current tab bar.
    pub fn activate_tab(&mut self, tab_id: impl Into<String>) {
        self.state.active_tab_id = Some(tab_id.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cell, TableData};

    fn text_attachment(id: &str) -> Attachment {
        Attachment::text(id, format!("Doc {}", id), "hello")
    }

    #[test]
    fn test_open_is_idempotent_per_attachment() {
        let mut store = ViewerStore::new();
        let first = store.open_attachment(text_attachment("a1"));
        let second = store.open_attachment(text_attachment("a1"));

        assert_eq!(first, second);
        assert_eq!(store.len(), 1);
        assert_eq!(store.active_tab_id(), Some(first.as_str()));
    }

    #[test]
    fn test_open_order_is_display_order() {
        let mut store = ViewerStore::new();
        for id in ["a1", "a2", "a3", "a4"] {
            store.open_attachment(text_attachment(id));
        }

        let ids: Vec<&str> = store.open_docs().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "a2", "a3", "a4"]);
        assert_eq!(store.active_doc().unwrap().id, "a4");
    }

    #[test]
    fn test_close_active_tab_selects_last_survivor() {
        let mut store = ViewerStore::new();
        let t1 = store.open_attachment(text_attachment("a1"));
        let _t2 = store.open_attachment(text_attachment("a2"));
        let t3 = store.open_attachment(text_attachment("a3"));

        // Focus the first tab, then close it: the last survivor wins, not
        // the adjacent one.
        store.activate_tab(t1.clone());
        store.close_tab(&t1);

        assert_eq!(store.len(), 2);
        assert_eq!(store.active_tab_id(), Some(t3.as_str()));
    }

    #[test]
    fn test_close_inactive_tab_keeps_focus() {
        let mut store = ViewerStore::new();
        let t1 = store.open_attachment(text_attachment("a1"));
        let t2 = store.open_attachment(text_attachment("a2"));

        store.close_tab(&t1);
        assert_eq!(store.active_tab_id(), Some(t2.as_str()));
    }

    #[test]
    fn test_close_last_tab_clears_focus() {
        let mut store = ViewerStore::new();
        let t1 = store.open_attachment(text_attachment("a1"));
        store.close_tab(&t1);

        assert!(store.is_empty());
        assert_eq!(store.active_tab_id(), None);
    }

    #[test]
    fn test_close_unknown_tab_is_noop() {
        let mut store = ViewerStore::new();
        let t1 = store.open_attachment(text_attachment("a1"));

        store.close_tab("tab-0-nonsense");
        assert_eq!(store.len(), 1);
        assert_eq!(store.active_tab_id(), Some(t1.as_str()));

        // Closing on an empty store is equally silent.
        store.close_tab(&t1);
        store.close_tab(&t1);
        assert!(store.is_empty());
    }

    #[test]
    fn test_activate_accepts_stale_id() {
        let mut store = ViewerStore::new();
        store.open_attachment(text_attachment("a1"));

        store.activate_tab("tab-0-stale");
        assert_eq!(store.active_tab_id(), Some("tab-0-stale"));
        assert!(store.active_doc().is_none());
    }

    #[test]
    fn test_open_close_scenario() {
        let mut store = ViewerStore::new();

        let t1 = store.open_attachment(Attachment::text("a1", "a1", "hello"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.active_tab_id(), Some(t1.as_str()));

        let t2 = store.open_attachment(Attachment::table(
            "a2",
            "a2",
            TableData {
                columns: vec!["x".to_string()],
                rows: vec![vec![Cell::Text("1".to_string())]],
            },
        ));
        let ids: Vec<&str> = store.open_docs().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "a2"]);
        assert_eq!(store.active_tab_id(), Some(t2.as_str()));

        // Re-opening a1 reverts focus to its existing tab without growing
        // the list.
        let reopened = store.open_attachment(Attachment::text("a1", "a1", "hello"));
        assert_eq!(reopened, t1);
        assert_eq!(store.len(), 2);
        assert_eq!(store.active_tab_id(), Some(t1.as_str()));

        store.close_tab(&t1);
        assert_eq!(store.len(), 1);
        assert_eq!(store.active_tab_id(), Some(t2.as_str()));

        store.close_tab(&t2);
        assert!(store.is_empty());
        assert_eq!(store.active_tab_id(), None);
    }
}
