//! Host-facing viewer session.
//!
//! Owns the state store, the session persistence port, and the viewer-panel
//! visibility flag, and mirrors every state change to the session store.
//! The session starts empty: persisted tabs from a previous session are
//! cleared on construction unless `restore_on_start` is set.

use crate::config::ViewerConfig;
use crate::models::{Attachment, OpenDocument, ViewerState};
use crate::store::{
    clear_viewer_state, load_viewer_state, save_viewer_state, MemorySessionStore, SessionStore,
    ViewerStore,
};

/// A user-interface event routed through the session.
///
/// Clicking a tab activates it; clicking the tab's close control closes it
/// and only closes it: the close control swallows the click before the
/// tab's own activation handler sees it.
#[derive(Debug, Clone)]
pub enum ViewerEvent {
    AttachmentClicked(Attachment),
    TabClicked(String),
    CloseClicked(String),
}

pub struct ViewerSession {
    store: ViewerStore,
    session_store: Box<dyn SessionStore>,
    visible: bool,
    config: ViewerConfig,
}

impl ViewerSession {
    pub fn new(mut session_store: Box<dyn SessionStore>, config: ViewerConfig) -> Self {
        let store = if config.restore_on_start {
            load_viewer_state(&*session_store)
                .map(ViewerStore::from_state)
                .unwrap_or_default()
        } else {
            // Stale documents from a previous session are cleared rather
            // than restored; the viewer always starts empty.
            clear_viewer_state(&mut *session_store);
            ViewerStore::new()
        };

        Self {
            store,
            session_store,
            visible: false,
            config,
        }
    }

    /// Convenience constructor for hosts without a durable session store.
    pub fn in_memory(config: ViewerConfig) -> Self {
        Self::new(Box::new(MemorySessionStore::new()), config)
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn state(&self) -> &ViewerState {
        self.store.state()
    }

    pub fn active_doc(&self) -> Option<&OpenDocument> {
        self.store.active_doc()
    }

    /// Read access to the underlying session store, e.g. to inspect what
    /// was persisted.
    pub fn session_store(&self) -> &dyn SessionStore {
        &*self.session_store
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
    }

    /// Open an attachment and reveal the viewer panel. Returns the activated
    /// tab id.
    pub fn open_attachment(&mut self, attachment: Attachment) -> String {
        let tab_id = self.store.open_attachment(attachment);
        self.visible = true;
        self.persist();
        tab_id
    }

    pub fn close_tab(&mut self, tab_id: &str) {
        self.store.close_tab(tab_id);
        self.persist();
    }

    pub fn activate_tab(&mut self, tab_id: impl Into<String>) {
        self.store.activate_tab(tab_id);
        self.persist();
    }

    pub fn handle_event(&mut self, event: ViewerEvent) {
        match event {
            ViewerEvent::AttachmentClicked(attachment) => {
                self.open_attachment(attachment);
            }
            ViewerEvent::TabClicked(tab_id) => self.activate_tab(tab_id),
            ViewerEvent::CloseClicked(tab_id) => self.close_tab(&tab_id),
        }
    }

    /// Best-effort mirror of the current state into the session store;
    /// failures are logged inside the persistence layer and never surface
    /// here.
    fn persist(&mut self) {
        save_viewer_state(&mut *self.session_store, self.store.state());
    }
}
