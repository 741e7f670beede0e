//! Session-scoped persistence for the viewer.
//!
//! The viewer depends on an abstract key-value port, never on a concrete
//! backing store. Two backends are provided: an in-memory map (tests and the
//! default session wiring) and a file-per-key directory for hosts that keep
//! session files on disk.
//!
//! Persistence is best effort throughout: a failed read or write is logged
//! as a warning and degrades to "no saved state" or "save skipped". It
//! never interrupts the state mutation that triggered it.

use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::models::ViewerState;

/// Fixed key the serialized [`ViewerState`] lives under.
pub const VIEWER_STATE_KEY: &str = "findeep-viewer-state";

#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("failed to read session entry: {0}")]
    Read(String),
    #[error("failed to write session entry: {0}")]
    Write(String),
}

/// Key-value port over whatever session-scoped storage the host provides.
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionStoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionStoreError>;
    fn remove(&mut self, key: &str) -> Result<(), SessionStoreError>;
}

/// In-memory backend. Contents live exactly as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    entries: HashMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionStoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), SessionStoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// File-backed backend: one `<key>.json` file per entry under a data dir.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionStoreError> {
        match fs::read_to_string(self.entry_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SessionStoreError::Read(e.to_string())),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        fs::create_dir_all(&self.dir).map_err(|e| SessionStoreError::Write(e.to_string()))?;
        fs::write(self.entry_path(key), value)
            .map_err(|e| SessionStoreError::Write(e.to_string()))
    }

    fn remove(&mut self, key: &str) -> Result<(), SessionStoreError> {
        match fs::remove_file(self.entry_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionStoreError::Write(e.to_string())),
        }
    }
}

/// Persist the full viewer state under [`VIEWER_STATE_KEY`].
pub fn save_viewer_state(store: &mut dyn SessionStore, state: &ViewerState) {
    let json = match serde_json::to_string(state) {
        Ok(json) => json,
        Err(e) => {
            warn!("failed to serialize viewer state: {}", e);
            return;
        }
    };
    if let Err(e) = store.set(VIEWER_STATE_KEY, &json) {
        warn!("failed to save viewer state: {}", e);
    }
}

/// Load a previously saved viewer state, or `None` when nothing usable is
/// stored. Malformed text and structurally invalid shapes are treated as
/// absence, not errors.
pub fn load_viewer_state(store: &dyn SessionStore) -> Option<ViewerState> {
    let stored = match store.get(VIEWER_STATE_KEY) {
        Ok(Some(stored)) => stored,
        Ok(None) => return None,
        Err(e) => {
            warn!("failed to load viewer state: {}", e);
            return None;
        }
    };

    let parsed: Value = match serde_json::from_str(&stored) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("failed to parse saved viewer state: {}", e);
            return None;
        }
    };

    if !has_viewer_state_shape(&parsed) {
        warn!("saved viewer state has an invalid structure, ignoring it");
        return None;
    }

    match serde_json::from_value(parsed) {
        Ok(state) => Some(state),
        Err(e) => {
            warn!("failed to decode saved viewer state: {}", e);
            None
        }
    }
}

/// Remove any saved viewer state.
pub fn clear_viewer_state(store: &mut dyn SessionStore) {
    if let Err(e) = store.remove(VIEWER_STATE_KEY) {
        warn!("failed to clear viewer state: {}", e);
    }
}

/// Structural check before the typed decode: `openDocs` must be an array and
/// `activeTabId` must be present as a string or an explicit null.
fn has_viewer_state_shape(value: &Value) -> bool {
    let Some(object) = value.as_object() else {
        return false;
    };
    let open_docs_ok = object
        .get("openDocs")
        .map(Value::is_array)
        .unwrap_or(false);
    let active_ok = matches!(
        object.get("activeTabId"),
        Some(Value::Null) | Some(Value::String(_))
    );
    open_docs_ok && active_ok
}
