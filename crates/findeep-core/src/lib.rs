pub mod config;
pub mod models;
pub mod session;
pub mod store;
pub mod tab_id;

// Re-export the types hosts touch at crate root for convenience
pub use config::ViewerConfig;
pub use models::{Attachment, AttachmentPayload, Cell, OpenDocument, TableData, ViewerState};
pub use session::{ViewerEvent, ViewerSession};
pub use store::{
    FileSessionStore, MemorySessionStore, SessionStore, SessionStoreError, ViewerStore,
};
pub use tab_id::generate_tab_id;
