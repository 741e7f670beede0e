pub mod session;
pub mod viewer;

pub use session::{
    clear_viewer_state, load_viewer_state, save_viewer_state, FileSessionStore,
    MemorySessionStore, SessionStore, SessionStoreError, VIEWER_STATE_KEY,
};
pub use viewer::ViewerStore;
