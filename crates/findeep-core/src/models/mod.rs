pub mod attachment;
pub mod viewer;

pub use attachment::{Attachment, AttachmentPayload, Cell, TableData};
pub use viewer::{OpenDocument, ViewerState};
