//! Attachment model: one piece of content a chat message or upload produced.
//!
//! Attachments are immutable once created. The viewer only reads them; they
//! are owned by whichever message or pending-upload list references them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A document, dataset, or text blob that can be opened in the viewer.
///
/// The serialized form matches the chat wire format: camelCase fields with
/// the payload discriminated by a `"kind"` tag at the same level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    /// Unique within a session; the viewer deduplicates open tabs by this.
    pub id: String,
    /// Display name shown in the tab bar.
    pub title: String,
    /// Media type as reported by the producer. Informational only; the
    /// renderer dispatches on the payload kind, never on this.
    pub mime: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    #[serde(flatten)]
    pub payload: AttachmentPayload,
}

/// Kind-specific payload. Fields like `url` and `content` are only reachable
/// after matching on the variant, so a CSV can never be read as inline text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AttachmentPayload {
    /// Referenced document, resolved by the rendering layer.
    Pdf { url: String },
    Csv { url: String },
    /// Inline body, rendered as markup or verbatim text.
    Markdown { content: String },
    Text { content: String },
    Html { content: String },
    /// Structured tabular dataset.
    Table { data: TableData },
    /// Any kind tag this build does not know. Payload fields are dropped on
    /// deserialization; the renderer shows a placeholder for these.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableData {
    pub columns: Vec<String>,
    /// Row length is not validated against `columns`; ragged tables render
    /// ragged rather than failing.
    pub rows: Vec<Vec<Cell>>,
}

/// A table cell is a JSON string or number on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Number(n) => write!(f, "{}", n),
        }
    }
}

impl Attachment {
    fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        mime: &str,
        payload: AttachmentPayload,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            mime: mime.to_string(),
            preview: None,
            payload,
        }
    }

    pub fn pdf(id: impl Into<String>, title: impl Into<String>, url: impl Into<String>) -> Self {
        let payload = AttachmentPayload::Pdf { url: url.into() };
        Self::new(id, title, "application/pdf", payload)
    }

    pub fn csv(id: impl Into<String>, title: impl Into<String>, url: impl Into<String>) -> Self {
        let payload = AttachmentPayload::Csv { url: url.into() };
        Self::new(id, title, "text/csv", payload)
    }

    pub fn markdown(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let payload = AttachmentPayload::Markdown {
            content: content.into(),
        };
        Self::new(id, title, "text/markdown", payload)
    }

    pub fn text(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let payload = AttachmentPayload::Text {
            content: content.into(),
        };
        Self::new(id, title, "text/plain", payload)
    }

    pub fn html(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let payload = AttachmentPayload::Html {
            content: content.into(),
        };
        Self::new(id, title, "text/html", payload)
    }

    pub fn table(id: impl Into<String>, title: impl Into<String>, data: TableData) -> Self {
        Self::new(id, title, "application/json", AttachmentPayload::Table { data })
    }

    pub fn with_preview(mut self, preview: impl Into<String>) -> Self {
        self.preview = Some(preview.into());
        self
    }

    /// The wire tag for this attachment's payload.
    pub fn kind(&self) -> &'static str {
        match self.payload {
            AttachmentPayload::Pdf { .. } => "pdf",
            AttachmentPayload::Csv { .. } => "csv",
            AttachmentPayload::Markdown { .. } => "markdown",
            AttachmentPayload::Text { .. } => "text",
            AttachmentPayload::Html { .. } => "html",
            AttachmentPayload::Table { .. } => "table",
            AttachmentPayload::Unknown => "unknown",
        }
    }
}
