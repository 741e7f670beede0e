//! Minimal markdown-to-markup transform.
//!
//! Deliberately partial, not a full Markdown grammar: headings 1-3, bold,
//! italic, paragraph breaks on blank lines, hard breaks on single newlines.
//! Nested and mixed inline edge cases are not handled.

use regex::Regex;
use std::sync::OnceLock;

static H3: OnceLock<Regex> = OnceLock::new();
static H2: OnceLock<Regex> = OnceLock::new();
static H1: OnceLock<Regex> = OnceLock::new();
static BOLD: OnceLock<Regex> = OnceLock::new();
static ITALIC: OnceLock<Regex> = OnceLock::new();

fn pattern(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("valid regex"))
}

/// Transform markdown `content` into an HTML string.
///
/// Replacement order matters: deeper headings first so `#` does not eat
/// `###`, then inline emphasis, then line structure.
pub fn format_markdown(content: &str) -> String {
    let text = pattern(&H3, r"(?m)^### (.*)$").replace_all(content, "<h3>$1</h3>");
    let text = pattern(&H2, r"(?m)^## (.*)$").replace_all(&text, "<h2>$1</h2>");
    let text = pattern(&H1, r"(?m)^# (.*)$").replace_all(&text, "<h1>$1</h1>");
    let text = pattern(&BOLD, r"\*\*(.*)\*\*").replace_all(&text, "<strong>$1</strong>");
    let text = pattern(&ITALIC, r"\*(.*)\*").replace_all(&text, "<em>$1</em>");
    let text = text.replace("\n\n", "</p><p>");
    let text = text.replace('\n', "<br>");
    format!("<p>{}</p>", text)
}
