#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Restore previously persisted tabs when the session starts.
    /// Off by default: the viewer always starts empty and stale state from a
    /// previous session is cleared instead of restored.
    pub restore_on_start: bool,
    /// Maximum display width for a tab title before it is truncated.
    pub max_tab_title_width: usize,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            restore_on_start: false,
            max_tab_title_width: 24,
        }
    }
}
